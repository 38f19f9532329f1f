use std::f64::consts::{LN_2, PI};
use std::ops::Range;

const FOUR_LN_2: f64 = 4.0 * LN_2;

/// How much of the grid a single peak is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderWindow {
    /// Evaluate every point of the axis.
    Full,
    /// Evaluate only within this many linewidths (FWHM) on each side of the centre.
    Fwhm(f64),
}

impl Default for RenderWindow {
    fn default() -> Self {
        RenderWindow::Fwhm(5.0)
    }
}

/// Unit-height Gaussian parameterized by its full width at half maximum.
#[inline]
pub fn gaussian_fwhm(x: f64, center: f64, fwhm: f64) -> f64 {
    let reduced = (x - center) / fwhm;
    (-FOUR_LN_2 * reduced * reduced).exp()
}

/// Volume under `amplitude * g(x; w0) * g(y; w1)` over the whole plane.
pub fn gaussian_volume(amplitude: f64, fwhm0: f64, fwhm1: f64) -> f64 {
    amplitude * fwhm0 * fwhm1 * PI / FOUR_LN_2
}

/// Grid indices along one axis that a peak contributes to, clipped to `[0, size)`.
///
/// Returns `None` when the window lies entirely off the grid.
pub fn support(center: f64, fwhm: f64, window: RenderWindow, size: usize) -> Option<Range<usize>> {
    let (lo, hi) = match window {
        RenderWindow::Full => (0.0, size as f64),
        RenderWindow::Fwhm(multiple) => {
            let half = multiple * fwhm;
            ((center - half).floor(), (center + half).ceil() + 1.0)
        }
    };
    let lo = lo.clamp(0.0, size as f64) as usize;
    let hi = hi.clamp(0.0, size as f64) as usize;
    if lo < hi { Some(lo..hi) } else { None }
}

/// Samples a unit Gaussian at each integer index of `range`.
pub fn profile(center: f64, fwhm: f64, range: Range<usize>) -> Vec<f64> {
    range
        .map(|i| gaussian_fwhm(i as f64, center, fwhm))
        .collect()
}
