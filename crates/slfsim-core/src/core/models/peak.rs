/// A peak as it appears in a Sparky peak list.
///
/// `ppm_dim0` is the `w1` column (dipolar coupling, rows of the spectrum) and
/// `ppm_dim1` the `w2` column (15N chemical shift, columns of the spectrum).
#[derive(Debug, Clone, PartialEq)]
pub struct PeakRecord {
    pub label: String,
    pub ppm_dim0: f64,
    pub ppm_dim1: f64,
}

impl PeakRecord {
    pub fn new(label: &str, ppm_dim0: f64, ppm_dim1: f64) -> Self {
        Self {
            label: label.to_string(),
            ppm_dim0,
            ppm_dim1,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.ppm_dim0.is_finite() && self.ppm_dim1.is_finite()
    }
}

/// A peak converted to grid coordinates, ready to be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibratedPeak {
    /// Fractional (row, column) position; may lie outside the grid.
    pub position_points: (f64, f64),
    /// Full width at half maximum along (rows, columns), in points.
    pub linewidth_points: (f64, f64),
    pub amplitude: f64,
}
