use crate::core::models::grid::SpectrumGrid;
use crate::core::models::peak::CalibratedPeak;
use crate::core::spectral::lineshape::{RenderWindow, profile, support};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Adds one separable 2D Gaussian to `grid`.
///
/// Only cells inside `window` are touched; a peak whose window misses the
/// grid entirely contributes nothing.
pub fn render_peak(grid: &mut SpectrumGrid, peak: &CalibratedPeak, window: RenderWindow) {
    let (rows, cols) = grid.shape();
    let (p0, p1) = peak.position_points;
    let (w0, w1) = peak.linewidth_points;

    let Some(row_range) = support(p0, w0, window, rows) else {
        return;
    };
    let Some(col_range) = support(p1, w1, window, cols) else {
        return;
    };

    let row_profile = profile(p0, w0, row_range.clone());
    let col_profile: Vec<f64> = profile(p1, w1, col_range.clone())
        .into_iter()
        .map(|g| g * peak.amplitude)
        .collect();

    for (row, row_weight) in row_range.zip(row_profile) {
        if let Some(cells) = grid.row_mut(row) {
            for (cell, col_weight) in cells[col_range.clone()].iter_mut().zip(&col_profile) {
                *cell += (row_weight * col_weight) as f32;
            }
        }
    }
}

/// Renders all peaks into a fresh grid of `shape` (rows, columns).
///
/// With the `parallel` feature, peaks are split across the rayon pool, each
/// worker accumulating into its own partial grid before an elementwise
/// reduction.
#[instrument(skip_all, name = "render_task")]
pub fn run(
    peaks: &[CalibratedPeak],
    shape: (usize, usize),
    window: RenderWindow,
    reporter: &ProgressReporter,
) -> Result<SpectrumGrid, EngineError> {
    let empty = SpectrumGrid::zeros(shape.0, shape.1)?;
    debug!(peaks = peaks.len(), ?shape, ?window, "Rendering peaks.");

    reporter.report(Progress::TaskStart {
        total_steps: peaks.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let grid = peaks.iter().fold(empty, |mut grid, peak| {
        render_peak(&mut grid, peak, window);
        reporter.report(Progress::TaskIncrement);
        grid
    });

    #[cfg(feature = "parallel")]
    let grid = peaks
        .par_iter()
        .fold(
            || empty.clone(),
            |mut grid, peak| {
                render_peak(&mut grid, peak, window);
                reporter.report(Progress::TaskIncrement);
                grid
            },
        )
        .reduce(
            || empty.clone(),
            |mut acc, partial| {
                acc.accumulate(&partial);
                acc
            },
        );

    reporter.report(Progress::TaskFinish);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spectral::lineshape::gaussian_volume;

    fn peak(p0: f64, p1: f64) -> CalibratedPeak {
        CalibratedPeak {
            position_points: (p0, p1),
            linewidth_points: (3.0, 5.0),
            amplitude: 100.0,
        }
    }

    fn render_one(p: &CalibratedPeak, shape: (usize, usize), window: RenderWindow) -> SpectrumGrid {
        let mut grid = SpectrumGrid::zeros(shape.0, shape.1).unwrap();
        render_peak(&mut grid, p, window);
        grid
    }

    #[test]
    fn maximum_sits_at_nearest_cell() {
        let grid = render_one(&peak(20.3, 41.7), (64, 96), RenderWindow::default());
        let (row, col, value) = grid.argmax();
        assert_eq!((row, col), (20, 42));
        assert!(value > 0.0 && value <= 100.0);
    }

    #[test]
    fn integer_centre_reaches_full_amplitude() {
        let grid = render_one(&peak(10.0, 30.0), (32, 64), RenderWindow::Full);
        assert!((grid.get(10, 30).unwrap() - 100.0).abs() < 1e-4);
    }

    #[test]
    fn intensity_decays_monotonically_away_from_centre() {
        let grid = render_one(&peak(30.0, 50.0), (64, 128), RenderWindow::Full);
        for r in 30..63 {
            assert!(grid.get(r, 50).unwrap() >= grid.get(r + 1, 50).unwrap());
        }
        for r in 1..=30 {
            assert!(grid.get(r, 50).unwrap() >= grid.get(r - 1, 50).unwrap());
        }
        for c in 50..127 {
            assert!(grid.get(30, c).unwrap() >= grid.get(30, c + 1).unwrap());
        }
    }

    #[test]
    fn half_height_at_half_linewidth() {
        let grid = render_one(&peak(20.0, 40.0), (48, 96), RenderWindow::Full);
        let value = grid.get(20, 40).unwrap() as f64;
        let shifted = peak(21.5, 40.0);
        let grid_shifted = render_one(&shifted, (48, 96), RenderWindow::Full);
        let half = grid_shifted.get(20, 40).unwrap() as f64;
        assert!((half / value - 0.5).abs() < 1e-5);
    }

    #[test]
    fn rendering_is_additive() {
        let shape = (64, 64);
        let a = peak(20.0, 25.5);
        let b = peak(22.4, 30.1);

        let mut both = SpectrumGrid::zeros(64, 64).unwrap();
        render_peak(&mut both, &a, RenderWindow::default());
        render_peak(&mut both, &b, RenderWindow::default());

        let mut separate = render_one(&a, shape, RenderWindow::default());
        separate.merge(&render_one(&b, shape, RenderWindow::default())).unwrap();

        for (x, y) in both.as_slice().iter().zip(separate.as_slice()) {
            assert!((x - y).abs() <= 1e-4 * x.abs().max(1.0));
        }
    }

    #[test]
    fn windowed_rendering_matches_full_grid() {
        let p = peak(31.2, 47.9);
        let windowed = render_one(&p, (64, 96), RenderWindow::default());
        let full = render_one(&p, (64, 96), RenderWindow::Full);
        for (x, y) in windowed.as_slice().iter().zip(full.as_slice()) {
            assert!((x - y).abs() <= f32::EPSILON * 100.0);
        }
    }

    #[test]
    fn total_energy_matches_closed_form() {
        let p = peak(40.0, 60.0);
        let grid = render_one(&p, (80, 120), RenderWindow::default());
        let expected = gaussian_volume(100.0, 3.0, 5.0);
        assert!((grid.sum() - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn off_grid_peak_contributes_only_its_tail() {
        let grid = render_one(&peak(-2.0, 30.0), (32, 64), RenderWindow::default());
        assert!(grid.get(0, 30).unwrap() > 0.0);
        assert!(grid.get(0, 30).unwrap() < 100.0);

        let far = render_one(&peak(-500.0, 30.0), (32, 64), RenderWindow::default());
        assert_eq!(far.count_nonzero(), 0);
    }

    #[test]
    fn run_sums_all_peaks_and_reports_progress() {
        use std::sync::atomic::{AtomicU64, Ordering};

        let increments = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::TaskIncrement = event {
                increments.fetch_add(1, Ordering::Relaxed);
            }
        }));
        let peaks: Vec<CalibratedPeak> = (0..12)
            .map(|i| peak(10.0 + i as f64 * 3.0, 20.0 + i as f64 * 5.0))
            .collect();

        let grid = run(&peaks, (64, 96), RenderWindow::default(), &reporter).unwrap();
        drop(reporter);

        let mut expected = SpectrumGrid::zeros(64, 96).unwrap();
        for p in &peaks {
            render_peak(&mut expected, p, RenderWindow::default());
        }
        for (x, y) in grid.as_slice().iter().zip(expected.as_slice()) {
            assert!((x - y).abs() <= 1e-4 * x.abs().max(1.0));
        }
        assert_eq!(increments.load(Ordering::Relaxed), 12);
    }

    #[test]
    fn run_with_no_peaks_yields_zero_grid() {
        let grid = run(&[], (8, 8), RenderWindow::default(), &ProgressReporter::new()).unwrap();
        assert_eq!(grid.count_nonzero(), 0);
    }

    #[test]
    fn run_rejects_empty_shape() {
        let result = run(&[], (0, 8), RenderWindow::default(), &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Grid { .. })));
    }
}
