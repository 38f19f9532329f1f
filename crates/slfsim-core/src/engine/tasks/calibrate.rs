use crate::core::models::peak::{CalibratedPeak, PeakRecord};
use crate::core::spectral::calibration::AxisCalibration;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

/// Converts ppm peaks to grid coordinates with the run's per-axis linewidths.
///
/// Peaks falling outside the spectral window are kept; their tails may still
/// reach the grid. Their number is reported as a progress message.
#[instrument(skip_all, name = "calibrate_task")]
pub fn run(
    peaks: &[PeakRecord],
    config: &SimulationConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<CalibratedPeak>, EngineError> {
    let rows = AxisCalibration::new(&config.dipolar.axis);
    let cols = AxisCalibration::new(&config.chemical_shift.axis);
    let linewidth_points = (
        rows.linewidth_to_points(config.dipolar.linewidth_hz),
        cols.linewidth_to_points(config.chemical_shift.linewidth_hz),
    );

    let (row_left, row_right) = rows.ppm_limits();
    let (col_left, col_right) = cols.ppm_limits();
    debug!(
        w1_window = %format!("{:.3}..{:.3} ppm", row_left, row_right),
        w2_window = %format!("{:.3}..{:.3} ppm", col_left, col_right),
        linewidth_points = ?linewidth_points,
        "Axis calibration ready."
    );

    let (n_rows, n_cols) = config.shape();
    let mut outside = 0usize;
    let mut calibrated = Vec::with_capacity(peaks.len());
    for peak in peaks {
        if !peak.is_finite() {
            return Err(EngineError::InvalidPeak {
                label: peak.label.clone(),
                reason: format!(
                    "non-finite position ({}, {})",
                    peak.ppm_dim0, peak.ppm_dim1
                ),
            });
        }
        let position_points = (rows.to_points(peak.ppm_dim0), cols.to_points(peak.ppm_dim1));
        if !is_inside(position_points.0, n_rows) || !is_inside(position_points.1, n_cols) {
            outside += 1;
            debug!(label = %peak.label, "Peak centre lies outside the spectral window.");
        }
        calibrated.push(CalibratedPeak {
            position_points,
            linewidth_points,
            amplitude: config.amplitude,
        });
    }

    if outside > 0 {
        info!(outside, total = peaks.len(), "Some peaks lie outside the spectral window.");
        reporter.report(Progress::Message(format!(
            "{} of {} peaks lie outside the spectral window",
            outside,
            peaks.len()
        )));
    }
    Ok(calibrated)
}

fn is_inside(position: f64, size: usize) -> bool {
    (0.0..size as f64).contains(&position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::test_config;
    use std::sync::Mutex;

    fn quiet() -> ProgressReporter<'static> {
        ProgressReporter::new()
    }

    #[test]
    fn calibrates_position_and_linewidths() {
        let config = test_config();
        let peaks = run(&[PeakRecord::new("A1H-N", 8.0, 120.0)], &config, &quiet()).unwrap();

        assert_eq!(peaks.len(), 1);
        let peak = peaks[0];
        assert!((peak.position_points.0 - 249.856).abs() < 1e-9);
        let expected_col = (10000.0 - (120.0 * 60.7639142 - 5600.0)) * 2048.0 / 20000.0;
        assert!((peak.position_points.1 - expected_col).abs() < 1e-9);
        assert!((peak.linewidth_points.0 - 3.2768).abs() < 1e-12);
        assert!((peak.linewidth_points.1 - 10.24).abs() < 1e-12);
        assert_eq!(peak.amplitude, 100.0);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let config = test_config();
        let input = vec![
            PeakRecord::new("a", 1.0, 110.0),
            PeakRecord::new("b", 1.0, 110.0),
            PeakRecord::new("c", -4.0, 130.0),
        ];
        let peaks = run(&input, &config, &quiet()).unwrap();
        assert_eq!(peaks.len(), 3);
        assert_eq!(peaks[0], peaks[1]);
        assert!(peaks[2].position_points.0 > peaks[0].position_points.0);
    }

    #[test]
    fn off_window_peaks_are_kept() {
        let config = test_config();
        let peaks = run(&[PeakRecord::new("far", 500.0, 120.0)], &config, &quiet()).unwrap();
        assert!(peaks[0].position_points.0 < 0.0);
    }

    #[test]
    fn off_window_peaks_are_announced() {
        let messages = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(text) = event {
                messages.lock().unwrap().push(text);
            }
        }));
        let input = [
            PeakRecord::new("far", 500.0, 120.0),
            PeakRecord::new("near", 8.0, 120.0),
        ];
        run(&input, &test_config(), &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            messages.into_inner().unwrap(),
            vec!["1 of 2 peaks lie outside the spectral window".to_string()]
        );
    }

    #[test]
    fn in_window_peaks_send_no_message() {
        let sent = Mutex::new(0usize);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(_) = event {
                *sent.lock().unwrap() += 1;
            }
        }));
        run(&[PeakRecord::new("a", 8.0, 120.0)], &test_config(), &reporter).unwrap();
        drop(reporter);
        assert_eq!(sent.into_inner().unwrap(), 0);
    }

    #[test]
    fn non_finite_peak_is_rejected() {
        let config = test_config();
        let err = run(&[PeakRecord::new("bad", f64::NAN, 120.0)], &config, &quiet()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPeak { ref label, .. } if label == "bad"));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(run(&[], &test_config(), &quiet()).unwrap().is_empty());
    }
}
