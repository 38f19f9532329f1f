use crate::core::models::peak::PeakRecord;
use crate::core::models::spectrum::Spectrum;
use crate::core::spectral::calibration::AxisCalibration;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::{calibrate, render};
use tracing::{info, instrument};

/// Simulates an SLF spectrum from a peak list.
///
/// Each peak becomes a 2D Gaussian of `config.amplitude` centred at its
/// calibrated position, with the configured per-axis linewidths; overlapping
/// peaks add up. The returned spectrum carries both axes, dipolar rows first.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    peaks: &[PeakRecord],
    config: &SimulationConfig,
    reporter: &ProgressReporter,
) -> Result<Spectrum, EngineError> {
    info!(
        peaks = peaks.len(),
        shape = ?config.shape(),
        "Starting spectrum simulation."
    );

    // === Phase 1: Map ppm positions and linewidths to grid points ===
    reporter.report(Progress::PhaseStart {
        name: "Calibration",
    });
    let calibrated = calibrate::run(peaks, config, reporter)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Accumulate lineshapes ===
    reporter.report(Progress::PhaseStart { name: "Rendering" });
    let grid = render::run(&calibrated, config.shape(), config.window, reporter)?;
    reporter.report(Progress::PhaseFinish);

    let (row, col, max) = grid.argmax();
    if !calibrated.is_empty() {
        let row_ppm = AxisCalibration::new(&config.dipolar.axis).to_ppm(row as f64);
        let col_ppm = AxisCalibration::new(&config.chemical_shift.axis).to_ppm(col as f64);
        info!(
            max_intensity = max,
            max_cell = ?(row, col),
            max_ppm = %format!("({:.3}, {:.3})", row_ppm, col_ppm),
            total_intensity = grid.sum(),
            "Simulation finished."
        );
    } else {
        info!("Simulation finished with an empty peak list.");
    }

    Ok(Spectrum::new(
        config.dipolar.axis.clone(),
        config.chemical_shift.axis.clone(),
        grid,
    )?)
}
