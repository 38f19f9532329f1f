use crate::core::models::axis::SpectrumAxis;
use crate::core::spectral::lineshape::RenderWindow;
use thiserror::Error;

pub const DEFAULT_AMPLITUDE: f64 = 100.0;

pub const DIPOLAR_SECTION: &str = "dipolar";
pub const CHEMICAL_SHIFT_SECTION: &str = "chemical-shift";
/// Largest point count a UCSF axis header can record.
pub const MAX_AXIS_SIZE: usize = u32::MAX as usize;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{parameter}' must be positive (got {value})")]
    NonPositive { parameter: String, value: f64 },
    #[error("Parameter '{parameter}' must be finite (got {value})")]
    NonFinite { parameter: String, value: f64 },
    #[error("Render window must span a positive, finite number of linewidths (got {0})")]
    InvalidWindow(f64),
    #[error("Parameter '{parameter}' must not exceed {max} (got {value})")]
    TooLarge {
        parameter: String,
        value: usize,
        max: usize,
    },
}

/// Calibration and linewidth of one spectral dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionConfig {
    pub axis: SpectrumAxis,
    pub linewidth_hz: f64,
}

/// Validated parameters of one simulation run.
///
/// `dipolar` is dimension 0 (grid rows, peak-list column `w1`) and
/// `chemical_shift` is dimension 1 (grid columns, peak-list column `w2`).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub dipolar: DimensionConfig,
    pub chemical_shift: DimensionConfig,
    pub amplitude: f64,
    pub window: RenderWindow,
}

impl SimulationConfig {
    /// Grid shape as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.dipolar.axis.size, self.chemical_shift.axis.size)
    }
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    dipolar: Option<DimensionConfig>,
    chemical_shift: Option<DimensionConfig>,
    amplitude: Option<f64>,
    window: Option<RenderWindow>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dipolar(mut self, axis: SpectrumAxis, linewidth_hz: f64) -> Self {
        self.dipolar = Some(DimensionConfig { axis, linewidth_hz });
        self
    }
    pub fn chemical_shift(mut self, axis: SpectrumAxis, linewidth_hz: f64) -> Self {
        self.chemical_shift = Some(DimensionConfig { axis, linewidth_hz });
        self
    }
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = Some(amplitude);
        self
    }
    pub fn window(mut self, window: RenderWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Validates and assembles the configuration.
    ///
    /// Amplitude and render window fall back to [`DEFAULT_AMPLITUDE`] and
    /// [`RenderWindow::default`]; both dimensions are required.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let dipolar = self
            .dipolar
            .ok_or(ConfigError::MissingParameter(DIPOLAR_SECTION))?;
        let chemical_shift = self
            .chemical_shift
            .ok_or(ConfigError::MissingParameter(CHEMICAL_SHIFT_SECTION))?;
        validate_dimension(DIPOLAR_SECTION, &dipolar)?;
        validate_dimension(CHEMICAL_SHIFT_SECTION, &chemical_shift)?;

        let amplitude = self.amplitude.unwrap_or(DEFAULT_AMPLITUDE);
        require_positive("lineshape.amplitude".to_string(), amplitude)?;

        let window = self.window.unwrap_or_default();
        if let RenderWindow::Fwhm(multiple) = window {
            if !(multiple.is_finite() && multiple > 0.0) {
                return Err(ConfigError::InvalidWindow(multiple));
            }
        }

        Ok(SimulationConfig {
            dipolar,
            chemical_shift,
            amplitude,
            window,
        })
    }
}

fn require_finite(parameter: String, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { parameter, value })
    }
}

fn require_positive(parameter: String, value: f64) -> Result<(), ConfigError> {
    require_finite(parameter.clone(), value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}

fn validate_dimension(section: &str, dimension: &DimensionConfig) -> Result<(), ConfigError> {
    let axis = &dimension.axis;
    if axis.size == 0 {
        return Err(ConfigError::NonPositive {
            parameter: format!("{}.size", section),
            value: 0.0,
        });
    }
    if axis.size > MAX_AXIS_SIZE {
        return Err(ConfigError::TooLarge {
            parameter: format!("{}.size", section),
            value: axis.size,
            max: MAX_AXIS_SIZE,
        });
    }
    require_positive(format!("{}.spectral-width", section), axis.spectral_width_hz)?;
    require_positive(
        format!("{}.observe-frequency", section),
        axis.observe_frequency_mhz,
    )?;
    require_finite(format!("{}.carrier-offset", section), axis.carrier_offset_hz)?;
    require_positive(format!("{}.linewidth", section), dimension.linewidth_hz)?;
    Ok(())
}

/// Options of the residue-table to peak-list conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Store every coupling as `-|coupling|`.
    pub negative_couplings: bool,
    /// Added to every residue id.
    pub residue_offset: i64,
}

#[cfg(test)]
pub(crate) fn test_config() -> SimulationConfig {
    SimulationConfigBuilder::new()
        .dipolar(SpectrumAxis::new("1H", 1024, 31250.0, 1000.0, 0.0), 100.0)
        .chemical_shift(
            SpectrumAxis::new("15N", 2048, 20000.0, 60.7639142, 5600.0),
            100.0,
        )
        .build()
        .unwrap()
}
