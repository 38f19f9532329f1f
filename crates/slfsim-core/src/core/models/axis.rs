/// Calibration metadata of one digitized spectral dimension.
///
/// An axis is fully described by its point count, the frequency window those
/// points span, the carrier that sits in the middle of that window, and the
/// observe frequency that relates Hz to ppm for the observed nucleus.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumAxis {
    /// Number of points along the axis.
    pub size: usize,
    /// Width of the digitized frequency window, in Hz.
    pub spectral_width_hz: f64,
    /// Carrier frequency relative to the ppm reference, in Hz.
    pub carrier_offset_hz: f64,
    /// Observe frequency of the nucleus, in MHz.
    pub observe_frequency_mhz: f64,
    /// Whether the axis is in the frequency domain (always true for simulated data).
    pub is_frequency_domain: bool,
    /// Free-text nucleus label, such as "15N" or "1H".
    pub label: String,
}

impl SpectrumAxis {
    /// Creates a frequency-domain axis.
    ///
    /// No validation happens here; invalid values are rejected by
    /// [`SimulationConfigBuilder::build`](crate::engine::config::SimulationConfigBuilder::build).
    pub fn new(
        label: &str,
        size: usize,
        spectral_width_hz: f64,
        observe_frequency_mhz: f64,
        carrier_offset_hz: f64,
    ) -> Self {
        Self {
            size,
            spectral_width_hz,
            carrier_offset_hz,
            observe_frequency_mhz,
            is_frequency_domain: true,
            label: label.to_string(),
        }
    }

    /// Carrier position expressed in ppm.
    pub fn carrier_ppm(&self) -> f64 {
        self.carrier_offset_hz / self.observe_frequency_mhz
    }
}
