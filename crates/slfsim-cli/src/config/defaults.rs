pub struct AxisDefaults {
    pub label: &'static str,
    pub spectral_width: f64,
    pub size: usize,
    pub linewidth: f64,
    pub observe_frequency: f64,
    pub carrier_offset: f64,
}

pub struct DefaultsConfig {
    pub dipolar: AxisDefaults,
    pub chemical_shift: AxisDefaults,
    pub amplitude: f64,
    pub window_fwhm: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            dipolar: AxisDefaults {
                label: "1H",
                spectral_width: 31250.0,
                size: 1024,
                linewidth: 100.0,
                observe_frequency: 1000.0,
                carrier_offset: 0.0,
            },
            chemical_shift: AxisDefaults {
                label: "15N",
                spectral_width: 20000.0,
                size: 2048,
                linewidth: 100.0,
                observe_frequency: 60.7639142,
                carrier_offset: 5600.0,
            },
            amplitude: 100.0,
            window_fwhm: 5.0,
        }
    }
}
