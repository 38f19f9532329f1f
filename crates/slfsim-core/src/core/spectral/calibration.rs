use crate::core::models::axis::SpectrumAxis;

/// Affine conversion between ppm, Hz and fractional point index for one axis.
///
/// Point 0 and point `size` sit on the edges of the spectral window, the
/// carrier sits at point `size / 2`, and the point index grows as ppm
/// decreases (the usual right-to-left ppm scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCalibration {
    size: f64,
    spectral_width_hz: f64,
    observe_frequency_mhz: f64,
    carrier_offset_hz: f64,
}

impl AxisCalibration {
    pub fn new(axis: &SpectrumAxis) -> Self {
        Self {
            size: axis.size as f64,
            spectral_width_hz: axis.spectral_width_hz,
            observe_frequency_mhz: axis.observe_frequency_mhz,
            carrier_offset_hz: axis.carrier_offset_hz,
        }
    }

    /// Frequency relative to the carrier, in Hz.
    #[inline]
    pub fn ppm_to_hz(&self, ppm: f64) -> f64 {
        ppm * self.observe_frequency_mhz - self.carrier_offset_hz
    }

    #[inline]
    pub fn hz_to_ppm(&self, hz: f64) -> f64 {
        (hz + self.carrier_offset_hz) / self.observe_frequency_mhz
    }

    #[inline]
    pub fn hz_to_points(&self, hz: f64) -> f64 {
        (self.spectral_width_hz / 2.0 - hz) * self.size / self.spectral_width_hz
    }

    #[inline]
    pub fn points_to_hz(&self, points: f64) -> f64 {
        self.spectral_width_hz / 2.0 - points * self.spectral_width_hz / self.size
    }

    /// Fractional point index of a ppm value. Values outside `[0, size)` are
    /// returned as-is.
    #[inline]
    pub fn to_points(&self, ppm: f64) -> f64 {
        self.hz_to_points(self.ppm_to_hz(ppm))
    }

    #[inline]
    pub fn to_ppm(&self, points: f64) -> f64 {
        self.hz_to_ppm(self.points_to_hz(points))
    }

    /// Width in points of a frequency span given in Hz.
    ///
    /// Linewidths are relative spreads, so only the scale of the axis applies.
    #[inline]
    pub fn linewidth_to_points(&self, linewidth_hz: f64) -> f64 {
        linewidth_hz / self.spectral_width_hz * self.size
    }

    /// ppm values at the two window edges, as (point 0, point `size`).
    pub fn ppm_limits(&self) -> (f64, f64) {
        (self.to_ppm(0.0), self.to_ppm(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nitrogen_axis() -> SpectrumAxis {
        SpectrumAxis::new("15N", 2048, 20000.0, 60.7639142, 5600.0)
    }

    fn dipolar_axis() -> SpectrumAxis {
        SpectrumAxis::new("1H", 1024, 31250.0, 1000.0, 0.0)
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn carrier_maps_to_window_centre() {
        let axis = nitrogen_axis();
        let cal = AxisCalibration::new(&axis);
        assert_close(cal.to_points(axis.carrier_ppm()), 1024.0, 1e-9);
    }

    #[test]
    fn zero_ppm_with_zero_carrier_is_centre_point() {
        let cal = AxisCalibration::new(&dipolar_axis());
        assert_close(cal.to_points(0.0), 512.0, 1e-12);
    }

    #[test]
    fn point_index_increases_as_ppm_decreases() {
        let cal = AxisCalibration::new(&nitrogen_axis());
        assert!(cal.to_points(100.0) > cal.to_points(120.0));
        assert!(cal.to_points(120.0) > cal.to_points(140.0));
    }

    #[test]
    fn known_positions_for_default_axes() {
        let h = AxisCalibration::new(&dipolar_axis());
        assert_close(h.to_points(8.0), 249.856, 1e-9);

        let n = AxisCalibration::new(&nitrogen_axis());
        let expected = (10000.0 - (120.0 * 60.7639142 - 5600.0)) * 2048.0 / 20000.0;
        assert_close(n.to_points(120.0), expected, 1e-9);
    }

    #[test]
    fn window_edges_are_half_a_spectral_width_from_carrier() {
        let axis = dipolar_axis();
        let cal = AxisCalibration::new(&axis);
        assert_close(cal.hz_to_points(15625.0), 0.0, 1e-12);
        assert_close(cal.hz_to_points(-15625.0), 1024.0, 1e-9);
        let (left, right) = cal.ppm_limits();
        assert_close(left, 15.625, 1e-12);
        assert_close(right, -15.625, 1e-12);
    }

    #[test]
    fn out_of_window_values_are_not_clamped() {
        let cal = AxisCalibration::new(&dipolar_axis());
        assert!(cal.to_points(100.0) < 0.0);
        assert!(cal.to_points(-100.0) > 1024.0);
    }

    #[test]
    fn ppm_round_trip_is_exact_to_float_precision() {
        let axes = [
            nitrogen_axis(),
            dipolar_axis(),
            SpectrumAxis::new("13C", 4096, 50000.0, 150.9, -1200.0),
            SpectrumAxis::new("X", 1, 1.0, 0.5, 3.0),
        ];
        for axis in &axes {
            let cal = AxisCalibration::new(axis);
            let mut ppm = -300.0;
            while ppm <= 300.0 {
                let back = cal.to_ppm(cal.to_points(ppm));
                assert_close(back, ppm, 1e-12 * ppm.abs().max(1.0) * 16.0);
                ppm += 0.37;
            }
        }
    }

    #[test]
    fn points_round_trip_is_exact_to_float_precision() {
        let cal = AxisCalibration::new(&nitrogen_axis());
        for points in [-500.0, 0.0, 0.25, 1023.5, 2047.0, 4000.0] {
            assert_close(cal.to_points(cal.to_ppm(points)), points, 1e-9);
        }
    }

    #[test]
    fn linewidth_scales_linearly_with_hz() {
        let cal = AxisCalibration::new(&nitrogen_axis());
        for hz in [1.0, 25.0, 100.0, 733.3] {
            assert_close(
                cal.linewidth_to_points(2.0 * hz),
                2.0 * cal.linewidth_to_points(hz),
                1e-12,
            );
        }
        assert_close(cal.linewidth_to_points(100.0), 10.24, 1e-12);
    }

    #[test]
    fn linewidth_is_inversely_proportional_to_spectral_width() {
        let narrow = AxisCalibration::new(&SpectrumAxis::new("15N", 2048, 10000.0, 60.0, 0.0));
        let wide = AxisCalibration::new(&SpectrumAxis::new("15N", 2048, 20000.0, 60.0, 0.0));
        assert_close(
            narrow.linewidth_to_points(100.0),
            2.0 * wide.linewidth_to_points(100.0),
            1e-12,
        );
    }

    #[test]
    fn linewidth_ignores_carrier_and_observe_frequency() {
        let a = AxisCalibration::new(&SpectrumAxis::new("15N", 2048, 20000.0, 60.0, 0.0));
        let b = AxisCalibration::new(&SpectrumAxis::new("15N", 2048, 20000.0, 80.0, 9000.0));
        assert_eq!(a.linewidth_to_points(100.0), b.linewidth_to_points(100.0));
    }
}
