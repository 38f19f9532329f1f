//! Pure numerical building blocks of the simulator: axis unit conversion
//! ([`calibration`]) and Gaussian lineshape evaluation ([`lineshape`]).

pub mod calibration;
pub mod lineshape;
