//! Plain data types shared by the simulation and conversion pipelines.
//!
//! - [`axis`] - per-dimension calibration metadata ([`axis::SpectrumAxis`])
//! - [`peak`] - peak-list rows and their grid-space counterparts
//! - [`residue`] - rows of a per-residue shift/coupling table
//! - [`grid`] - the additive intensity buffer ([`grid::SpectrumGrid`])
//! - [`spectrum`] - a grid bundled with its two axes

pub mod axis;
pub mod grid;
pub mod peak;
pub mod residue;
pub mod spectrum;
