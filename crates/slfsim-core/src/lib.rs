//! # SLFsim Core Library
//!
//! Simulation of two-dimensional separated-local-field (SLF) NMR spectra from
//! peak lists, and conversion of per-residue shift/coupling tables into
//! Sparky peak lists.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`SpectrumAxis`,
//!   `SpectrumGrid`, `Spectrum`), the ppm/point calibration and Gaussian
//!   lineshape math, and readers/writers for peak lists, residue tables and
//!   Sparky UCSF spectra.
//!
//! - **[`engine`]: The Logic Core.** Validated run configuration, the tasks
//!   that calibrate peaks and accumulate lineshapes into a grid (in parallel
//!   with the `parallel` feature), progress events and error types.
//!
//! - **[`workflows`]: The Public API.** `simulate::run` and `convert::run`
//!   tie the layers together into complete procedures.

pub mod core;
pub mod engine;
pub mod workflows;
