//! # Engine Module
//!
//! Run-level logic of SLFsim: validated configuration, the tasks that turn
//! peaks into an intensity grid, progress reporting and error types.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - validated simulation and conversion parameters
//! - **Tasks** ([`tasks`]) - peak calibration, lineshape rendering and residue assignment
//! - **Progress Monitoring** ([`progress`]) - phase and task events for front ends
//! - **Error Handling** ([`error`]) - engine-specific error types
//!
//! Rendering runs on the rayon pool when the `parallel` feature is enabled;
//! every worker accumulates into a private grid and the partial grids are
//! summed at the end, so results do not depend on the peak order beyond
//! float32 rounding.

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
