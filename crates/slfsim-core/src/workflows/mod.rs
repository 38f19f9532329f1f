//! # Workflows Module
//!
//! Top-level entry points of SLFsim. Each workflow takes parsed input and a
//! validated configuration, runs the engine tasks in order and returns the
//! in-memory result; reading and writing files is left to the caller.
//!
//! - **Simulation** ([`simulate`]) - peak list to intensity grid with calibrated axes
//! - **Conversion** ([`convert`]) - residue table to Sparky peak-list rows

pub mod convert;
pub mod simulate;
