//! Provides input/output functionality for NMR peak lists and spectra.
//!
//! Text formats (Sparky peak lists and per-residue tables) are line based and
//! report parse failures with 1-based line numbers. Binary spectra are written
//! in the Sparky UCSF container through the [`traits::SpectrumFile`] interface.
//! Every writer replaces its output atomically.

pub(crate) mod atomic;
pub mod peak_list;
pub mod residue_table;
pub mod traits;
pub mod ucsf;
