//! # Core Module
//!
//! Stateless building blocks of SLFsim: the data model, the numerical
//! primitives of the simulation, and file-format support.
//!
//! - **Data Model** ([`models`]) - axes, peaks, residue rows, intensity grids and spectra
//! - **Spectral Math** ([`spectral`]) - ppm/Hz/point calibration and Gaussian lineshapes
//! - **File I/O** ([`io`]) - Sparky peak lists, residue tables and the UCSF spectrum container
//! - **Utilities** ([`utils`]) - residue-name lookup and peak-list number formatting

pub mod io;
pub mod models;
pub mod spectral;
pub mod utils;
