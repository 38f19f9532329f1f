//! Computational units composed by the workflows.
//!
//! Each task performs one stage of a run: calibrating peaks onto the grid,
//! rendering lineshapes into it, or assigning residue rows to peak labels.

pub mod assign;
pub mod calibrate;
pub mod render;
