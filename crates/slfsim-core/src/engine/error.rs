use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::grid::GridError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Spectrum grid error: {source}")]
    Grid {
        #[from]
        source: GridError,
    },

    #[error("Unknown residue '{code}' on line {line}")]
    UnknownResidue { code: String, line: usize },

    #[error("Residue id {id} on line {line} cannot be shifted by {offset}")]
    ResidueIdOverflow { id: i64, offset: i64, line: usize },

    #[error("Invalid peak '{label}': {reason}")]
    InvalidPeak { label: String, reason: String },
}
