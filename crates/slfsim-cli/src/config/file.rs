use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileDimensionConfig {
    pub spectral_width: Option<f64>,
    pub size: Option<usize>,
    pub linewidth: Option<f64>,
    pub observe_frequency: Option<f64>,
    pub carrier_offset: Option<f64>,
    pub label: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileLineshapeConfig {
    pub amplitude: Option<f64>,
    pub window_fwhm: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub dipolar: Option<FileDimensionConfig>,
    pub chemical_shift: Option<FileDimensionConfig>,
    pub lineshape: Option<FileLineshapeConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
