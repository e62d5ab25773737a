//! TOML configuration file for the CLI.

use std::path::Path;

use pakshi_predict::PredictionConfig;
use serde::Deserialize;

use crate::error::CliError;

/// Contents of `--config <file.toml>`. Every field is optional.
///
/// ```toml
/// default_city = "Chennai"
///
/// [prediction.solar]
/// zenith_deg = 90.833
///
/// [prediction.flow]
/// interval_minutes = 15
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub prediction: PredictionConfig,
    /// City used when neither `--city` nor `--lat/--lng` is given.
    pub default_city: Option<String>,
}

impl CliConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        let config: Self = toml::from_str(content)?;
        config.prediction.validate()?;
        Ok(config)
    }

    /// Load from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
