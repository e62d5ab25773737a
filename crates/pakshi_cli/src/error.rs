//! CLI error type.

use pakshi_base::PakshiError;
use pakshi_predict::PredictError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Predict(#[from] PredictError),
    #[error(transparent)]
    Base(#[from] PakshiError),
    #[error("{0}")]
    Usage(String),
}
