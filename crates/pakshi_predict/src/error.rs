//! Error types for prediction computations.

use pakshi_base::PakshiError;
use thiserror::Error;

/// Errors from prediction setup. The computation itself is total.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PredictError {
    /// Error from base tables or location validation.
    #[error(transparent)]
    Base(#[from] PakshiError),
    /// Configuration value out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Match format name not recognised.
    #[error("unknown match format: {0}")]
    UnknownFormat(String),
}
