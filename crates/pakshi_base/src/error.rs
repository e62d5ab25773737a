//! Error types for Pancha Pakshi base calculations.

use thiserror::Error;

/// Errors from base table lookups and location handling.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PakshiError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Star name not present in the 27-nakshatra list.
    #[error("unknown nakshatra: {0}")]
    UnknownNakshatra(String),
    /// Lunar phase name not recognised.
    #[error("unknown lunar phase: {0}")]
    UnknownPhase(String),
}
