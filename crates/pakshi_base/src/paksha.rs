//! Lunar phase (paksha) selector.
//!
//! The waxing and waning halves of the lunar month each carry their own
//! activity cycle, friendship graph, and starting-activity tables. A
//! calculation never mixes the two.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PakshiError;

/// Waxing (Shukla, Valar Pirai) or waning (Krishna, Thei Pirai) half-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    Waxing,
    Waning,
}

/// Both phases, waxing first.
pub const ALL_PHASES: [LunarPhase; 2] = [LunarPhase::Waxing, LunarPhase::Waning];

impl LunarPhase {
    /// Tamil name of the half-month.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waxing => "Valar Pirai",
            Self::Waning => "Thei Pirai",
        }
    }

    /// Sanskrit paksha name.
    pub const fn paksha_name(self) -> &'static str {
        match self {
            Self::Waxing => "Shukla",
            Self::Waning => "Krishna",
        }
    }
}

impl Display for LunarPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Waxing => write!(f, "Waxing ({})", self.name()),
            Self::Waning => write!(f, "Waning ({})", self.name()),
        }
    }
}

impl FromStr for LunarPhase {
    type Err = PakshiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "waxing" | "shukla" | "valar" | "valar pirai" => Ok(Self::Waxing),
            "waning" | "krishna" | "thei" | "thei pirai" => Ok(Self::Waning),
            _ => Err(PakshiError::UnknownPhase(s.to_string())),
        }
    }
}
