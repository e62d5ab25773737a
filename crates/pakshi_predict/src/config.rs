//! Tunable parameters for snapshots and the match-flow simulation.

use pakshi_base::SolarConfig;
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Match-flow sampling and scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Minutes between samples. Default: 30.
    pub interval_minutes: u32,
    /// Bonus to a side whose own bird rules while the opponent's does not.
    /// Default: 30.
    pub ruling_bonus: i32,
    /// Power gap below which the activity rank breaks the tie. Default: 5.
    pub close_margin: i32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 30,
            ruling_bonus: 30,
            close_margin: 5,
        }
    }
}

/// All prediction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    pub solar: SolarConfig,
    pub flow: FlowConfig,
}

impl PredictionConfig {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.flow.interval_minutes == 0 {
            return Err(PredictError::InvalidConfig("flow interval must be positive"));
        }
        let z = self.solar.zenith_deg;
        if !z.is_finite() || !(0.0..180.0).contains(&z) {
            return Err(PredictError::InvalidConfig("zenith must be in [0, 180)"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PredictionConfig::default();
        assert_eq!(c.flow.interval_minutes, 30);
        assert_eq!(c.flow.ruling_bonus, 30);
        assert_eq!(c.flow.close_margin, 5);
        assert_eq!(c.solar.zenith_deg, 90.833);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let c = PredictionConfig {
            flow: FlowConfig {
                interval_minutes: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(PredictError::InvalidConfig("flow interval must be positive"))
        );
    }

    #[test]
    fn bad_zenith_rejected() {
        let mut c = PredictionConfig::default();
        c.solar.zenith_deg = f64::NAN;
        assert!(c.validate().is_err());
    }
}
