//! Match-flow simulation: both sides sampled at fixed intervals across the
//! match duration.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, TimeDelta};
use pakshi_base::{Activity, Bird, GeoLocation, LunarPhase};
use serde::{Deserialize, Serialize};

use crate::config::{FlowConfig, PredictionConfig};
use crate::error::PredictError;
use crate::scoring::{Side, Verdict, verdict_from_powers};
use crate::snapshot::{instant_context, snapshot_at};
use crate::snapshot_types::Snapshot;

/// Match length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    T20,
    Odi,
}

impl MatchFormat {
    /// Simulated duration in minutes.
    pub const fn duration_minutes(self) -> u32 {
        match self {
            Self::T20 => 240,
            Self::Odi => 480,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::T20 => "T20",
            Self::Odi => "ODI",
        }
    }
}

impl Display for MatchFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchFormat {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t20" => Ok(Self::T20),
            "odi" => Ok(Self::Odi),
            _ => Err(PredictError::UnknownFormat(s.to_string())),
        }
    }
}

/// The two sides of a match with their resolved birds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup<'a> {
    pub team_a: &'a str,
    pub bird_a: Bird,
    pub team_b: &'a str,
    pub bird_b: Bird,
}

/// One sample of the simulated match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowPoint {
    /// Local clock time, `HH:MM`.
    pub time: String,
    /// Minutes since match start.
    pub offset_minutes: u32,
    /// Side A power after ruling bonus and tie-break.
    pub power_a: i32,
    /// Side B power after ruling bonus and tie-break.
    pub power_b: i32,
    pub dominant: Verdict,
    /// Team name of the dominant side, or `"Draw"`.
    pub dominant_team: String,
    pub activity_a: Activity,
    pub activity_b: Activity,
}

/// Adjusted powers for one sample.
///
/// A side whose own bird rules while the opponent's does not gets the ruling
/// bonus. If the gap is then below the close margin, the side in the
/// higher-ranked activity gets +1.
pub fn adjusted_powers(a: &Snapshot, b: &Snapshot, flow: &FlowConfig) -> (i32, i32) {
    let mut power_a = a.power;
    let mut power_b = b.power;

    match (a.is_ruling(), b.is_ruling()) {
        (true, false) => power_a += flow.ruling_bonus,
        (false, true) => power_b += flow.ruling_bonus,
        _ => {}
    }

    if (power_a - power_b).abs() < flow.close_margin {
        let (rank_a, rank_b) = (a.activity.rank(), b.activity.rank());
        if rank_a > rank_b {
            power_a += 1;
        } else if rank_b > rank_a {
            power_b += 1;
        }
    }

    (power_a, power_b)
}

/// Sample both sides from `start` to `start + duration_minutes` inclusive,
/// every `config.flow.interval_minutes`.
///
/// Returns `floor(duration / interval) + 1` points in time order. An interval
/// of zero is treated as one minute; [`PredictionConfig::validate`] rejects it
/// before a prediction is computed.
pub fn generate_flow(
    matchup: &Matchup<'_>,
    start: &DateTime<FixedOffset>,
    phase: LunarPhase,
    duration_minutes: u32,
    location: &GeoLocation,
    config: &PredictionConfig,
) -> Vec<FlowPoint> {
    let interval = config.flow.interval_minutes.max(1);

    (0..=duration_minutes)
        .step_by(interval as usize)
        .map(|offset| {
            let instant = *start + TimeDelta::minutes(i64::from(offset));
            let ctx = instant_context(&instant, phase, location, &config.solar);
            let a = snapshot_at(matchup.bird_a, &ctx);
            let b = snapshot_at(matchup.bird_b, &ctx);
            let (power_a, power_b) = adjusted_powers(&a, &b, &config.flow);
            let dominant = verdict_from_powers(power_a, power_b);

            FlowPoint {
                time: instant.format("%H:%M").to_string(),
                offset_minutes: offset,
                power_a,
                power_b,
                dominant,
                dominant_team: dominant.label(matchup.team_a, matchup.team_b).to_string(),
                activity_a: a.activity,
                activity_b: b.activity,
            }
        })
        .collect()
}

/// Count of samples each side dominated, ignoring draws.
pub fn dominance_counts(flow: &[FlowPoint]) -> (usize, usize) {
    flow.iter()
        .filter_map(|p| p.dominant.winner())
        .fold((0, 0), |(a, b), side| match side {
            Side::A => (a + 1, b),
            Side::B => (a, b + 1),
        })
}
