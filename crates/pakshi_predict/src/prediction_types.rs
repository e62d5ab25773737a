//! Input and output types for a full match prediction.

use chrono::{DateTime, FixedOffset, TimeDelta, Weekday};
use pakshi_base::{
    Bird, BirdColor, BirdResolution, DayTime, GeoLocation, LunarPhase, Participant, SunTimes,
};
use serde::{Deserialize, Serialize};

use crate::flow::{FlowPoint, MatchFormat};
use crate::scoring::{Side, Verdict};
use crate::snapshot_types::Snapshot;

/// Minutes before the match start at which the toss is held by default.
pub const DEFAULT_TOSS_LEAD_MINUTES: i64 = 30;

/// Everything needed to compute a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub team_a: String,
    pub team_b: String,
    pub captain_a: Participant,
    pub captain_b: Participant,
    /// Match start in local time; the offset is the venue's UTC offset.
    pub match_time: DateTime<FixedOffset>,
    /// Toss instant in the same local time.
    pub toss_time: DateTime<FixedOffset>,
    pub phase: LunarPhase,
    pub format: MatchFormat,
    pub location: GeoLocation,
}

impl MatchRequest {
    /// Build a request with the toss at the default lead before the match.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        captain_a: Participant,
        captain_b: Participant,
        match_time: DateTime<FixedOffset>,
        phase: LunarPhase,
        format: MatchFormat,
        location: GeoLocation,
    ) -> Self {
        Self {
            team_a: team_a.into(),
            team_b: team_b.into(),
            captain_a,
            captain_b,
            match_time,
            toss_time: Self::default_toss_time(&match_time),
            phase,
            format,
            location,
        }
    }

    /// Match start minus [`DEFAULT_TOSS_LEAD_MINUTES`].
    pub fn default_toss_time(match_time: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        *match_time - TimeDelta::minutes(DEFAULT_TOSS_LEAD_MINUTES)
    }

    /// Replace the toss instant.
    pub fn with_toss_time(mut self, toss_time: DateTime<FixedOffset>) -> Self {
        self.toss_time = toss_time;
        self
    }
}

/// Computed prediction for one match. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub team_a: String,
    pub team_b: String,
    pub captain_a: Participant,
    pub captain_b: Participant,
    pub match_time: DateTime<FixedOffset>,
    pub toss_time: DateTime<FixedOffset>,

    pub bird_a: BirdResolution,
    pub bird_b: BirdResolution,
    pub color_a: BirdColor,
    pub color_b: BirdColor,

    pub match_a: Snapshot,
    pub match_b: Snapshot,
    pub toss_a: Snapshot,
    pub toss_b: Snapshot,

    pub winner: Verdict,
    /// Winning team name, or `"Draw"`.
    pub winner_label: String,
    pub toss_winner: Side,
    pub toss_winner_label: String,
    /// Percent, 50 on a tie.
    pub win_probability: f64,

    /// Yama (1-5) at match start.
    pub time_slot: u8,
    pub day_time: DayTime,
    #[serde(skip)]
    pub weekday: Weekday,
    /// Full English weekday name.
    pub day_of_week: String,
    pub ruling_bird: Bird,
    pub phase: LunarPhase,
    pub format: MatchFormat,
    pub location: GeoLocation,

    pub sun: SunTimes,
    pub sunrise: String,
    pub sunset: String,
    /// True when the 06:00 / 18:00 boundary replaced a polar day or night.
    pub solar_fallback: bool,

    pub match_flow: Vec<FlowPoint>,
}

impl Prediction {
    /// Team name for a side.
    pub fn team(&self, side: Side) -> &str {
        side.pick(&self.team_a, &self.team_b)
    }

    /// Resolved bird for a side.
    pub fn bird(&self, side: Side) -> Bird {
        side.pick(self.bird_a.bird, self.bird_b.bird)
    }
}
