//! Types for per-instant bird snapshots.

use chrono::Weekday;
use pakshi_base::{Activity, Bird, BirdRelation, DayTime, LunarPhase, SunTimes, YamaInfo};
use serde::Serialize;

/// Everything about an instant that does not depend on the subject bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantContext {
    /// Calendar weekday of the local clock date.
    pub weekday: Weekday,
    /// Local clock time in minutes since midnight.
    pub clock_min: f64,
    /// Sunrise/sunset used to partition the day.
    pub sun: SunTimes,
    /// True when the location had no sunrise or sunset and the fixed
    /// 06:00 / 18:00 boundary was substituted.
    pub solar_fallback: bool,
    /// Yama and span containing the instant.
    pub yama: YamaInfo,
    /// Phase whose tables apply.
    pub phase: LunarPhase,
    /// Bird in the Rule activity during this yama.
    pub ruling_bird: Bird,
}

/// One bird's condition at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub bird: Bird,
    pub activity: Activity,
    /// Base power of the activity plus the relationship bonus.
    pub power: i32,
    /// Yama (1-5).
    pub yama: u8,
    pub day_time: DayTime,
    pub ruling_bird: Bird,
    pub relation: BirdRelation,
}

impl Snapshot {
    /// Whether this bird is the ruling bird.
    pub fn is_ruling(&self) -> bool {
        self.bird == self.ruling_bird
    }
}
