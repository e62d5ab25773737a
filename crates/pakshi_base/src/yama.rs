//! Yama (one-fifth of a day-span or night-span) partitioning.
//!
//! Day runs sunrise to sunset and night runs sunset to the next sunrise.
//! Each span is cut into five equal yamas independently, so day and night
//! yamas differ in length except at the equinoxes.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::riseset_types::SunTimes;
use crate::util::normalize_minutes;

/// Number of yamas in each span.
pub const YAMAS_PER_SPAN: u8 = 5;

/// Day or night span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayTime {
    Day,
    Night,
}

impl DayTime {
    pub const fn is_night(self) -> bool {
        matches!(self, Self::Night)
    }
}

impl Display for DayTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => f.write_str("Day"),
            Self::Night => f.write_str("Night"),
        }
    }
}

/// Position of a clock time within the day/night partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YamaInfo {
    /// 1-based yama within the span (1-5).
    pub yama: u8,
    /// Whether the time falls in the day or night span.
    pub day_time: DayTime,
    /// Length of the containing span in minutes.
    pub span_min: f64,
    /// Minutes elapsed since the span began.
    pub elapsed_min: f64,
}

/// Locate a local clock time (minutes since midnight) in the yama partition.
///
/// `yama = floor(elapsed / (span / 5)) + 1`, clamped to [1, 5].
pub fn yama_at(clock_min: f64, sun: &SunTimes) -> YamaInfo {
    let day_span = sun.day_span_min();
    let since_sunrise = normalize_minutes(clock_min - sun.sunrise_min);

    let (day_time, span_min, elapsed_min) = if since_sunrise < day_span {
        (DayTime::Day, day_span, since_sunrise)
    } else {
        (
            DayTime::Night,
            sun.night_span_min(),
            normalize_minutes(clock_min - sun.sunset_min),
        )
    };

    YamaInfo {
        yama: yama_index(elapsed_min, span_min),
        day_time,
        span_min,
        elapsed_min,
    }
}

fn yama_index(elapsed_min: f64, span_min: f64) -> u8 {
    let yama_len = span_min / YAMAS_PER_SPAN as f64;
    if yama_len <= 0.0 {
        return 1;
    }
    let idx = (elapsed_min / yama_len).floor() + 1.0;
    idx.clamp(1.0, YAMAS_PER_SPAN as f64) as u8
}
