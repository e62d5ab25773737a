//! Snapshot of a bird's activity and power at a local instant.
//!
//! Composes the solar model (sunrise/sunset for the location and date), the
//! yama partition, the starting tables, and the friendship graph.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};
use pakshi_base::{
    Bird, GeoLocation, LunarPhase, SolarConfig, SunTimes, SunTimesResult, activity_at,
    bird_relation, ruling_bird, sun_times, yama_at,
};

use crate::snapshot_types::{InstantContext, Snapshot};

/// Full English weekday name.
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Resolve the bird-independent context of a local instant.
///
/// The instant's fixed offset is the local UTC offset used for sunrise and
/// sunset. The weekday and date are those of the local clock. When the Sun
/// neither rises nor sets on that date, the 06:00 / 18:00 boundary is used.
pub fn instant_context(
    instant: &DateTime<FixedOffset>,
    phase: LunarPhase,
    location: &GeoLocation,
    config: &SolarConfig,
) -> InstantContext {
    let date = instant.date_naive();
    let offset_min = instant.offset().local_minus_utc() / 60;
    let clock_min = (instant.hour() * 60 + instant.minute()) as f64;

    let (sun, solar_fallback) = match sun_times(date, location, offset_min, config) {
        SunTimesResult::Times(t) => (t, false),
        polar => {
            tracing::warn!(
                ?polar,
                %date,
                lat = location.latitude_deg,
                "no sunrise/sunset, using 06:00-18:00 boundary"
            );
            (SunTimes::CONVENTIONAL, true)
        }
    };

    let yama = yama_at(clock_min, &sun);
    let weekday = instant.weekday();
    let ruler = ruling_bird(weekday, yama.day_time, phase, yama.yama);

    InstantContext {
        weekday,
        clock_min,
        sun,
        solar_fallback,
        yama,
        phase,
        ruling_bird: ruler,
    }
}

/// Snapshot of `bird` within an already-resolved instant.
pub fn snapshot_at(bird: Bird, ctx: &InstantContext) -> Snapshot {
    let activity = activity_at(bird, ctx.weekday, ctx.yama.day_time, ctx.phase, ctx.yama.yama);
    let relation = bird_relation(bird, ctx.ruling_bird, ctx.phase);
    let power = activity.base_power() + relation.power_bonus();

    Snapshot {
        bird,
        activity,
        power,
        yama: ctx.yama.yama,
        day_time: ctx.yama.day_time,
        ruling_bird: ctx.ruling_bird,
        relation,
    }
}

/// Snapshot of `bird` at a local instant and location.
pub fn snapshot(
    bird: Bird,
    instant: &DateTime<FixedOffset>,
    phase: LunarPhase,
    location: &GeoLocation,
    config: &SolarConfig,
) -> Snapshot {
    let ctx = instant_context(instant, phase, location, config);
    snapshot_at(bird, &ctx)
}
