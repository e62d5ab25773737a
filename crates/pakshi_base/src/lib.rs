//! Pancha Pakshi base tables and primitives.
//!
//! This crate provides:
//! - The five birds, five activities, and per-phase friendship graphs
//! - Literal starting-activity tables and the activity rotation cycles
//! - Birth-star estimation and participant-to-bird resolution
//! - Low-precision sunrise/sunset and yama partitioning
//!
//! Everything here is a pure function over immutable data.

pub mod activity;
pub mod bird;
pub mod error;
pub mod nakshatra;
pub mod paksha;
pub mod participant;
pub mod riseset;
pub mod riseset_types;
pub mod util;
pub mod yama;

pub use activity::{
    ALL_ACTIVITIES, Activity, CYCLE_WANING, CYCLE_WAXING, activity_at, activity_cycle,
    activity_in_yama, ruling_bird, rulers_at, start_activity, start_sequence,
};
pub use bird::{ALL_BIRDS, Bird, BirdColor, BirdRelation, bird_relation, enemies, friends};
pub use error::PakshiError;
pub use nakshatra::{
    ALL_NAKSHATRAS, Nakshatra, bird_from_nakshatra, nakshatra_from_birth_date, nakshatra_from_iso,
};
pub use paksha::{ALL_PHASES, LunarPhase};
pub use participant::{
    BirdResolution, BirdSource, NameVowel, Participant, bird_for, bird_from_vowel, name_vowel,
    resolve_bird,
};
pub use riseset::{
    cos_hour_angle, equation_of_time_min, fractional_year_rad, hour_angle_deg,
    solar_declination_rad, sun_times,
};
pub use riseset_types::{GeoLocation, SolarConfig, SunTimes, SunTimesResult};
pub use util::{MINUTES_PER_DAY, format_clock, normalize_minutes};
pub use yama::{DayTime, YAMAS_PER_SPAN, YamaInfo, yama_at};
