//! Activities (avasthas) of the birds and the starting-activity tables.
//!
//! Every bird starts each day-span and night-span in a fixed activity that
//! depends on weekday, day/night, and lunar phase. Within the span it rotates
//! one step per yama along the phase's activity cycle.
//!
//! The waning-night rows for Vulture and Owl are identical, so some
//! waning-night yamas have two rulers or none.

use std::fmt::{Display, Formatter};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::bird::{ALL_BIRDS, Bird};
use crate::paksha::LunarPhase;
use crate::yama::DayTime;

/// One of the five activities a bird occupies during a yama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Rule,
    Eat,
    Walk,
    Sleep,
    Die,
}

/// All activities, strongest first.
pub const ALL_ACTIVITIES: [Activity; 5] = [
    Activity::Rule,
    Activity::Eat,
    Activity::Walk,
    Activity::Sleep,
    Activity::Die,
];

impl Activity {
    /// Tamil name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rule => "Arasu",
            Self::Eat => "Oon",
            Self::Walk => "Nadai",
            Self::Sleep => "Thuyil",
            Self::Die => "Saavu",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Rule => "Rule",
            Self::Eat => "Eat",
            Self::Walk => "Walk",
            Self::Sleep => "Sleep",
            Self::Die => "Die",
        }
    }

    /// Base power before relationship adjustment.
    pub const fn base_power(self) -> i32 {
        match self {
            Self::Rule => 100,
            Self::Eat => 80,
            Self::Walk => 50,
            Self::Sleep => 25,
            Self::Die => 0,
        }
    }

    /// Strength rank, Rule=5 down to Die=1. Used for close-call tie-breaks.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Rule => 5,
            Self::Eat => 4,
            Self::Walk => 3,
            Self::Sleep => 2,
            Self::Die => 1,
        }
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.english_name())
    }
}

// ---------------------------------------------------------------------------
// Activity cycles
// ---------------------------------------------------------------------------

/// Waxing rotation: Rule -> Sleep -> Die -> Eat -> Walk.
pub const CYCLE_WAXING: [Activity; 5] = [
    Activity::Rule,
    Activity::Sleep,
    Activity::Die,
    Activity::Eat,
    Activity::Walk,
];

/// Waning rotation: Rule -> Walk -> Eat -> Die -> Sleep.
pub const CYCLE_WANING: [Activity; 5] = [
    Activity::Rule,
    Activity::Walk,
    Activity::Eat,
    Activity::Die,
    Activity::Sleep,
];

/// Rotation cycle for the phase.
pub const fn activity_cycle(phase: LunarPhase) -> &'static [Activity; 5] {
    match phase {
        LunarPhase::Waxing => &CYCLE_WAXING,
        LunarPhase::Waning => &CYCLE_WANING,
    }
}

fn cycle_position(cycle: &[Activity; 5], activity: Activity) -> usize {
    // Each cycle holds all five activities exactly once.
    cycle.iter().position(|&a| a == activity).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Starting-activity tables, indexed by weekday (0 = Sunday)
// ---------------------------------------------------------------------------

/// Starting activity for each weekday, Sunday first.
pub fn start_sequence(bird: Bird, day_time: DayTime, phase: LunarPhase) -> &'static [Activity; 7] {
    use Activity::*;
    use Bird::*;

    match (phase, day_time, bird) {
        (LunarPhase::Waxing, DayTime::Day, Vulture) => &[Eat, Die, Eat, Die, Sleep, Rule, Walk],
        (LunarPhase::Waxing, DayTime::Day, Owl) => &[Walk, Eat, Walk, Eat, Die, Sleep, Rule],
        (LunarPhase::Waxing, DayTime::Day, Crow) => &[Rule, Walk, Rule, Walk, Eat, Die, Sleep],
        (LunarPhase::Waxing, DayTime::Day, Cock) => &[Sleep, Rule, Sleep, Rule, Walk, Eat, Die],
        (LunarPhase::Waxing, DayTime::Day, Peacock) => &[Die, Sleep, Die, Sleep, Rule, Walk, Eat],

        (LunarPhase::Waxing, DayTime::Night, Vulture) => &[Die, Walk, Die, Walk, Sleep, Eat, Rule],
        (LunarPhase::Waxing, DayTime::Night, Owl) => &[Rule, Die, Rule, Die, Walk, Sleep, Eat],
        (LunarPhase::Waxing, DayTime::Night, Crow) => &[Eat, Rule, Eat, Rule, Die, Walk, Sleep],
        (LunarPhase::Waxing, DayTime::Night, Cock) => &[Sleep, Eat, Sleep, Eat, Rule, Die, Walk],
        (LunarPhase::Waxing, DayTime::Night, Peacock) => &[Walk, Sleep, Walk, Sleep, Eat, Rule, Die],

        (LunarPhase::Waning, DayTime::Day, Vulture) => &[Walk, Sleep, Walk, Die, Rule, Eat, Sleep],
        (LunarPhase::Waning, DayTime::Day, Owl) => &[Die, Walk, Die, Rule, Eat, Die, Walk],
        (LunarPhase::Waning, DayTime::Day, Crow) => &[Rule, Die, Rule, Eat, Walk, Sleep, Die],
        (LunarPhase::Waning, DayTime::Day, Cock) => &[Eat, Rule, Eat, Sleep, Die, Walk, Rule],
        (LunarPhase::Waning, DayTime::Day, Peacock) => &[Sleep, Eat, Sleep, Walk, Sleep, Rule, Eat],

        // Vulture and Owl share one row.
        (LunarPhase::Waning, DayTime::Night, Vulture) => &[Eat, Walk, Eat, Walk, Sleep, Die, Rule],
        (LunarPhase::Waning, DayTime::Night, Owl) => &[Eat, Walk, Eat, Walk, Sleep, Die, Rule],
        (LunarPhase::Waning, DayTime::Night, Crow) => &[Rule, Sleep, Rule, Sleep, Eat, Walk, Sleep],
        (LunarPhase::Waning, DayTime::Night, Cock) => &[Sleep, Eat, Sleep, Eat, Rule, Die, Walk],
        (LunarPhase::Waning, DayTime::Night, Peacock) => &[Die, Rule, Die, Rule, Walk, Sleep, Eat],
    }
}

/// Activity the bird starts the span in on the given weekday.
pub fn start_activity(bird: Bird, weekday: Weekday, day_time: DayTime, phase: LunarPhase) -> Activity {
    start_sequence(bird, day_time, phase)[weekday.num_days_from_sunday() as usize]
}

/// Rotate a starting activity forward to the given yama (1-5).
///
/// Yama 1 returns `start` unchanged. Yamas outside 1-5 are clamped.
pub fn activity_in_yama(start: Activity, yama: u8, phase: LunarPhase) -> Activity {
    let cycle = activity_cycle(phase);
    let steps = (yama.clamp(1, 5) - 1) as usize;
    cycle[(cycle_position(cycle, start) + steps) % 5]
}

/// Current activity of a bird at a weekday / span / yama.
pub fn activity_at(
    bird: Bird,
    weekday: Weekday,
    day_time: DayTime,
    phase: LunarPhase,
    yama: u8,
) -> Activity {
    activity_in_yama(start_activity(bird, weekday, day_time, phase), yama, phase)
}

/// Birds in the Rule activity at the given coordinate, canonical order.
pub fn rulers_at(weekday: Weekday, day_time: DayTime, phase: LunarPhase, yama: u8) -> Vec<Bird> {
    ALL_BIRDS
        .into_iter()
        .filter(|&b| activity_at(b, weekday, day_time, phase, yama) == Activity::Rule)
        .collect()
}

/// The ruling bird for a yama: first bird in canonical order whose activity
/// is Rule.
///
/// Falls back to [`Bird::Vulture`] when no bird rules, which the literal
/// waning-night table allows.
pub fn ruling_bird(weekday: Weekday, day_time: DayTime, phase: LunarPhase, yama: u8) -> Bird {
    match ALL_BIRDS
        .into_iter()
        .find(|&b| activity_at(b, weekday, day_time, phase, yama) == Activity::Rule)
    {
        Some(bird) => bird,
        None => {
            tracing::warn!(
                ?weekday,
                ?day_time,
                ?phase,
                yama,
                "no ruling bird in starting table, defaulting to Vulture"
            );
            Bird::Vulture
        }
    }
}
