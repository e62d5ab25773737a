//! Participant (team captain) to bird resolution.
//!
//! A participant's bird comes from their birth star when known, otherwise
//! from the star estimated from their birth date, otherwise from the vowel
//! class of their name's first letter. The bird depends on the lunar phase,
//! so it is resolved per call and never stored on the participant.

use serde::{Deserialize, Serialize};

use crate::bird::Bird;
use crate::nakshatra::{Nakshatra, bird_from_nakshatra, nakshatra_from_iso};
use crate::paksha::LunarPhase;

/// A subject whose bird is being determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name. Its first letter drives the fallback mapping.
    pub name: String,
    /// Birth date as `YYYY-MM-DD`. Unparseable values are ignored.
    pub birth_date: Option<String>,
    /// Known birth star, taking precedence over the birth date.
    pub star: Option<Nakshatra>,
}

impl Participant {
    /// Participant known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_star(mut self, star: Nakshatra) -> Self {
        self.star = Some(star);
        self
    }

    pub fn with_birth_date(mut self, date: impl Into<String>) -> Self {
        self.birth_date = Some(date.into());
        self
    }
}

/// Vowel class of a name's initial letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameVowel {
    A,
    I,
    U,
    E,
    O,
}

/// Classify the first letter of a name.
///
/// A = {a}, I = {i, l, r}, U = {u, k}, E = {e, m, t}; every other letter,
/// including o, n, p, s, falls in O. Returns `None` for a blank name.
pub fn name_vowel(name: &str) -> Option<NameVowel> {
    let first = name.trim().chars().next()?.to_lowercase().next()?;
    Some(match first {
        'a' => NameVowel::A,
        'i' | 'l' | 'r' => NameVowel::I,
        'u' | 'k' => NameVowel::U,
        'e' | 'm' | 't' => NameVowel::E,
        _ => NameVowel::O,
    })
}

/// Bird for a name vowel class. The waxing and waning tables are
/// independent of each other.
pub const fn bird_from_vowel(vowel: NameVowel, phase: LunarPhase) -> Bird {
    match phase {
        LunarPhase::Waxing => match vowel {
            NameVowel::A => Bird::Vulture,
            NameVowel::I => Bird::Owl,
            NameVowel::U => Bird::Crow,
            NameVowel::E => Bird::Cock,
            NameVowel::O => Bird::Peacock,
        },
        LunarPhase::Waning => match vowel {
            NameVowel::A => Bird::Cock,
            NameVowel::I => Bird::Vulture,
            NameVowel::U => Bird::Owl,
            NameVowel::E => Bird::Peacock,
            NameVowel::O => Bird::Crow,
        },
    }
}

/// How a participant's bird was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdSource {
    /// Explicit birth star.
    Star(Nakshatra),
    /// Star estimated from the birth date.
    BirthDate(Nakshatra),
    /// First letter of the name.
    NameInitial(NameVowel),
    /// Blank name with no star: first bird in canonical order.
    Default,
}

/// Resolved bird together with its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirdResolution {
    pub bird: Bird,
    pub source: BirdSource,
}

/// Resolve a participant's bird for the given phase.
pub fn resolve_bird(participant: &Participant, phase: LunarPhase) -> BirdResolution {
    if let Some(star) = participant.star {
        return BirdResolution {
            bird: bird_from_nakshatra(star, phase),
            source: BirdSource::Star(star),
        };
    }
    if let Some(star) = participant.birth_date.as_deref().and_then(nakshatra_from_iso) {
        return BirdResolution {
            bird: bird_from_nakshatra(star, phase),
            source: BirdSource::BirthDate(star),
        };
    }
    match name_vowel(&participant.name) {
        Some(vowel) => BirdResolution {
            bird: bird_from_vowel(vowel, phase),
            source: BirdSource::NameInitial(vowel),
        },
        None => BirdResolution {
            bird: Bird::Vulture,
            source: BirdSource::Default,
        },
    }
}

/// Shorthand for `resolve_bird(participant, phase).bird`.
pub fn bird_for(participant: &Participant, phase: LunarPhase) -> Bird {
    resolve_bird(participant, phase).bird
}
