//! The five birds (pancha pakshi), their colours, and friendships.
//!
//! Friend and enemy lists are per lunar phase. Each bird has exactly two
//! friends and two enemies; the remaining bird (if any) is neutral.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::paksha::LunarPhase;

/// One of the five birds. Declaration order is the canonical order used for
/// scanning and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bird {
    Vulture,
    Owl,
    Crow,
    Cock,
    Peacock,
}

/// All five birds in canonical order.
pub const ALL_BIRDS: [Bird; 5] = [
    Bird::Vulture,
    Bird::Owl,
    Bird::Crow,
    Bird::Cock,
    Bird::Peacock,
];

impl Bird {
    /// Tamil name of the bird.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vulture => "Valluru",
            Self::Owl => "Aandhai",
            Self::Crow => "Kakam",
            Self::Cock => "Kozhi",
            Self::Peacock => "Mayil",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Vulture => "Vulture",
            Self::Owl => "Owl",
            Self::Crow => "Crow",
            Self::Cock => "Cock",
            Self::Peacock => "Peacock",
        }
    }

    /// 0-based canonical index (Vulture=0 .. Peacock=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Vulture => 0,
            Self::Owl => 1,
            Self::Crow => 2,
            Self::Cock => 3,
            Self::Peacock => 4,
        }
    }

    /// Colour associated with the bird in the given phase.
    pub const fn color(self, phase: LunarPhase) -> BirdColor {
        use BirdColor::*;
        match (phase, self) {
            (LunarPhase::Waxing, Self::Vulture) => Gold,
            (LunarPhase::Waxing, Self::Owl) => White,
            (LunarPhase::Waxing, Self::Crow) => Red,
            (LunarPhase::Waxing, Self::Cock) => Green,
            (LunarPhase::Waxing, Self::Peacock) => Black,
            (LunarPhase::Waning, Self::Vulture) => Black,
            (LunarPhase::Waning, Self::Owl) => Red,
            (LunarPhase::Waning, Self::Crow) => Gold,
            (LunarPhase::Waning, Self::Cock) => White,
            (LunarPhase::Waning, Self::Peacock) => Green,
        }
    }
}

impl Display for Bird {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.english_name())
    }
}

/// Bird colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirdColor {
    Gold,
    White,
    Red,
    Green,
    Black,
}

impl BirdColor {
    /// Tamil colour name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gold => "Pon",
            Self::White => "Vellai",
            Self::Red => "Sivappu",
            Self::Green => "Pachai",
            Self::Black => "Karuppu",
        }
    }
}

// ---------------------------------------------------------------------------
// Friendship
// ---------------------------------------------------------------------------

/// Relationship of a subject bird to the currently ruling bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirdRelation {
    /// The subject is itself the ruler.
    Itself,
    Friend,
    Enemy,
    Neutral,
}

impl BirdRelation {
    /// Power adjustment applied on top of the activity's base power.
    pub const fn power_bonus(self) -> i32 {
        match self {
            Self::Itself => 20,
            Self::Friend => 10,
            Self::Enemy => -10,
            Self::Neutral => 0,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Itself => "Dominant (Self)",
            Self::Friend => "Friend of Ruler",
            Self::Enemy => "Enemy of Ruler",
            Self::Neutral => "Neutral",
        }
    }
}

/// The two friends of `bird` in the given phase.
pub const fn friends(bird: Bird, phase: LunarPhase) -> [Bird; 2] {
    use Bird::*;
    match phase {
        LunarPhase::Waxing => match bird {
            Vulture => [Peacock, Owl],
            Owl => [Vulture, Crow],
            Crow => [Cock, Owl],
            Cock => [Crow, Peacock],
            Peacock => [Vulture, Cock],
        },
        LunarPhase::Waning => match bird {
            Vulture => [Peacock, Crow],
            Owl => [Crow, Cock],
            Crow => [Vulture, Owl],
            Cock => [Peacock, Owl],
            Peacock => [Vulture, Cock],
        },
    }
}

/// The two enemies of `bird` in the given phase.
pub const fn enemies(bird: Bird, phase: LunarPhase) -> [Bird; 2] {
    use Bird::*;
    match phase {
        LunarPhase::Waxing => match bird {
            Vulture => [Crow, Cock],
            Owl => [Cock, Peacock],
            Crow => [Vulture, Peacock],
            Cock => [Vulture, Owl],
            Peacock => [Owl, Crow],
        },
        LunarPhase::Waning => match bird {
            Vulture => [Owl, Cock],
            Owl => [Vulture, Peacock],
            Crow => [Peacock, Cock],
            Cock => [Vulture, Crow],
            Peacock => [Owl, Crow],
        },
    }
}

/// Relationship of `subject` to `ruler` in the given phase.
pub fn bird_relation(subject: Bird, ruler: Bird, phase: LunarPhase) -> BirdRelation {
    if subject == ruler {
        BirdRelation::Itself
    } else if friends(subject, phase).contains(&ruler) {
        BirdRelation::Friend
    } else if enemies(subject, phase).contains(&ruler) {
        BirdRelation::Enemy
    } else {
        BirdRelation::Neutral
    }
}
