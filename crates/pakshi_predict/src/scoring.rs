//! Head-to-head comparison of two snapshots.
//!
//! Toss and match resolution differ on exact ties: the toss always produces
//! a winner (lower canonical bird), the match reports a draw.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::snapshot_types::Snapshot;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Pick the value belonging to this side.
    pub fn pick<T>(self, a: T, b: T) -> T {
        match self {
            Self::A => a,
            Self::B => b,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Outcome of a power comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    Winner(Side),
    Draw,
}

impl Verdict {
    /// Winning side, or `None` for a draw.
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Winner(side) => Some(side),
            Self::Draw => None,
        }
    }

    /// Team name of the winner, or `"Draw"`.
    pub fn label<'a>(self, team_a: &'a str, team_b: &'a str) -> &'a str {
        match self {
            Self::Winner(side) => side.pick(team_a, team_b),
            Self::Draw => "Draw",
        }
    }
}

/// Higher power wins; equal powers draw.
pub fn verdict_from_powers(power_a: i32, power_b: i32) -> Verdict {
    match power_a.cmp(&power_b) {
        std::cmp::Ordering::Greater => Verdict::Winner(Side::A),
        std::cmp::Ordering::Less => Verdict::Winner(Side::B),
        std::cmp::Ordering::Equal => Verdict::Draw,
    }
}

/// Match-time resolution. May draw.
pub fn match_verdict(a: &Snapshot, b: &Snapshot) -> Verdict {
    verdict_from_powers(a.power, b.power)
}

/// Toss-time resolution. Never draws: on equal power the side holding the
/// lower canonical bird wins, and identical birds go to side B.
pub fn toss_winner(a: &Snapshot, b: &Snapshot) -> Side {
    match verdict_from_powers(a.power, b.power) {
        Verdict::Winner(side) => side,
        Verdict::Draw if a.bird < b.bird => Side::A,
        Verdict::Draw => Side::B,
    }
}

/// Win probability in percent: 60 + |Δpower| / 5 when the powers differ,
/// otherwise 50.
pub fn win_probability(a: &Snapshot, b: &Snapshot) -> f64 {
    let diff = (a.power - b.power).abs();
    if diff > 0 {
        60.0 + diff as f64 / 5.0
    } else {
        50.0
    }
}
