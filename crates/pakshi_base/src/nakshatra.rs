//! Birth star (nakshatra) resolution and star-to-bird mapping.
//!
//! The star is estimated from the birth date alone with a linear model: a
//! fixed anchor date maps to a fractional star index and the Moon advances
//! a fixed number of stars per day. This is a convenience estimate, not a
//! lunar longitude computation.
//!
//! The 27 stars fall into five bird groups of sizes 5, 6, 5, 5, 6. Waxing
//! maps groups to birds in canonical order; waning reverses it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bird::{ALL_BIRDS, Bird};
use crate::error::PakshiError;
use crate::paksha::LunarPhase;

/// Anchor date for the birth-star model (taken at 12:00 UTC).
pub const STAR_ANCHOR_DATE: (i32, u32, u32) = (2024, 1, 1);

/// Fractional star index at the anchor date (mid-Magam).
pub const STAR_ANCHOR_INDEX: f64 = 9.5;

/// Mean stars traversed per day.
pub const STAR_DAILY_MOTION: f64 = 0.98822;

/// The 27 stars from Aswini to Revathi (Tamil names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Aswini,
    Bharani,
    Krithigai,
    Rohini,
    Mrigashirsham,
    Thiruvathirai,
    Punarpoosam,
    Poosam,
    Ayilyam,
    Magam,
    Pooram,
    Uthiram,
    Hastham,
    Chithirai,
    Swathi,
    Visakam,
    Anusham,
    Kettai,
    Moolam,
    Pooradam,
    Uthiradam,
    Thiruvonam,
    Avittam,
    Sathayam,
    Poorattathi,
    Uthirattathi,
    Revathi,
}

/// All 27 stars in order (0 = Aswini, 26 = Revathi).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Aswini,
    Nakshatra::Bharani,
    Nakshatra::Krithigai,
    Nakshatra::Rohini,
    Nakshatra::Mrigashirsham,
    Nakshatra::Thiruvathirai,
    Nakshatra::Punarpoosam,
    Nakshatra::Poosam,
    Nakshatra::Ayilyam,
    Nakshatra::Magam,
    Nakshatra::Pooram,
    Nakshatra::Uthiram,
    Nakshatra::Hastham,
    Nakshatra::Chithirai,
    Nakshatra::Swathi,
    Nakshatra::Visakam,
    Nakshatra::Anusham,
    Nakshatra::Kettai,
    Nakshatra::Moolam,
    Nakshatra::Pooradam,
    Nakshatra::Uthiradam,
    Nakshatra::Thiruvonam,
    Nakshatra::Avittam,
    Nakshatra::Sathayam,
    Nakshatra::Poorattathi,
    Nakshatra::Uthirattathi,
    Nakshatra::Revathi,
];

/// First star index of each bird group, plus the end sentinel.
const GROUP_STARTS: [u8; 6] = [0, 5, 11, 16, 21, 27];

impl Nakshatra {
    /// Tamil name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aswini => "Aswini",
            Self::Bharani => "Bharani",
            Self::Krithigai => "Krithigai",
            Self::Rohini => "Rohini",
            Self::Mrigashirsham => "Mrigashirsham",
            Self::Thiruvathirai => "Thiruvathirai",
            Self::Punarpoosam => "Punarpoosam",
            Self::Poosam => "Poosam",
            Self::Ayilyam => "Ayilyam",
            Self::Magam => "Magam",
            Self::Pooram => "Pooram",
            Self::Uthiram => "Uthiram",
            Self::Hastham => "Hastham",
            Self::Chithirai => "Chithirai",
            Self::Swathi => "Swathi",
            Self::Visakam => "Visakam",
            Self::Anusham => "Anusham",
            Self::Kettai => "Kettai",
            Self::Moolam => "Moolam",
            Self::Pooradam => "Pooradam",
            Self::Uthiradam => "Uthiradam",
            Self::Thiruvonam => "Thiruvonam",
            Self::Avittam => "Avittam",
            Self::Sathayam => "Sathayam",
            Self::Poorattathi => "Poorattathi",
            Self::Uthirattathi => "Uthirattathi",
            Self::Revathi => "Revathi",
        }
    }

    /// 0-based index (Aswini=0 .. Revathi=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Star at a 0-based index, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_NAKSHATRAS.get(index as usize).copied()
    }

    /// Look up a star by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_NAKSHATRAS
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(name))
    }

    /// 0-based bird group (0-4).
    pub fn group(self) -> u8 {
        let idx = self.index();
        GROUP_STARTS
            .windows(2)
            .position(|w| (w[0]..w[1]).contains(&idx))
            .unwrap_or(0) as u8
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = PakshiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PakshiError::UnknownNakshatra(s.to_string()))
    }
}

/// Estimate the birth star for a date.
///
/// `index = floor((9.5 + days_since_anchor * 0.98822) mod 27)`, with both
/// dates taken at 12:00 UTC.
pub fn nakshatra_from_birth_date(date: NaiveDate) -> Nakshatra {
    let (y, m, d) = STAR_ANCHOR_DATE;
    let days = match NaiveDate::from_ymd_opt(y, m, d) {
        Some(anchor) => (date - anchor).num_days() as f64,
        None => 0.0,
    };
    let raw = (STAR_ANCHOR_INDEX + days * STAR_DAILY_MOTION).rem_euclid(27.0);
    let idx = (raw.floor() as u8).min(26);
    ALL_NAKSHATRAS[idx as usize]
}

/// Estimate the birth star from an ISO `YYYY-MM-DD` date string.
///
/// Returns `None` when the string does not parse.
pub fn nakshatra_from_iso(date: &str) -> Option<Nakshatra> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(nakshatra_from_birth_date)
}

/// Bird ruling a birth star in the given phase.
pub fn bird_from_nakshatra(star: Nakshatra, phase: LunarPhase) -> Bird {
    let group = star.group() as usize;
    match phase {
        LunarPhase::Waxing => ALL_BIRDS[group],
        LunarPhase::Waning => ALL_BIRDS[4 - group],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paksha::ALL_PHASES;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_index(i as u8), Some(*n));
        }
        assert_eq!(Nakshatra::from_index(27), None);
    }

    #[test]
    fn names_round_trip() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(Nakshatra::from_name(n.name()), Some(n));
        }
    }

    #[test]
    fn name_lookup_lenient() {
        assert_eq!(Nakshatra::from_name("  magam "), Some(Nakshatra::Magam));
        assert_eq!(Nakshatra::from_name("REVATHI"), Some(Nakshatra::Revathi));
        assert_eq!(Nakshatra::from_name("Magha"), None);
        assert!("Magha".parse::<Nakshatra>().is_err());
    }

    #[test]
    fn group_sizes() {
        let mut sizes = [0u8; 5];
        for n in ALL_NAKSHATRAS {
            sizes[n.group() as usize] += 1;
        }
        assert_eq!(sizes, [5, 6, 5, 5, 6]);
    }

    #[test]
    fn group_boundaries() {
        assert_eq!(Nakshatra::Mrigashirsham.group(), 0);
        assert_eq!(Nakshatra::Thiruvathirai.group(), 1);
        assert_eq!(Nakshatra::Pooram.group(), 1);
        assert_eq!(Nakshatra::Uthiram.group(), 2);
        assert_eq!(Nakshatra::Visakam.group(), 2);
        assert_eq!(Nakshatra::Anusham.group(), 3);
        assert_eq!(Nakshatra::Thiruvonam.group(), 4);
    }

    #[test]
    fn anchor_date_is_magam() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(nakshatra_from_birth_date(d), Nakshatra::Magam);
    }

    #[test]
    fn next_day_advances() {
        // 9.5 + 0.98822 = 10.488 -> Pooram
        let d = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(nakshatra_from_birth_date(d), Nakshatra::Pooram);
    }

    #[test]
    fn before_anchor_wraps() {
        // 9.5 - 10 * 0.98822 = -0.3822 -> 26.6178 -> Revathi
        let d = NaiveDate::from_ymd_opt(2023, 12, 22).unwrap();
        assert_eq!(nakshatra_from_birth_date(d), Nakshatra::Revathi);
    }

    #[test]
    fn iso_parsing() {
        assert_eq!(nakshatra_from_iso("2024-01-01"), Some(Nakshatra::Magam));
        assert_eq!(nakshatra_from_iso(" 2024-01-02 "), Some(Nakshatra::Pooram));
        assert_eq!(nakshatra_from_iso("01/02/2024"), None);
        assert_eq!(nakshatra_from_iso(""), None);
        assert_eq!(nakshatra_from_iso("2024-02-30"), None);
    }

    #[test]
    fn star_birds_waxing() {
        let p = LunarPhase::Waxing;
        assert_eq!(bird_from_nakshatra(Nakshatra::Aswini, p), Bird::Vulture);
        assert_eq!(bird_from_nakshatra(Nakshatra::Magam, p), Bird::Owl);
        assert_eq!(bird_from_nakshatra(Nakshatra::Hastham, p), Bird::Crow);
        assert_eq!(bird_from_nakshatra(Nakshatra::Kettai, p), Bird::Cock);
        assert_eq!(bird_from_nakshatra(Nakshatra::Revathi, p), Bird::Peacock);
    }

    #[test]
    fn star_birds_waning_reverse_groups() {
        for n in ALL_NAKSHATRAS {
            let waxing = bird_from_nakshatra(n, LunarPhase::Waxing);
            let waning = bird_from_nakshatra(n, LunarPhase::Waning);
            assert_eq!(waxing.index() + waning.index(), 4, "{n:?}");
        }
    }

    #[test]
    fn every_star_maps_in_both_phases() {
        for phase in ALL_PHASES {
            for n in ALL_NAKSHATRAS {
                assert!(ALL_BIRDS.contains(&bird_from_nakshatra(n, phase)));
            }
        }
    }
}
