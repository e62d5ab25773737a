//! Shared clock-minute helpers.

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Normalize a clock value to [0, 1440) minutes.
pub fn normalize_minutes(minutes: f64) -> f64 {
    let r = minutes.rem_euclid(MINUTES_PER_DAY);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if r >= MINUTES_PER_DAY { 0.0 } else { r }
}

/// Format minutes since local midnight as `HH:MM`, truncating seconds.
pub fn format_clock(minutes: f64) -> String {
    let m = normalize_minutes(minutes).floor() as u32;
    format!("{:02}:{:02}", m / 60, m % 60)
}
