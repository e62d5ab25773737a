//! Resolve where and when from command-line arguments.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use pakshi_base::GeoLocation;

use crate::cities::{CITIES, find_city};
use crate::error::CliError;

/// City used when nothing else is given.
pub const DEFAULT_CITY: &str = "Mumbai";

/// A resolved venue.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: String,
    pub location: GeoLocation,
    pub utc_offset_min: i32,
}

/// Raw location inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueQuery<'a> {
    pub city: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub utc_offset_min: Option<i32>,
    pub default_city: Option<&'a str>,
}

/// Zone offset implied by longitude, rounded to whole hours.
fn offset_from_longitude(lng: f64) -> i32 {
    ((lng / 15.0).round() as i32) * 60
}

/// Explicit coordinates win over a city; a city wins over the configured
/// default; [`DEFAULT_CITY`] is the last resort.
///
/// Without `--utc-offset`, a city uses its standard offset and bare
/// coordinates use the whole-hour zone nearest their longitude.
pub fn resolve_venue(q: &VenueQuery<'_>) -> Result<Venue, CliError> {
    let mut venue = match (q.lat, q.lng) {
        (Some(lat), Some(lng)) => {
            let location = GeoLocation::new(lat, lng);
            location.validate()?;
            Venue {
                name: format!("{lat:.2}, {lng:.2}"),
                location,
                utc_offset_min: offset_from_longitude(lng),
            }
        }
        (None, None) => {
            let name = q.city.or(q.default_city).unwrap_or(DEFAULT_CITY);
            let city = find_city(name).ok_or_else(|| {
                let known: Vec<&str> = CITIES.iter().map(|c| c.name).collect();
                CliError::Usage(format!(
                    "Unknown or ambiguous city: {name}\nKnown: {}",
                    known.join(", ")
                ))
            })?;
            Venue {
                name: city.name.to_string(),
                location: city.location(),
                utc_offset_min: city.utc_offset_min,
            }
        }
        _ => {
            return Err(CliError::Usage(
                "--lat and --lng must be given together".to_string(),
            ));
        }
    };

    if let Some(offset) = q.utc_offset_min {
        venue.utc_offset_min = offset;
    }
    Ok(venue)
}

fn fixed_offset(minutes: i32) -> Result<FixedOffset, CliError> {
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| CliError::Usage(format!("UTC offset out of range: {minutes} min")))
}

/// Parse a local date-time.
///
/// Accepts RFC 3339 with its own offset, or `YYYY-MM-DDTHH:MM[:SS]` (a space
/// also separates) read in the venue's offset.
pub fn parse_local_time(s: &str, utc_offset_min: i32) -> Result<DateTime<FixedOffset>, CliError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    let naive = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| {
            CliError::Usage(format!(
                "Invalid time: {s} (expected YYYY-MM-DDTHH:MM or RFC 3339)"
            ))
        })?;
    fixed_offset(utc_offset_min)?
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| CliError::Usage(format!("Invalid local time: {s}")))
}

/// Parse a calendar date, `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::Usage(format!("Invalid date: {s} (expected YYYY-MM-DD)")))
}
