//! Built-in venue table.

use pakshi_base::GeoLocation;

/// A named venue with its standard-time UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Standard-time offset from UTC in minutes. Daylight saving is not
    /// applied.
    pub utc_offset_min: i32,
}

impl City {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg)
    }
}

const fn city(name: &'static str, lat: f64, lng: f64, utc_offset_min: i32) -> City {
    City {
        name,
        latitude_deg: lat,
        longitude_deg: lng,
        utc_offset_min,
    }
}

pub const CITIES: [City; 21] = [
    city("Mumbai", 19.07, 72.87, 330),
    city("Chennai", 13.08, 80.27, 330),
    city("Bangalore", 12.97, 77.59, 330),
    city("Kolkata", 22.57, 88.36, 330),
    city("Delhi", 28.70, 77.10, 330),
    city("Hyderabad", 17.38, 78.48, 330),
    city("Ahmedabad", 23.02, 72.57, 330),
    city("Pune", 18.52, 73.85, 330),
    city("Jaipur", 26.91, 75.78, 330),
    city("Lucknow", 26.84, 80.94, 330),
    city("London", 51.50, -0.12, 0),
    city("Manchester", 53.48, -2.24, 0),
    city("Birmingham", 52.48, -1.89, 0),
    city("Sydney", -33.86, 151.20, 600),
    city("Melbourne", -37.81, 144.96, 600),
    city("Perth", -31.95, 115.86, 480),
    city("Dubai", 25.20, 55.27, 240),
    city("Sharjah", 25.35, 55.40, 240),
    city("Colombo", 6.92, 79.86, 330),
    city("Karachi", 24.86, 67.00, 300),
    city("Lahore", 31.52, 74.35, 300),
];

/// Look up a city by name.
///
/// An exact case-insensitive match wins; otherwise the query must be a
/// substring of exactly one city name.
pub fn find_city(query: &str) -> Option<&'static City> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    if let Some(c) = CITIES.iter().find(|c| c.name.to_lowercase() == q) {
        return Some(c);
    }
    let mut matches = CITIES.iter().filter(|c| c.name.to_lowercase().contains(&q));
    match (matches.next(), matches.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
