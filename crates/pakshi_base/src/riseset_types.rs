//! Types for the low-precision sunrise/sunset model.

use serde::{Deserialize, Serialize};

use crate::error::PakshiError;
use crate::util::{MINUTES_PER_DAY, format_clock, normalize_minutes};

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Check that both coordinates are finite and in range.
    pub fn validate(&self) -> Result<(), PakshiError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(PakshiError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(PakshiError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(())
    }
}

/// Configurable parameters for the sunrise/sunset approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    /// Zenith angle of the Sun's centre at rise/set in degrees. Default:
    /// 90.833 (34' refraction + 16' semidiameter).
    pub zenith_deg: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self { zenith_deg: 90.833 }
    }
}

/// Local sunrise and sunset as minutes since local midnight, each in [0, 1440).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise_min: f64,
    pub sunset_min: f64,
}

impl SunTimes {
    /// Fixed 06:00 / 18:00 boundary, used when the Sun does not rise or set.
    pub const CONVENTIONAL: SunTimes = SunTimes {
        sunrise_min: 360.0,
        sunset_min: 1080.0,
    };

    /// Build from raw minute values, wrapping each into [0, 1440).
    pub fn new(sunrise_min: f64, sunset_min: f64) -> Self {
        Self {
            sunrise_min: normalize_minutes(sunrise_min),
            sunset_min: normalize_minutes(sunset_min),
        }
    }

    /// Length of the daylight span in minutes, [0, 1440).
    pub fn day_span_min(&self) -> f64 {
        normalize_minutes(self.sunset_min - self.sunrise_min)
    }

    /// Length of the night span in minutes, (0, 1440].
    pub fn night_span_min(&self) -> f64 {
        MINUTES_PER_DAY - self.day_span_min()
    }

    /// Sunrise as `HH:MM`.
    pub fn sunrise_label(&self) -> String {
        format_clock(self.sunrise_min)
    }

    /// Sunset as `HH:MM`.
    pub fn sunset_label(&self) -> String {
        format_clock(self.sunset_min)
    }
}

/// Result of a sunrise/sunset computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunTimesResult {
    /// Sun rises and sets on this date.
    Times(SunTimes),
    /// Sun stays below the horizon (polar night).
    NeverRises,
    /// Sun stays above the horizon (midnight sun).
    NeverSets,
}

impl SunTimesResult {
    /// Rise/set times, or `None` for polar day or night.
    pub fn times(self) -> Option<SunTimes> {
        match self {
            Self::Times(t) => Some(t),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(SolarConfig::default().zenith_deg, 90.833);
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(19.07, 72.87).validate().is_ok());
        assert!(GeoLocation::new(90.0, -180.0).validate().is_ok());
        assert!(GeoLocation::new(91.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 180.5).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn conventional_spans() {
        let t = SunTimes::CONVENTIONAL;
        assert!((t.day_span_min() - 720.0).abs() < 1e-12);
        assert!((t.night_span_min() - 720.0).abs() < 1e-12);
        assert_eq!(t.sunrise_label(), "06:00");
        assert_eq!(t.sunset_label(), "18:00");
    }

    #[test]
    fn wrapped_day_span() {
        // Sunrise late in the clock day, sunset after local midnight.
        let t = SunTimes::new(1400.0, 1440.0 + 600.0);
        assert!((t.day_span_min() - 640.0).abs() < 1e-9);
        assert!((t.night_span_min() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn new_wraps_negative() {
        let t = SunTimes::new(-20.0, 700.0);
        assert!((t.sunrise_min - 1420.0).abs() < 1e-12);
    }

    #[test]
    fn polar_results_have_no_times() {
        assert!(SunTimesResult::NeverRises.times().is_none());
        assert!(SunTimesResult::NeverSets.times().is_none());
        assert!(SunTimesResult::Times(SunTimes::CONVENTIONAL).times().is_some());
    }
}
