//! Sunrise/sunset from a closed-form solar position approximation.
//!
//! Uses the low-order Fourier series for the equation of time and solar
//! declination in terms of the fractional year (NOAA general solar position
//! formulas). Accurate to a few minutes, which is enough to split a day into
//! five yamas. No ephemeris is consulted.

use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate};

use crate::riseset_types::{GeoLocation, SolarConfig, SunTimes, SunTimesResult};

/// Fractional year angle in radians for a 1-based day of year.
///
/// `gamma = 2pi/365 * (day_of_year - 1)`
pub fn fractional_year_rad(day_of_year: u32) -> f64 {
    TAU / 365.0 * (day_of_year as f64 - 1.0)
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time_min(gamma: f64) -> f64 {
    229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Solar declination in radians.
pub fn solar_declination_rad(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Cosine of the rise/set hour angle.
///
/// `cos(H) = cos(zenith) / (cos(phi) cos(dec)) - tan(phi) tan(dec)`
///
/// Values above 1 mean the Sun never rises; below -1, it never sets.
pub fn cos_hour_angle(latitude_rad: f64, declination_rad: f64, zenith_deg: f64) -> f64 {
    zenith_deg.to_radians().cos() / (latitude_rad.cos() * declination_rad.cos())
        - latitude_rad.tan() * declination_rad.tan()
}

/// Rise/set hour angle in degrees, or `None` when the Sun does not cross the
/// horizon.
pub fn hour_angle_deg(latitude_rad: f64, declination_rad: f64, zenith_deg: f64) -> Option<f64> {
    let cos_h = cos_hour_angle(latitude_rad, declination_rad, zenith_deg);
    if (-1.0..=1.0).contains(&cos_h) {
        Some(cos_h.acos().to_degrees())
    } else {
        None
    }
}

/// Local sunrise and sunset for a calendar date.
///
/// # Arguments
/// * `date`: local calendar date
/// * `location`: observer location (east longitude positive)
/// * `utc_offset_min`: local clock offset from UTC in minutes (IST = 330)
/// * `config`: zenith angle used for rise/set
///
/// UTC minutes: `sunrise = 720 - 4 (lng + H) - eqtime`,
/// `sunset = 720 - 4 (lng - H) - eqtime`; the offset is then added and the
/// result wrapped into [0, 1440).
pub fn sun_times(
    date: NaiveDate,
    location: &GeoLocation,
    utc_offset_min: i32,
    config: &SolarConfig,
) -> SunTimesResult {
    let gamma = fractional_year_rad(date.ordinal());
    let eq_time = equation_of_time_min(gamma);
    let decl = solar_declination_rad(gamma);
    let phi = location.latitude_rad();

    let cos_h = cos_hour_angle(phi, decl, config.zenith_deg);
    if cos_h > 1.0 {
        return SunTimesResult::NeverRises;
    }
    if cos_h < -1.0 {
        return SunTimesResult::NeverSets;
    }
    let ha = cos_h.acos().to_degrees();

    let lng = location.longitude_deg;
    let offset = utc_offset_min as f64;
    let sunrise = 720.0 - 4.0 * (lng + ha) - eq_time + offset;
    let sunset = 720.0 - 4.0 * (lng - ha) - eq_time + offset;

    let times = SunTimes::new(sunrise, sunset);
    tracing::debug!(
        %date,
        lat = location.latitude_deg,
        lng,
        sunrise = %times.sunrise_label(),
        sunset = %times.sunset_label(),
        "computed sun times"
    );
    SunTimesResult::Times(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_year_start() {
        assert!(fractional_year_rad(1).abs() < 1e-15);
        assert!((fractional_year_rad(366) - TAU).abs() < 1e-12);
    }

    #[test]
    fn equation_of_time_february_minimum() {
        // Around Feb 11 (doy 42) the equation of time is near -14 minutes.
        let e = equation_of_time_min(fractional_year_rad(42));
        assert!((e - (-14.2)).abs() < 1.0, "eqtime = {e}");
    }

    #[test]
    fn equation_of_time_november_maximum() {
        // Around Nov 3 (doy 307) it peaks near +16.4 minutes.
        let e = equation_of_time_min(fractional_year_rad(307));
        assert!((e - 16.4).abs() < 1.0, "eqtime = {e}");
    }

    #[test]
    fn declination_solstices() {
        let june = solar_declination_rad(fractional_year_rad(172)).to_degrees();
        let december = solar_declination_rad(fractional_year_rad(355)).to_degrees();
        assert!((june - 23.44).abs() < 0.3, "june dec = {june}");
        assert!((december + 23.44).abs() < 0.3, "december dec = {december}");
    }

    #[test]
    fn hour_angle_equator_equinox() {
        // phi = 0, dec = 0: cos(H) = cos(90.833 deg), H = 90.833 deg.
        let h = hour_angle_deg(0.0, 0.0, 90.833).unwrap();
        assert!((h - 90.833).abs() < 1e-9, "H = {h}");
    }

    #[test]
    fn hour_angle_polar_none() {
        let phi = 70.0_f64.to_radians();
        assert!(hour_angle_deg(phi, 23.44_f64.to_radians(), 90.833).is_none());
        assert!(hour_angle_deg(phi, (-23.44_f64).to_radians(), 90.833).is_none());
    }

    #[test]
    fn polar_summer_never_sets() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let loc = GeoLocation::new(78.22, 15.65); // Longyearbyen
        let r = sun_times(date, &loc, 60, &SolarConfig::default());
        assert_eq!(r, SunTimesResult::NeverSets);
    }

    #[test]
    fn polar_winter_never_rises() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let loc = GeoLocation::new(78.22, 15.65);
        let r = sun_times(date, &loc, 60, &SolarConfig::default());
        assert_eq!(r, SunTimesResult::NeverRises);
    }

    #[test]
    fn offset_shifts_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let loc = GeoLocation::new(0.0, 0.0);
        let cfg = SolarConfig::default();
        let utc = sun_times(date, &loc, 0, &cfg).times().unwrap();
        let local = sun_times(date, &loc, 60, &cfg).times().unwrap();
        assert!((local.sunrise_min - utc.sunrise_min - 60.0).abs() < 1e-9);
        assert!((local.sunset_min - utc.sunset_min - 60.0).abs() < 1e-9);
    }
}
