//! Day-count solar position formula.
//!
//! A compact variant popularised by the `SunCalc` JavaScript library: linear mean
//! anomaly in days since J2000, a three-term equation of center, fixed obliquity and a
//! linear sidereal time. Cheaper than [`crate::meeus`] and within a few tenths of a
//! degree of it for present-day dates.
//!
//! Azimuth is measured from south, positive toward west.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::{
    PI, asin, atan2, cos, degrees_to_radians, normalize_radians_pm_pi, sin, tan,
};
use crate::time::JulianDate;
use crate::types::EquatorialPosition;
use crate::{Result, SolarPosition};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Argument of perihelion of the Earth, degrees.
const PERIHELION: f64 = 102.9372;

/// Fixed obliquity of the ecliptic, degrees.
const OBLIQUITY: f64 = 23.4397;

/// Calculate the sun position for a timezone-aware date and time.
///
/// # Errors
/// Returns error for invalid coordinates (outside range or not finite) or a date before year 1.
///
/// # Example
/// ```rust
/// use sun_calculator::suncalc;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2025-02-11T12:25:18+01:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = suncalc::solar_position(datetime, 51.21131496342009, 3.2258847770102235).unwrap();
/// assert!(position.is_sun_up());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarPosition> {
    let jd = JulianDate::from_datetime(&datetime)?;
    solar_position_from_julian(jd, latitude, longitude)
}

/// Calculate the sun position from a Julian date.
///
/// # Errors
/// Returns error for invalid coordinates (outside range or not finite).
pub fn solar_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;

    let days = jd.days_since_j2000();
    let sun = sun_equatorial(jd);

    let sidereal_time = degrees_to_radians(280.16 + 360.9856235 * days + longitude);
    let h = normalize_radians_pm_pi(sidereal_time - sun.right_ascension);
    let phi = degrees_to_radians(latitude);
    let delta = sun.declination;

    let azimuth = atan2(sin(h), cos(h) * sin(phi) - tan(delta) * cos(phi));
    let altitude = asin(sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(h));

    SolarPosition::new(azimuth, altitude)
}

/// Right ascension and declination of the sun for a Julian date.
///
/// Right ascension is returned in [-π, π].
#[must_use]
pub fn sun_equatorial(jd: JulianDate) -> EquatorialPosition {
    let days = jd.days_since_j2000();

    let m = degrees_to_radians(357.5291 + 0.98560028 * days);
    let center = degrees_to_radians(
        1.9148 * sin(m) + 0.02 * sin(2.0 * m) + 0.0003 * sin(3.0 * m),
    );
    let lambda = m + center + degrees_to_radians(PERIHELION) + PI;
    let epsilon = degrees_to_radians(OBLIQUITY);

    EquatorialPosition {
        right_ascension: atan2(sin(lambda) * cos(epsilon), cos(lambda)),
        declination: asin(sin(epsilon) * sin(lambda)),
    }
}
