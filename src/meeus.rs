//! Low-precision solar position algorithm.
//!
//! Follows the simplified solar coordinates of Meeus, "Astronomical Algorithms", 2nd
//! edition, chapter 25 (geometric mean longitude, mean anomaly, equation of center), the
//! mean obliquity of chapter 22 truncated to its linear term, and the mean sidereal time
//! of chapter 12. Accuracy is about 0.01° in solar longitude for dates within a few
//! centuries of J2000; there is no nutation, aberration, parallax or refraction.
//!
//! Azimuth is measured from south, positive toward west.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::check_coordinates;
use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, normalize_degrees_pm_180,
    normalize_radians_0_to_2pi, polynomial, radians_to_degrees, sin,
};
use crate::time::JulianDate;
use crate::types::EquatorialPosition;
use crate::{Result, SolarPosition};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Geometric mean longitude of the sun, degrees, as a polynomial in Julian centuries.
const MEAN_LONGITUDE_COEFFS: [f64; 3] = [280.46646, 36000.76983, 0.0003032];

/// Mean anomaly of the sun, degrees, as a polynomial in Julian centuries.
const MEAN_ANOMALY_COEFFS: [f64; 3] = [357.52911, 35999.05029, -0.0001537];

/// Coefficients of sin M in the equation of center.
const CENTER_SIN_M_COEFFS: [f64; 3] = [1.914602, -0.004817, -0.000014];

/// Coefficients of sin 2M in the equation of center.
const CENTER_SIN_2M_COEFFS: [f64; 2] = [0.019993, -0.000101];

/// Coefficient of sin 3M in the equation of center.
const CENTER_SIN_3M: f64 = 0.000289;

/// Mean obliquity of the ecliptic, degrees, linear in Julian centuries.
const OBLIQUITY_COEFFS: [f64; 2] = [23.439291, -0.0130042];

/// Century-dependent part of the Greenwich mean sidereal time, degrees.
const SIDEREAL_CENTURY_COEFFS: [f64; 4] = [280.46061837, 0.0, 0.000387933, -1.0 / 38710000.0];

/// Sidereal rotation, degrees per day.
const SIDEREAL_DEGREES_PER_DAY: f64 = 360.98564736629;

/// Calculate the sun position for a timezone-aware date and time.
///
/// The datetime is converted to UTC before use.
///
/// # Arguments
/// * `datetime` - Date and time with timezone
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
///
/// # Errors
/// Returns error for invalid coordinates (outside range or not finite) or a date before year 1.
///
/// # Example
/// ```rust
/// use sun_calculator::meeus;
/// use chrono::{TimeZone, Utc};
///
/// let datetime = Utc.with_ymd_and_hms(2025, 2, 11, 11, 25, 18).unwrap();
/// let position = meeus::solar_position(
///     datetime,
///     51.21131496342009,  // Bruges latitude
///     3.2258847770102235, // Bruges longitude
/// ).unwrap();
///
/// // Late morning in February: a little east of south, about 24° up
/// assert!(position.azimuth() < 0.0);
/// assert!((position.altitude_degrees() - 24.5).abs() < 0.5);
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
/// Core implementation, available without chrono.
///
/// # Errors
/// Returns error for invalid coordinates (outside range or not finite).
///
/// # Example
/// ```rust
/// use sun_calculator::{meeus, time::JulianDate};
///
/// let jd = JulianDate::from_utc(2025, 2, 11, 11, 25, 18.0).unwrap();
/// let position = meeus::solar_position_from_julian(jd, 51.21131496342009, 3.2258847770102235).unwrap();
///
/// println!("Azimuth: {:.6} rad", position.azimuth());
/// println!("Altitude: {:.6} rad", position.altitude());
/// ```
pub fn solar_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;

    let equatorial = sun_equatorial(jd);
    let hour_angle = local_hour_angle(jd, longitude, equatorial.right_ascension);

    let phi = degrees_to_radians(latitude);
    let (sin_phi, cos_phi) = (sin(phi), cos(phi));
    let (sin_delta, cos_delta) = (sin(equatorial.declination), cos(equatorial.declination));
    let (sin_h, cos_h) = (sin(hour_angle), cos(hour_angle));

    let altitude = asin(sin_phi * sin_delta + cos_phi * cos_delta * cos_h);
    // atan2 keeps every quadrant; the result already points south at H = 0
    let azimuth = atan2(
        cos_delta * sin_h,
        cos_delta * cos_h * sin_phi - sin_delta * cos_phi,
    );

    SolarPosition::new(azimuth, altitude)
}

/// Geocentric right ascension and declination of the sun for a Julian date.
///
/// # Example
/// ```rust
/// use sun_calculator::{meeus, time::JulianDate};
///
/// // Around the June solstice the declination peaks near the obliquity
/// let jd = JulianDate::from_utc(2025, 6, 21, 0, 0, 0.0).unwrap();
/// let sun = meeus::sun_equatorial(jd);
/// assert!((sun.declination.to_degrees() - 23.44).abs() < 0.01);
/// ```
#[must_use]
pub fn sun_equatorial(jd: JulianDate) -> EquatorialPosition {
    let t = jd.julian_century();

    let l0 = normalize_degrees_0_to_360(polynomial(&MEAN_LONGITUDE_COEFFS, t));
    let m = degrees_to_radians(normalize_degrees_0_to_360(polynomial(
        &MEAN_ANOMALY_COEFFS,
        t,
    )));

    let center = polynomial(&CENTER_SIN_M_COEFFS, t) * sin(m)
        + polynomial(&CENTER_SIN_2M_COEFFS, t) * sin(2.0 * m)
        + CENTER_SIN_3M * sin(3.0 * m);

    let lambda = degrees_to_radians(normalize_degrees_0_to_360(l0 + center));
    let epsilon = degrees_to_radians(polynomial(&OBLIQUITY_COEFFS, t));

    let sin_lambda = sin(lambda);
    EquatorialPosition {
        right_ascension: normalize_radians_0_to_2pi(atan2(cos(epsilon) * sin_lambda, cos(lambda))),
        declination: asin(sin(epsilon) * sin_lambda),
    }
}

/// Greenwich mean sidereal time in degrees, normalized to [0, 360).
#[must_use]
pub fn greenwich_mean_sidereal_time(jd: JulianDate) -> f64 {
    let t = jd.julian_century();
    normalize_degrees_0_to_360(
        SIDEREAL_DEGREES_PER_DAY * jd.days_since_j2000() + polynomial(&SIDEREAL_CENTURY_COEFFS, t),
    )
}

/// Local hour angle in radians, in [-π, π); positive west of the meridian.
fn local_hour_angle(jd: JulianDate, longitude: f64, right_ascension: f64) -> f64 {
    let local_sidereal_time = greenwich_mean_sidereal_time(jd) + longitude;
    degrees_to_radians(normalize_degrees_pm_180(
        local_sidereal_time - radians_to_degrees(right_ascension),
    ))
}
