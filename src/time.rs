//! Julian date calculations.
//!
//! Calendar dates are interpreted in the proleptic Gregorian calendar for every year from
//! 1 CE onwards, following the usual almanac practice rather than switching to the Julian
//! calendar before October 1582.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian date of 0001-01-01 00:00:00 UTC, the earliest supported instant.
const EARLIEST_JDN: f64 = 1_721_425.5;

/// Julian date representation for astronomical calculations.
///
/// Stores the continuous day count since noon on 1 January 4713 BCE (Julian calendar),
/// with the fractional part encoding time of day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates a new Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is converted to UTC first.
    ///
    /// # Errors
    /// Returns error if the UTC date lies before year 1 or carries a leap second.
    ///
    /// # Example
    /// ```
    /// # use sun_calculator::time::JulianDate;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    /// let jd = JulianDate::from_datetime(&noon).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        let utc_datetime = datetime.with_timezone(&chrono::Utc);
        Self::from_utc(
            utc_datetime.year(),
            utc_datetime.month(),
            utc_datetime.day(),
            utc_datetime.hour(),
            utc_datetime.minute(),
            f64::from(utc_datetime.second()) + f64::from(utc_datetime.nanosecond()) / 1e9,
        )
    }

    /// Creates a new Julian date from a naive chrono `NaiveDateTime`, taken as UTC.
    ///
    /// # Errors
    /// Returns error if the date lies before year 1 or carries a leap second.
    #[cfg(feature = "chrono")]
    pub fn from_naive_utc(datetime: &chrono::NaiveDateTime) -> Result<Self> {
        Self::from_datetime(&datetime.and_utc())
    }

    /// Creates a new Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Arguments
    /// * `year` - Year (1 or later, proleptic Gregorian)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1 to the length of the month)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range.
    ///
    /// # Example
    /// ```
    /// # use sun_calculator::time::JulianDate;
    /// let jd = JulianDate::from_utc(1987, 1, 27, 0, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_446_822.5);
    ///
    /// assert!(JulianDate::from_utc(2025, 13, 1, 0, 0, 0.0).is_err());
    /// assert!(JulianDate::from_utc(2025, 2, 29, 0, 0, 0.0).is_err());
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if year < 1 {
            return Err(Error::invalid_datetime("year must be 1 or later"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        let jd = calculate_julian_date(year, month, day, hour, minute, second);
        Ok(Self { jd })
    }

    /// Wraps an existing Julian Day value.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the value is not finite or precedes 0001-01-01.
    pub fn from_julian_date(jd: f64) -> Result<Self> {
        if !jd.is_finite() {
            return Err(Error::invalid_datetime("julian date must be finite"));
        }
        if jd < EARLIEST_JDN {
            return Err(Error::invalid_datetime(
                "julian date must not precede 0001-01-01",
            ));
        }
        Ok(Self { jd })
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JDN
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    /// Returns this date shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }
}

/// Calculates Julian Date from UTC date/time components.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, chapter 7, with the Gregorian
/// correction applied to every date.
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if month < 3 {
        y -= 1.0;
        m += 12.0;
    }

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d + b - 1524.5
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_julian_date_reference_values() {
        // Meeus, Astronomical Algorithms, examples 7.a and 7.b plus the J2000 epoch
        let cases = [
            ((2000, 1, 1, 12, 0, 0.0), 2_451_545.0),
            ((1957, 10, 4, 19, 26, 24.0), 2_436_116.31),
            ((1987, 1, 27, 0, 0, 0.0), 2_446_822.5),
            ((1999, 1, 1, 0, 0, 0.0), 2_451_179.5),
            ((1600, 1, 1, 0, 0, 0.0), 2_305_447.5),
        ];

        for ((y, mo, d, h, mi, s), expected) in cases {
            let jd = JulianDate::from_utc(y, mo, d, h, mi, s).unwrap();
            assert!(
                (jd.julian_date() - expected).abs() < 1e-6,
                "{y}-{mo}-{d}: got {}, expected {expected}",
                jd.julian_date()
            );
        }
    }

    #[test]
    fn test_proleptic_gregorian_before_1582() {
        let jd = JulianDate::from_utc(1, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(jd.julian_date(), EARLIEST_JDN);

        // Days that the 1582 reform skipped still exist on the proleptic calendar
        let before = JulianDate::from_utc(1582, 10, 4, 0, 0, 0.0).unwrap();
        let skipped = JulianDate::from_utc(1582, 10, 10, 0, 0, 0.0).unwrap();
        let after = JulianDate::from_utc(1582, 10, 15, 0, 0, 0.0).unwrap();
        assert!((skipped.julian_date() - before.julian_date() - 6.0).abs() < EPSILON);
        assert!((after.julian_date() - before.julian_date() - 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_time_of_day_fraction() {
        let midnight = JulianDate::from_utc(2025, 2, 11, 0, 0, 0.0).unwrap();
        let later = JulianDate::from_utc(2025, 2, 11, 11, 25, 18.0).unwrap();
        let expected = (11.0 * 3600.0 + 25.0 * 60.0 + 18.0) / 86_400.0;
        assert!((later.julian_date() - midnight.julian_date() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_julian_century() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(jd.julian_century(), 0.0);
        assert_eq!(jd.days_since_j2000(), 0.0);

        let next_century = jd.add_days(DAYS_PER_CENTURY);
        assert!((next_century.julian_century() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_components() {
        assert!(JulianDate::from_utc(0, 1, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 0, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 13, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 1, 0, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 1, 32, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 4, 31, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 2, 29, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 1, 1, 24, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 1, 1, 0, 60, 0.0).is_err());
        assert!(JulianDate::from_utc(2025, 1, 1, 0, 0, 60.0).is_err());
        assert!(JulianDate::from_utc(2025, 1, 1, 0, 0, f64::NAN).is_err());

        assert!(JulianDate::from_utc(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(2000, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(2025, 12, 31, 23, 59, 59.999).is_ok());
    }

    #[test]
    fn test_from_julian_date() {
        assert_eq!(
            JulianDate::from_julian_date(J2000_JDN).unwrap().julian_date(),
            J2000_JDN
        );
        assert!(JulianDate::from_julian_date(f64::NAN).is_err());
        assert!(JulianDate::from_julian_date(f64::INFINITY).is_err());
        assert!(JulianDate::from_julian_date(0.0).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime_converts_to_utc() {
        use chrono::{DateTime, FixedOffset, NaiveDate};

        let local = "2025-02-11T12:25:18+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let naive = NaiveDate::from_ymd_opt(2025, 2, 11)
            .unwrap()
            .and_hms_opt(11, 25, 18)
            .unwrap();
        let from_components = JulianDate::from_utc(2025, 2, 11, 11, 25, 18.0).unwrap();

        assert_eq!(JulianDate::from_datetime(&local).unwrap(), from_components);
        assert_eq!(JulianDate::from_naive_utc(&naive).unwrap(), from_components);
    }
}
