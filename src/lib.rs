//! # Sun Calculator
//!
//! Apparent position of the sun (azimuth and altitude) for a timestamp and a point on Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Two closed-form algorithms are provided:
//! - **Meeus** ([`meeus`]): low-precision solar coordinates from Meeus' *Astronomical
//!   Algorithms* with polynomial terms in Julian centuries (about 0.01°)
//! - **`SunCalc`** ([`suncalc`]): a shorter day-count formula with fixed obliquity (a few
//!   tenths of a degree)
//!
//! Both are pure functions: no state, no I/O, safe to call from any number of threads.
//! No atmospheric refraction is applied.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sun_calculator::meeus;
//! use chrono::{TimeZone, Utc};
//!
//! let datetime = Utc.with_ymd_and_hms(2025, 2, 11, 11, 25, 18).unwrap();
//! let position = meeus::solar_position(
//!     datetime,
//!     51.21131496342009,  // Bruges latitude
//!     3.2258847770102235, // Bruges longitude
//! ).unwrap();
//!
//! println!("Azimuth: {:.6} rad", position.azimuth());
//! println!("Altitude: {:.6} rad", position.altitude());
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use sun_calculator::{meeus, time::JulianDate};
//!
//! let jd = JulianDate::from_utc(2025, 2, 11, 11, 25, 18.0).unwrap();
//! let position = meeus::solar_position_from_julian(jd, 51.21131496342009, 3.2258847770102235).unwrap();
//!
//! println!("Altitude: {:.3}°", position.altitude_degrees());
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: radians, 0 = south, +π/2 = west, −π/2 = east, π = north, in (−π, π]
//! - **Altitude**: radians above the horizon, in [−π/2, π/2]
//! - **Latitude / longitude**: degrees, north and east positive
//! - **Time**: UTC; timezone-aware datetimes are converted, calendar components are
//!   interpreted in the proleptic Gregorian calendar

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{EquatorialPosition, SolarPosition};

// Algorithm modules
pub mod meeus;
pub mod suncalc;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_timezone_independence() {
        let datetime_fixed = "2025-02-11T12:25:18+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2025, 2, 11, 11, 25, 18).unwrap();

        let position1 =
            meeus::solar_position(datetime_fixed, 51.21131496342009, 3.2258847770102235).unwrap();
        let position2 =
            meeus::solar_position(datetime_utc, 51.21131496342009, 3.2258847770102235).unwrap();

        assert_eq!(position1, position2);
    }

    #[test]
    fn test_algorithms_agree() {
        let datetime = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let position1 = meeus::solar_position(datetime, 37.7749, -122.4194).unwrap();
        let position2 = suncalc::solar_position(datetime, 37.7749, -122.4194).unwrap();

        assert!((position1.azimuth() - position2.azimuth()).abs() < 0.01);
        assert!((position1.altitude() - position2.altitude()).abs() < 0.01);
    }
}
