//! Core data types for sun position calculations.

use crate::error::{check_altitude, check_azimuth};
use crate::math::{PI, normalize_degrees_0_to_360, radians_to_degrees};
use crate::Result;

/// Sun position in horizontal coordinates, as seen by an observer on the ground.
///
/// Both angles are in radians:
/// - Azimuth: 0 = south, +π/2 = west, −π/2 = east, π = north, in the range (−π, π]
/// - Altitude: 0 = horizon, positive above it, negative below it, in the range [−π/2, π/2]
///
/// No atmospheric refraction is applied; the altitude is geometric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    azimuth: f64,
    altitude: f64,
}

impl SolarPosition {
    /// Creates a new solar position from azimuth and altitude in radians.
    ///
    /// The azimuth is normalized into (−π, π].
    ///
    /// # Errors
    /// Returns `InvalidAzimuth` for a non-finite azimuth and `InvalidAltitude` for an
    /// altitude outside [−π/2, π/2].
    ///
    /// # Example
    /// ```
    /// # use sun_calculator::types::SolarPosition;
    /// use std::f64::consts::PI;
    ///
    /// let position = SolarPosition::new(-PI, PI / 6.0).unwrap();
    /// assert_eq!(position.azimuth(), PI); // due north
    /// assert!((position.altitude_degrees() - 30.0).abs() < 1e-12);
    /// ```
    pub fn new(azimuth: f64, altitude: f64) -> Result<Self> {
        let normalized_azimuth = check_azimuth(azimuth)?;
        let validated_altitude = check_altitude(altitude)?;

        Ok(Self {
            azimuth: normalized_azimuth,
            altitude: validated_altitude,
        })
    }

    /// Gets the azimuth in radians (0 = south, +π/2 = west, −π/2 = east, π = north).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth in degrees, same south-based convention as [`Self::azimuth`].
    #[must_use]
    pub const fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Gets the altitude in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Gets the zenith angle in radians (0 = overhead, π/2 = horizon).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        PI / 2.0 - self.altitude
    }

    /// Gets the azimuth as a compass bearing in degrees: 0° = north, 90° = east,
    /// increasing clockwise to 360°.
    ///
    /// # Example
    /// ```
    /// # use sun_calculator::types::SolarPosition;
    /// use std::f64::consts::PI;
    ///
    /// let west = SolarPosition::new(PI / 2.0, 0.1).unwrap();
    /// assert!((west.compass_azimuth_degrees() - 270.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn compass_azimuth_degrees(&self) -> f64 {
        normalize_degrees_0_to_360(self.azimuth_degrees() + 180.0)
    }

    /// Checks if the sun is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }

    /// Checks if the sun is at or below the horizon (altitude ≤ 0).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.altitude <= 0.0
    }
}

/// Geocentric equatorial coordinates of the sun, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension, 0 to 2π
    pub right_ascension: f64,
    /// Declination, −π/2 to +π/2
    pub declination: f64,
}
