//! Error types for the sun calculator.

use crate::math::{PI, normalize_radians_pm_pi};
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during sun position calculations.
///
/// Every variant describes rejected input; the calculations themselves cannot fail
/// once their arguments have been validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be finite and between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be finite and between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Calendar date/time that cannot be represented.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Non-finite azimuth angle.
    InvalidAzimuth {
        /// The invalid azimuth value provided, in radians.
        value: f64,
    },
    /// Altitude angle that is not finite or lies outside -π/2 to +π/2.
    InvalidAltitude {
        /// The invalid altitude value provided, in radians.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidAzimuth { value } => {
                write!(f, "invalid azimuth {value} rad (must be finite)")
            }
            Self::InvalidAltitude { value } => {
                write!(
                    f,
                    "invalid altitude {value} rad (must be between -π/2 and +π/2)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid azimuth error.
    #[must_use]
    pub const fn invalid_azimuth(value: f64) -> Self {
        Self::InvalidAzimuth { value }
    }

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Whether this error reports rejected input.
    ///
    /// Always true: invalid input is the only way a calculation can fail.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidLatitude { .. }
            | Self::InvalidLongitude { .. }
            | Self::InvalidDateTime { .. }
            | Self::InvalidAzimuth { .. }
            | Self::InvalidAltitude { .. } => true,
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range (-π, π] radians.
///
/// # Errors
/// Returns `InvalidAzimuth` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::invalid_azimuth(azimuth));
    }
    let normalized = normalize_radians_pm_pi(azimuth);
    // [-π, π) to (-π, π]
    if normalized <= -PI {
        Ok(PI)
    } else {
        Ok(normalized)
    }
}

/// Validates an altitude angle to be within the range [-π/2, π/2] radians.
///
/// # Errors
/// Returns `InvalidAltitude` if altitude is not finite or outside the valid range.
pub fn check_altitude(altitude: f64) -> Result<f64> {
    if !(-PI / 2.0..=PI / 2.0).contains(&altitude) {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(altitude)
}
