//! Error types for the solar radiation model.

use crate::types::PolarCondition;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur in solar geometry and irradiance calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Impossible calendar date or time of day.
    InvalidDate {
        /// Description of the calendar constraint violation.
        message: &'static str,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid altitude above sea level (must be between 0 and 24 000 meters).
    InvalidAltitude {
        /// The invalid altitude value provided.
        value: f64,
    },
    /// Surface orientation that cannot be normalized to a unit vector.
    InvalidOrientation {
        /// Description of the orientation problem.
        message: &'static str,
    },
    /// Invalid panel surface area (must be positive).
    InvalidArea {
        /// The invalid area value provided.
        value: f64,
    },
    /// Invalid panel conversion efficiency (must be between 0 and 1).
    InvalidEfficiency {
        /// The invalid efficiency value provided.
        value: f64,
    },
    /// Invalid atmospheric extinction coefficient (must be finite and non-negative).
    InvalidExtinction {
        /// The invalid coefficient provided.
        value: f64,
    },
    /// The sun does not cross the horizon on this day at this latitude.
    OutOfDomain {
        /// Whether the sun stays up or stays down.
        condition: PolarCondition,
    },
    /// A solar panel was queried before all of its state was set.
    PanelNotConfigured {
        /// Name of the missing piece of state.
        field: &'static str,
    },
}

/// Broad classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Impossible month/day or time-of-day.
    InvalidCalendarInput,
    /// Latitude, longitude, altitude or orientation out of physical range.
    InvalidGeometryInput,
    /// Polar day or polar night: no sunrise/sunset exists.
    OutOfDomain,
    /// Model or panel parameters out of range, or missing panel state.
    InvalidConfiguration,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { message } => write!(f, "invalid date/time: {message}"),
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
            Self::InvalidAltitude { value } => {
                write!(
                    f,
                    "invalid altitude {value} m (must be between 0 m and 24000 m)"
                )
            }
            Self::InvalidOrientation { message } => {
                write!(f, "invalid surface orientation: {message}")
            }
            Self::InvalidArea { value } => {
                write!(f, "invalid surface area {value} m² (must be positive)")
            }
            Self::InvalidEfficiency { value } => {
                write!(f, "invalid efficiency {value} (must be between 0 and 1)")
            }
            Self::InvalidExtinction { value } => {
                write!(
                    f,
                    "invalid extinction coefficient {value} (must be finite and non-negative)"
                )
            }
            Self::OutOfDomain { condition } => {
                write!(f, "no sunrise or sunset: {condition}")
            }
            Self::PanelNotConfigured { field } => {
                write!(f, "solar panel {field} has not been set")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

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

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Creates an invalid orientation error.
    #[must_use]
    pub const fn invalid_orientation(message: &'static str) -> Self {
        Self::InvalidOrientation { message }
    }

    /// Creates an invalid area error.
    #[must_use]
    pub const fn invalid_area(value: f64) -> Self {
        Self::InvalidArea { value }
    }

    /// Creates an invalid efficiency error.
    #[must_use]
    pub const fn invalid_efficiency(value: f64) -> Self {
        Self::InvalidEfficiency { value }
    }

    /// Creates an invalid extinction coefficient error.
    #[must_use]
    pub const fn invalid_extinction(value: f64) -> Self {
        Self::InvalidExtinction { value }
    }

    /// Creates a polar day/night error.
    #[must_use]
    pub const fn out_of_domain(condition: PolarCondition) -> Self {
        Self::OutOfDomain { condition }
    }

    /// Creates a missing panel state error.
    #[must_use]
    pub const fn panel_not_configured(field: &'static str) -> Self {
        Self::PanelNotConfigured { field }
    }

    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate { .. } => ErrorKind::InvalidCalendarInput,
            Self::InvalidLatitude { .. }
            | Self::InvalidLongitude { .. }
            | Self::InvalidAltitude { .. }
            | Self::InvalidOrientation { .. } => ErrorKind::InvalidGeometryInput,
            Self::OutOfDomain { .. } => ErrorKind::OutOfDomain,
            Self::InvalidArea { .. }
            | Self::InvalidEfficiency { .. }
            | Self::InvalidExtinction { .. }
            | Self::PanelNotConfigured { .. } => ErrorKind::InvalidConfiguration,
        }
    }

    /// Returns the polar condition if this is an [`Error::OutOfDomain`].
    #[must_use]
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        if let Self::OutOfDomain { condition } = self {
            Some(*condition)
        } else {
            None
        }
    }
}

/// Highest site altitude covered by the standard atmosphere table, in meters.
pub const MAX_ALTITUDE: f64 = 24_000.0;

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates a site altitude is within the range of the pressure model.
///
/// # Errors
/// Returns `InvalidAltitude` if altitude is outside 0 to 24 000 meters.
pub fn check_altitude(altitude: f64) -> Result<()> {
    if !(0.0..=MAX_ALTITUDE).contains(&altitude) {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(())
}

/// Validates a day-of-year ordinal (1 to 366).
///
/// # Errors
/// Returns `InvalidDate` if the day is outside 1 to 366.
pub fn check_day_of_year(day: u32) -> Result<()> {
    if !(1..=366).contains(&day) {
        return Err(Error::invalid_date("day of year must be between 1 and 366"));
    }
    Ok(())
}

/// Validates a conversion efficiency fraction.
///
/// # Errors
/// Returns `InvalidEfficiency` if efficiency is outside 0 to 1.
pub fn check_efficiency(efficiency: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&efficiency) {
        return Err(Error::invalid_efficiency(efficiency));
    }
    Ok(())
}

/// Validates a surface area.
///
/// # Errors
/// Returns `InvalidArea` if area is not a positive finite number.
pub fn check_area(area: f64) -> Result<()> {
    if !area.is_finite() || area <= 0.0 {
        return Err(Error::invalid_area(area));
    }
    Ok(())
}
