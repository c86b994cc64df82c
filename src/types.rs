//! Core data types for solar geometry and irradiance calculations.

use core::fmt;

use crate::error::{check_altitude, check_latitude, check_longitude};
use crate::math::{cos, degrees_to_radians, sin};
use crate::vector::Vector3;
use crate::{Error, Result};

/// Geographic position of an observer or a panel.
///
/// # Example
/// ```
/// # use solar_radiation::GeoPosition;
/// let new_york = GeoPosition::new(40.73, -73.93, 10.0).unwrap();
/// assert_eq!(new_york.latitude(), 40.73);
/// assert!(GeoPosition::new(91.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude in degrees, north positive
    latitude: f64,
    /// Longitude in degrees, east positive
    longitude: f64,
    /// Altitude above sea level in meters
    altitude: f64,
}

impl GeoPosition {
    /// Creates a validated geographic position.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidAltitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        check_altitude(altitude)?;
        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    /// Gets the latitude in degrees (-90° to +90°).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180° to +180°, east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the altitude above sea level in meters.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }
}

/// Outward unit normal of a plane, in the local North-East-Down frame.
///
/// # Example
/// ```
/// # use solar_radiation::SurfaceOrientation;
/// // a horizontal panel facing the sky
/// let flat = SurfaceOrientation::new(0.0, 0.0, -2.0).unwrap();
/// assert_eq!(flat, SurfaceOrientation::zenith());
///
/// // a vertical wall facing south
/// let wall = SurfaceOrientation::from_slope_azimuth(90.0, 0.0).unwrap();
/// assert!((wall.normal()[0] + 1.0).abs() < 1e-12);
///
/// assert!(SurfaceOrientation::new(0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOrientation(Vector3);

impl SurfaceOrientation {
    /// Creates an orientation from NED components, normalizing them.
    ///
    /// # Errors
    /// Returns `InvalidOrientation` for a zero-length or non-finite vector.
    pub fn new(north: f64, east: f64, down: f64) -> Result<Self> {
        Self::from_vector(Vector3::new(north, east, down))
    }

    /// Creates an orientation from an NED vector, normalizing it.
    ///
    /// # Errors
    /// Returns `InvalidOrientation` for a zero-length or non-finite vector.
    pub fn from_vector(normal: Vector3) -> Result<Self> {
        normal.normalized().map(Self)
    }

    /// Creates an orientation from a slope and a surface azimuth.
    ///
    /// * `slope` - angle between the plane and the horizontal, 0° to 180° (> 90° faces down)
    /// * `azimuth` - direction the plane faces, -180° to 180°: 0° = south, east negative, west positive
    ///
    /// # Errors
    /// Returns `InvalidOrientation` if slope or azimuth is out of range.
    pub fn from_slope_azimuth(slope: f64, azimuth: f64) -> Result<Self> {
        if !(0.0..=180.0).contains(&slope) {
            return Err(Error::invalid_orientation(
                "slope must be between 0° and 180°",
            ));
        }
        if !(-180.0..=180.0).contains(&azimuth) {
            return Err(Error::invalid_orientation(
                "surface azimuth must be between -180° and 180°",
            ));
        }
        let beta = degrees_to_radians(slope);
        let gamma = degrees_to_radians(azimuth);
        Ok(Self(Vector3::new(
            -cos(gamma) * sin(beta),
            -sin(gamma) * sin(beta),
            -cos(beta),
        )))
    }

    /// A horizontal plane facing the sky.
    #[must_use]
    pub const fn zenith() -> Self {
        Self(Vector3::new(0.0, 0.0, -1.0))
    }

    /// A horizontal plane facing the ground.
    #[must_use]
    pub const fn nadir() -> Self {
        Self(Vector3::new(0.0, 0.0, 1.0))
    }

    /// Gets the unit normal (North, East, Down).
    #[must_use]
    pub const fn normal(&self) -> Vector3 {
        self.0
    }
}

/// Sun position seen from a point on Earth at a given solar time.
///
/// Angles are in degrees. Azimuth follows the solar-engineering convention:
/// 0° = south, negative toward the east (morning), positive toward the west (afternoon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Solar declination
    declination: f64,
    /// Hour angle, negative before solar noon
    hour_angle: f64,
    /// Zenith angle (0° = overhead, 90° = horizon)
    zenith_angle: f64,
    /// Azimuth angle (0° = south, west positive)
    azimuth: f64,
}

impl SolarPosition {
    pub(crate) const fn new(
        declination: f64,
        hour_angle: f64,
        zenith_angle: f64,
        azimuth: f64,
    ) -> Self {
        Self {
            declination,
            hour_angle,
            zenith_angle,
            azimuth,
        }
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the hour angle in degrees (negative before solar noon).
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Gets the zenith angle in degrees (0° to 180°).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the solar altitude (elevation above the horizon) in degrees.
    #[must_use]
    pub fn altitude(&self) -> f64 {
        90.0 - self.zenith_angle
    }

    /// Gets the azimuth in degrees (0° = south, east negative, west positive).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Checks if the sun is above the horizon (altitude > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude() > 0.0
    }

    /// Unit vector toward the sun in the North-East-Down frame.
    #[must_use]
    pub fn to_ned(&self) -> Vector3 {
        let alpha = degrees_to_radians(self.altitude());
        let gamma = degrees_to_radians(self.azimuth);
        Vector3::new(
            -cos(gamma) * cos(alpha),
            -sin(gamma) * cos(alpha),
            -sin(alpha),
        )
    }
}

/// Why a day has no sunrise or sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays above the horizon for the whole day.
    PerpetualDay,
    /// The sun stays below the horizon for the whole day.
    PerpetualNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerpetualDay => f.write_str("perpetual day"),
            Self::PerpetualNight => f.write_str("perpetual night"),
        }
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// At high latitudes near the solstices the sun may never cross the horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T = ()> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Gets the polar condition, if the sun does not cross the horizon.
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            Self::RegularDay { .. } => None,
            Self::AllDay { .. } => Some(PolarCondition::PerpetualDay),
            Self::AllNight { .. } => Some(PolarCondition::PerpetualNight),
        }
    }
}
