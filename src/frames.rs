//! Earth-centred reference frames.
//!
//! Converts geodetic positions and local North-East-Down vectors into the
//! Earth-Centred Earth-Fixed (ECEF) frame of the WGS-84 ellipsoid.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_latitude, check_longitude};
use crate::math::{cos, degrees_to_radians, sin, sqrt};
use crate::types::GeoPosition;
use crate::vector::Vector3;
use crate::Result;

/// WGS-84 semi-major axis (equatorial radius) in meters
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS-84 semi-minor axis (polar radius) in meters
pub const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.3142;

/// WGS-84 first eccentricity
const WGS84_ECCENTRICITY: f64 = 0.081819190842622;

/// ECEF coordinates in meters of a geodetic position.
///
/// # Example
/// ```
/// use solar_radiation::{GeoPosition, frames::lla_to_ecef};
///
/// let greenwich = GeoPosition::new(0.0, 0.0, 0.0).unwrap();
/// assert_eq!(lla_to_ecef(&greenwich).to_array(), [6_378_137.0, 0.0, 0.0]);
/// ```
#[must_use]
pub fn lla_to_ecef(position: &GeoPosition) -> Vector3 {
    let phi = degrees_to_radians(position.latitude());
    let lambda = degrees_to_radians(position.longitude());
    let h = position.altitude();

    let e_sin_phi = WGS84_ECCENTRICITY * sin(phi);
    // prime vertical radius of curvature
    let n = WGS84_SEMI_MAJOR_AXIS / sqrt(1.0 - e_sin_phi * e_sin_phi);
    let axis_ratio = WGS84_SEMI_MINOR_AXIS / WGS84_SEMI_MAJOR_AXIS;

    Vector3::new(
        (n + h) * cos(phi) * cos(lambda),
        (n + h) * cos(phi) * sin(lambda),
        (axis_ratio * axis_ratio * n + h) * sin(phi),
    )
}

/// Rotates a vector from the local North-East-Down frame at a latitude and
/// longitude into ECEF axes.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn ned_to_ecef(v: Vector3, latitude: f64, longitude: f64) -> Result<Vector3> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;

    let (sin_phi, cos_phi) = (sin(degrees_to_radians(latitude)), cos(degrees_to_radians(latitude)));
    let (sin_lambda, cos_lambda) = (
        sin(degrees_to_radians(longitude)),
        cos(degrees_to_radians(longitude)),
    );

    // columns are the local north, east and down axes in ECEF
    let north = Vector3::new(-sin_phi * cos_lambda, -sin_phi * sin_lambda, cos_phi);
    let east = Vector3::new(-sin_lambda, cos_lambda, 0.0);
    let down = Vector3::new(-cos_phi * cos_lambda, -cos_phi * sin_lambda, -sin_phi);

    Ok(north * v[0] + east * v[1] + down * v[2])
}
