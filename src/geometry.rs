//! Solar geometry after Duffie & Beckman.
//!
//! Declination from Spencer's Fourier series, hour angle from true solar time,
//! and the zenith, altitude and azimuth of the sun for an observer latitude.
//! Every [`Instant`] taken here is true solar time; convert clock time with
//! [`standard_to_solar_time`](crate::time::standard_to_solar_time) first.
//!
//! Reference: Duffie, J. A.; Beckman, W. A. (2013). Solar Engineering of Thermal
//! Processes, 4th ed., chapter 1. Wiley.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_day_of_year, check_latitude};
use crate::math::{abs, acos, cos, degrees_to_radians, radians_to_degrees, sin, tan};
use crate::time::Instant;
use crate::types::{PolarCondition, SolarPosition, SunriseResult, SurfaceOrientation};
use crate::vector::Vector3;
use crate::{Error, Result};

/// Latitude used in place of the poles, where the azimuth formula divides by cos φ.
const POLE_LATITUDE: f64 = 89.999;

/// Degrees of hour angle per hour of solar time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Below this, sin θz is treated as zero and the sun as overhead.
const ZENITH_EPSILON: f64 = 1e-6;

/// Solar declination in degrees for a day of the year (Spencer, 1971).
///
/// Stays within about ±23.45°; day 366 repeats day 1.
///
/// # Errors
/// Returns `InvalidDate` if the day is outside 1 to 366.
///
/// # Example
/// ```
/// use solar_radiation::geometry::declination;
///
/// let june_solstice = declination(172).unwrap();
/// assert!((june_solstice - 23.44).abs() < 0.05);
/// ```
pub fn declination(day: u32) -> Result<f64> {
    check_day_of_year(day)?;
    Ok(spencer_declination(day))
}

/// Solar declination in degrees on the date of an instant.
#[must_use]
pub fn declination_at(instant: &Instant) -> f64 {
    spencer_declination(instant.day_of_year())
}

fn spencer_declination(day: u32) -> f64 {
    // day_of_year() of a valid Instant is always within 1..=366
    let b = degrees_to_radians(f64::from(day.clamp(1, 366) - 1) * 360.0 / 365.0);
    let delta = 0.006918 - 0.399912 * cos(b) + 0.070257 * sin(b)
        - 0.006758 * cos(2.0 * b)
        + 0.000907 * sin(2.0 * b)
        - 0.002697 * cos(3.0 * b)
        + 0.00148 * sin(3.0 * b);
    radians_to_degrees(delta)
}

/// Hour angle in degrees: 0° at solar noon, 15° per hour, afternoon positive.
///
/// `instant` must be solar time.
#[must_use]
pub fn hour_angle(instant: &Instant) -> f64 {
    DEGREES_PER_HOUR * (instant.fractional_hour() - 12.0)
}

/// Zenith angle of the sun in degrees (0° to 180°).
///
/// `cos θz = sin φ sin δ + cos φ cos δ cos ω`
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> Result<f64> {
    check_latitude(latitude)?;
    Ok(compute_zenith(latitude, declination, hour_angle))
}

/// Solar altitude (elevation above the horizon) in degrees, `90° - θz`.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> Result<f64> {
    Ok(90.0 - zenith_angle(latitude, declination, hour_angle)?)
}

/// Solar azimuth in degrees: 0° = south, negative toward the east, positive toward the west.
///
/// The sign follows the hour angle, with solar noon counted as afternoon. A sun
/// exactly overhead has azimuth 0°.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
///
/// # Example
/// ```
/// use solar_radiation::geometry::solar_azimuth;
///
/// // latitude 43° N, July 1, 18:30 solar time
/// let azimuth = solar_azimuth(43.0, 23.1, 97.5).unwrap();
/// assert!(azimuth > 110.0 && azimuth < 114.0);
/// ```
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> Result<f64> {
    check_latitude(latitude)?;
    let zenith = compute_zenith(latitude, declination, hour_angle);
    Ok(compute_azimuth(latitude, declination, hour_angle, zenith))
}

/// Calculates the position of the sun for an instant in solar time.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
///
/// # Example
/// ```
/// use solar_radiation::{Instant, geometry::solar_position};
///
/// // Madison, WI (43° N), March 16, 16:00 solar time
/// let instant = Instant::new(2019, 3, 16, 16, 0).unwrap();
/// let position = solar_position(&instant, 43.0).unwrap();
///
/// assert_eq!(position.hour_angle(), 60.0);
/// assert!((position.altitude() - 19.7).abs() < 0.5);
/// assert!((position.azimuth() - 66.8).abs() < 0.5);
/// ```
pub fn solar_position(instant: &Instant, latitude: f64) -> Result<SolarPosition> {
    check_latitude(latitude)?;
    let declination = declination_at(instant);
    let omega = hour_angle(instant);
    let zenith = compute_zenith(latitude, declination, omega);
    let azimuth = compute_azimuth(latitude, declination, omega, zenith);
    log::trace!(
        "solar position at {instant:?}, latitude {latitude}: δ={declination:.4}° ω={omega:.4}° θz={zenith:.4}° γs={azimuth:.4}°"
    );
    Ok(SolarPosition::new(declination, omega, zenith, azimuth))
}

/// Unit vector from the observer toward the sun, in the North-East-Down frame.
///
/// `[-cos γs cos α, -sin γs cos α, -sin α]`
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn solar_vector_ned(latitude: f64, declination: f64, hour_angle: f64) -> Result<Vector3> {
    check_latitude(latitude)?;
    let zenith = compute_zenith(latitude, declination, hour_angle);
    let azimuth = compute_azimuth(latitude, declination, hour_angle, zenith);
    Ok(SolarPosition::new(declination, hour_angle, zenith, azimuth).to_ned())
}

/// Angle of incidence in degrees between the sun and the normal of a surface.
///
/// Above 90° the sun is behind the surface.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
///
/// # Example
/// ```
/// use solar_radiation::{Instant, SurfaceOrientation, geometry::incidence_angle};
///
/// // 45° slope facing 15° west of south at 43° N, February 13, 10:30 solar time
/// let surface = SurfaceOrientation::from_slope_azimuth(45.0, 15.0).unwrap();
/// let instant = Instant::new(2019, 2, 13, 10, 30).unwrap();
/// let theta = incidence_angle(&instant, 43.0, &surface).unwrap();
/// assert!((theta - 35.0).abs() < 0.5);
/// ```
pub fn incidence_angle(
    instant: &Instant,
    latitude: f64,
    orientation: &SurfaceOrientation,
) -> Result<f64> {
    let sun = solar_position(instant, latitude)?.to_ned();
    let cos_theta = orientation.normal().dot(&sun).clamp(-1.0, 1.0);
    Ok(radians_to_degrees(acos(cos_theta)))
}

/// Sunset hour angle ωs in degrees, from `cos ωs = -tan φ tan δ`.
///
/// # Errors
/// Returns `InvalidLatitude` for an out-of-range latitude, or `OutOfDomain` when
/// the sun never sets (perpetual day) or never rises (perpetual night).
///
/// # Example
/// ```
/// use solar_radiation::{PolarCondition, geometry::sunset_hour_angle};
///
/// assert!((sunset_hour_angle(0.0, 23.0).unwrap() - 90.0).abs() < 1e-9);
///
/// let err = sunset_hour_angle(80.0, -23.0).unwrap_err();
/// assert_eq!(err.polar_condition(), Some(PolarCondition::PerpetualNight));
/// ```
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> Result<f64> {
    check_latitude(latitude)?;
    let phi = degrees_to_radians(clamp_pole(latitude));
    let delta = degrees_to_radians(declination);
    let cos_omega = -tan(phi) * tan(delta);

    if cos_omega < -1.0 {
        log::debug!("perpetual day at latitude {latitude}, declination {declination:.3}");
        return Err(Error::out_of_domain(PolarCondition::PerpetualDay));
    }
    if cos_omega > 1.0 {
        log::debug!("perpetual night at latitude {latitude}, declination {declination:.3}");
        return Err(Error::out_of_domain(PolarCondition::PerpetualNight));
    }
    Ok(radians_to_degrees(acos(cos_omega)))
}

/// Sunrise hour angle in degrees, the negation of [`sunset_hour_angle`].
///
/// # Errors
/// Same as [`sunset_hour_angle`].
pub fn sunrise_hour_angle(latitude: f64, declination: f64) -> Result<f64> {
    sunset_hour_angle(latitude, declination).map(|omega| -omega)
}

/// Sunrise, solar noon and sunset on the date of `instant`, all in solar time.
///
/// Polar days and nights are reported as [`SunriseResult::AllDay`] and
/// [`SunriseResult::AllNight`] with transit at 12:00.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
///
/// # Example
/// ```
/// use solar_radiation::{Instant, SunriseResult, geometry::sunrise_sunset};
///
/// let date = Instant::new(2019, 3, 16, 0, 0).unwrap();
/// if let SunriseResult::RegularDay { sunrise, sunset, .. } = sunrise_sunset(&date, 43.0).unwrap() {
///     assert_eq!((sunrise.hour(), sunrise.minute()), (6, 7));
///     assert_eq!((sunset.hour(), sunset.minute()), (17, 52));
/// }
/// ```
pub fn sunrise_sunset(instant: &Instant, latitude: f64) -> Result<SunriseResult<Instant>> {
    let midnight = instant.start_of_day();
    let transit = midnight.add_hours(12.0);

    match sunset_hour_angle(latitude, declination_at(instant)) {
        Ok(omega) => {
            let half_day = omega / DEGREES_PER_HOUR;
            Ok(SunriseResult::RegularDay {
                sunrise: transit.add_hours(-half_day),
                transit,
                sunset: transit.add_hours(half_day),
            })
        }
        Err(Error::OutOfDomain {
            condition: PolarCondition::PerpetualDay,
        }) => Ok(SunriseResult::AllDay { transit }),
        Err(Error::OutOfDomain {
            condition: PolarCondition::PerpetualNight,
        }) => Ok(SunriseResult::AllNight { transit }),
        Err(e) => Err(e),
    }
}

/// Sunrise in solar time on the date of `instant`.
///
/// # Errors
/// Returns `InvalidLatitude` for an out-of-range latitude, or `OutOfDomain` on
/// days without a sunrise.
pub fn sunrise_time(instant: &Instant, latitude: f64) -> Result<Instant> {
    let omega = sunrise_hour_angle(latitude, declination_at(instant))?;
    Ok(instant
        .start_of_day()
        .add_hours(12.0 + omega / DEGREES_PER_HOUR))
}

/// Sunset in solar time on the date of `instant`.
///
/// # Errors
/// Returns `InvalidLatitude` for an out-of-range latitude, or `OutOfDomain` on
/// days without a sunset.
pub fn sunset_time(instant: &Instant, latitude: f64) -> Result<Instant> {
    let omega = sunset_hour_angle(latitude, declination_at(instant))?;
    Ok(instant
        .start_of_day()
        .add_hours(12.0 + omega / DEGREES_PER_HOUR))
}

/// Hours of daylight on the date of `instant`: 24 in polar day, 0 in polar night.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn daylight_hours(instant: &Instant, latitude: f64) -> Result<f64> {
    match sunset_hour_angle(latitude, declination_at(instant)) {
        Ok(omega) => Ok(2.0 * omega / DEGREES_PER_HOUR),
        Err(e) => match e.polar_condition() {
            Some(PolarCondition::PerpetualDay) => Ok(24.0),
            Some(PolarCondition::PerpetualNight) => Ok(0.0),
            None => Err(e),
        },
    }
}

fn clamp_pole(latitude: f64) -> f64 {
    latitude.clamp(-POLE_LATITUDE, POLE_LATITUDE)
}

fn compute_zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let omega = degrees_to_radians(hour_angle);
    let cos_zenith = sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(omega);
    radians_to_degrees(acos(cos_zenith.clamp(-1.0, 1.0)))
}

fn compute_azimuth(latitude: f64, declination: f64, hour_angle: f64, zenith: f64) -> f64 {
    let phi = degrees_to_radians(clamp_pole(latitude));
    let delta = degrees_to_radians(declination);
    let theta_z = degrees_to_radians(zenith);

    let sin_zenith = sin(theta_z);
    if abs(sin_zenith) < ZENITH_EPSILON {
        return 0.0;
    }

    let ratio = (cos(theta_z) * sin(phi) - sin(delta)) / (sin_zenith * cos(phi));
    let magnitude = radians_to_degrees(acos(ratio.clamp(-1.0, 1.0)));
    if hour_angle < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::day_of_year;

    const EPSILON: f64 = 1e-9;

    fn solar(month: u32, day: u32, hour: u32, minute: u32) -> Instant {
        Instant::new(2019, month, day, hour, minute).unwrap()
    }

    #[test]
    fn test_declination_solstices() {
        let june = declination(172).unwrap();
        assert!((june - 23.45).abs() < 0.5, "{june}");
        let december = declination(355).unwrap();
        assert!((december + 23.45).abs() < 0.5, "{december}");

        assert!((declination(day_of_year(6, 20).unwrap()).unwrap() - 23.44).abs() < 0.01);
    }

    #[test]
    fn test_declination_bounded_and_periodic() {
        for day in 1..=366 {
            let d = declination(day).unwrap();
            assert!(d.abs() < 23.46, "day {day}: {d}");
        }
        assert!((declination(1).unwrap() - declination(366).unwrap()).abs() < 1e-9);
        assert!(declination(0).is_err());
        assert!(declination(367).is_err());
    }

    #[test]
    fn test_declination_at_matches_day() {
        let instant = solar(6, 20, 9, 0);
        assert_eq!(declination_at(&instant), declination(171).unwrap());
    }

    #[test]
    fn test_hour_angle() {
        assert_eq!(hour_angle(&solar(1, 1, 12, 0)), 0.0);
        assert_eq!(hour_angle(&solar(1, 1, 9, 30)), -37.5);
        assert_eq!(hour_angle(&solar(1, 1, 18, 30)), 97.5);
        assert_eq!(hour_angle(&solar(1, 1, 0, 0)), -180.0);
    }

    #[test]
    fn test_zenith_and_altitude() {
        // at solar noon the zenith angle is |φ - δ|
        let z = zenith_angle(43.0, 10.0, 0.0).unwrap();
        assert!((z - 33.0).abs() < EPSILON);
        let alt = solar_altitude(43.0, 10.0, 0.0).unwrap();
        assert!((alt - 57.0).abs() < EPSILON);

        assert!(zenith_angle(91.0, 0.0, 0.0).is_err());
        assert!(solar_altitude(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_azimuth_worked_example_morning() {
        // Feb 13, 09:30 solar time, 43° N: θz ≈ 66.5°, γs ≈ -40.0°
        let pos = solar_position(&solar(2, 13, 9, 30), 43.0).unwrap();
        assert!((pos.zenith_angle() - 66.5).abs() < 0.5);
        assert!((pos.azimuth() + 40.0).abs() < 0.5);
    }

    #[test]
    fn test_azimuth_worked_example_evening() {
        // Jul 1, 18:30 solar time, 43° N: θz ≈ 79.6°, γs ≈ 112.1°
        let pos = solar_position(&solar(7, 1, 18, 30), 43.0).unwrap();
        assert!((pos.zenith_angle() - 79.6).abs() < 0.5);
        assert!((pos.azimuth() - 112.1).abs() < 0.5);
    }

    #[test]
    fn test_azimuth_conventions() {
        // noon in the northern hemisphere: due south
        assert!(solar_azimuth(43.0, 0.0, 0.0).unwrap().abs() < 1e-4);
        // noon south of the subsolar point: due north, counted as afternoon
        assert!((solar_azimuth(-23.5, -9.0, 0.0).unwrap() - 180.0).abs() < 1e-4);
        // morning east, afternoon west
        assert!(solar_azimuth(43.0, 0.0, -30.0).unwrap() < 0.0);
        assert!(solar_azimuth(43.0, 0.0, 30.0).unwrap() > 0.0);
        // overhead
        assert_eq!(solar_azimuth(20.0, 20.0, 0.0).unwrap(), 0.0);
        // poles are finite
        assert!(solar_azimuth(90.0, 10.0, 45.0).unwrap().is_finite());
        assert!(solar_azimuth(-90.0, -10.0, -45.0).unwrap().is_finite());
    }

    #[test]
    fn test_sunrise_sunset_symmetry() {
        for (lat, dec) in [(43.0, -2.04), (-33.9, 12.0), (0.0, 23.4), (60.0, 20.0)] {
            let set = sunset_hour_angle(lat, dec).unwrap();
            let rise = sunrise_hour_angle(lat, dec).unwrap();
            assert!((set + rise).abs() < EPSILON);
        }
    }

    #[test]
    fn test_sunrise_sunset_times() {
        let date = solar(3, 16, 8, 45);
        let result = sunrise_sunset(&date, 43.0).unwrap();
        let sunrise = *result.sunrise().unwrap();
        let sunset = *result.sunset().unwrap();

        assert_eq!((sunrise.hour(), sunrise.minute()), (6, 7));
        assert_eq!((sunset.hour(), sunset.minute()), (17, 52));
        assert_eq!(*result.transit(), solar(3, 16, 12, 0));
        assert_eq!(sunrise_time(&date, 43.0).unwrap(), sunrise);
        assert_eq!(sunset_time(&date, 43.0).unwrap(), sunset);

        // solar noon sits midway between sunrise and sunset
        let before = 12.0 - sunrise.fractional_hour();
        let after = sunset.fractional_hour() - 12.0;
        assert!((before - after).abs() < 1e-6);
    }

    #[test]
    fn test_polar_conditions() {
        let winter = solar(1, 1, 12, 0);
        let err = sunset_hour_angle(80.0, declination_at(&winter)).unwrap_err();
        assert_eq!(err.polar_condition(), Some(PolarCondition::PerpetualNight));
        assert!(sunrise_time(&winter, 80.0).is_err());
        assert!(sunrise_sunset(&winter, 80.0).unwrap().is_polar_night());
        assert!(sunrise_sunset(&winter, -80.0).unwrap().is_polar_day());

        let err = sunset_time(&winter, -80.0).unwrap_err();
        assert_eq!(err.polar_condition(), Some(PolarCondition::PerpetualDay));

        // invalid latitude is not a polar condition
        assert!(matches!(
            sunrise_sunset(&winter, 95.0),
            Err(Error::InvalidLatitude { .. })
        ));
    }

    #[test]
    fn test_daylight_hours() {
        assert_eq!(daylight_hours(&solar(1, 1, 0, 0), 82.0).unwrap(), 0.0);
        assert_eq!(daylight_hours(&solar(1, 1, 0, 0), -80.0).unwrap(), 24.0);
        assert_eq!(daylight_hours(&solar(8, 1, 0, 0), 78.0).unwrap(), 24.0);
        assert!((daylight_hours(&solar(4, 10, 0, 0), 0.0).unwrap() - 12.0).abs() < 1e-9);

        let june = daylight_hours(&solar(6, 21, 0, 0), 43.0).unwrap();
        let december = daylight_hours(&solar(12, 21, 0, 0), 43.0).unwrap();
        assert!(june > 15.0 && december < 9.5);
        assert!((june + december - 24.0).abs() < 0.2);
    }

    #[test]
    fn test_solar_vector_is_unit() {
        for omega in [-120.0, -45.0, 0.0, 30.0, 97.5] {
            let v = solar_vector_ned(43.0, -12.0, omega).unwrap();
            assert!((v.norm() - 1.0).abs() < 1e-12);
        }
        // noon: sun due south and up, so north and down components are negative
        let v = solar_vector_ned(43.0, 0.0, 0.0).unwrap();
        assert!(v[0] < 0.0 && v[2] < 0.0 && v[1].abs() < 1e-9);
    }

    #[test]
    fn test_incidence_angle() {
        // Feb 13, 10:30 solar time, 43° N, β = 45°, γ = 15°: θ ≈ 35°
        let surface = SurfaceOrientation::from_slope_azimuth(45.0, 15.0).unwrap();
        let theta = incidence_angle(&solar(2, 13, 10, 30), 43.0, &surface).unwrap();
        assert!((theta - 35.0).abs() < 0.5, "{theta}");

        // horizontal surface: incidence equals zenith
        let instant = solar(5, 5, 14, 0);
        let zenith = solar_position(&instant, 30.0).unwrap().zenith_angle();
        let theta = incidence_angle(&instant, 30.0, &SurfaceOrientation::zenith()).unwrap();
        assert!((theta - zenith).abs() < 1e-6);
    }
}
