//! Clear-sky beam radiation model.
//!
//! Extraterrestrial radiation on a plane normal to the sun is attenuated along
//! the slant path through the atmosphere:
//!
//! `G = G_on · exp(-k · (p(h) / p₀) · m)`
//!
//! where `k` is the extinction coefficient, `p(h)` the standard-atmosphere
//! pressure at the site altitude and `m` the relative air mass. The default air
//! mass also shrinks with site altitude (Aglietti et al., 2009, "Harnessing
//! High-Altitude Solar Power"), so elevated sites gain twice. The result is
//! projected onto a surface by the cosine of the angle of incidence.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_altitude, check_day_of_year, check_latitude};
use crate::geometry::solar_position;
use crate::math::{cos, degrees_to_radians, exp, interpolate, powf, sin};
use crate::time::{Instant, day_angle, standard_to_solar_time};
use crate::types::SurfaceOrientation;
use crate::{Error, Result};

/// Solar constant in W/m²
pub const SOLAR_CONSTANT: f64 = 1367.0;

/// Solar altitude in degrees below which the plane-parallel air mass is undefined.
pub const MIN_PLANE_PARALLEL_ALTITUDE: f64 = 5.0;

/// Default atmospheric extinction coefficient for a clear sky.
pub const STANDARD_EXTINCTION: f64 = 0.32;

/// Kasten & Young air mass stays finite up to this zenith angle.
const KASTEN_YOUNG_MAX_ZENITH: f64 = 91.5;

/// Inverse atmospheric scale height in 1/m (about 8.4 km).
const AIR_MASS_ALTITUDE_DECAY: f64 = 0.0001184;

/// Altitudes of the standard-atmosphere table, in meters.
const ISA_ALTITUDES: [f64; 23] = [
    0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0, 9000.0, 10000.0,
    11000.0, 12000.0, 13000.0, 14000.0, 15000.0, 16000.0, 17000.0, 18000.0, 19000.0, 20000.0,
    22000.0, 24000.0,
];

/// Standard-day pressures matching [`ISA_ALTITUDES`], in pascals.
const ISA_PRESSURES: [f64; 23] = [
    101325.0, 89876.0, 79501.0, 70121.0, 61660.0, 54048.0, 47217.0, 41105.0, 35651.0, 30800.0,
    26499.0, 22699.0, 19399.0, 16579.0, 14170.0, 12111.0, 10352.0, 8849.0, 7565.0, 6467.0,
    5529.0, 4047.0, 2972.0,
];

/// Extraterrestrial radiation on a plane normal to the sun, in W/m².
///
/// `G_on = 1367 · (1 + 0.033 cos(360° n / 365))`
///
/// # Errors
/// Returns `InvalidDate` if the day is outside 1 to 366.
///
/// # Example
/// ```
/// use solar_radiation::radiation::extraterrestrial_radiation;
///
/// // perihelion in early January, aphelion in early July
/// assert!(extraterrestrial_radiation(3).unwrap() > 1400.0);
/// assert!(extraterrestrial_radiation(185).unwrap() < 1325.0);
/// ```
pub fn extraterrestrial_radiation(day: u32) -> Result<f64> {
    check_day_of_year(day)?;
    let x = degrees_to_radians(360.0 * f64::from(day) / 365.0);
    Ok(SOLAR_CONSTANT * (1.0 + 0.033 * cos(x)))
}

/// Extraterrestrial radiation in W/m² from Spencer's eccentricity series.
///
/// # Errors
/// Returns `InvalidDate` if the day is outside 1 to 366.
pub fn extraterrestrial_radiation_spencer(day: u32) -> Result<f64> {
    let b = degrees_to_radians(day_angle(day)?);
    Ok(SOLAR_CONSTANT
        * (1.00011 + 0.034221 * cos(b) + 0.00128 * sin(b) + 0.000719 * cos(2.0 * b)
            + 0.000077 * sin(2.0 * b)))
}

/// Earth-sun distance correction used for extraterrestrial radiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Eccentricity {
    /// Single cosine term, see [`extraterrestrial_radiation`].
    Simple,
    /// Spencer (1971) Fourier series, see [`extraterrestrial_radiation_spencer`].
    #[default]
    Spencer,
}

impl Eccentricity {
    /// Extraterrestrial normal radiation in W/m² for a day of the year.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the day is outside 1 to 366.
    pub fn extraterrestrial_radiation(self, day: u32) -> Result<f64> {
        match self {
            Self::Simple => extraterrestrial_radiation(day),
            Self::Spencer => extraterrestrial_radiation_spencer(day),
        }
    }
}

/// Plane-parallel relative air mass `1 / sin α` for a solar altitude in degrees.
///
/// Returns `None` below [`MIN_PLANE_PARALLEL_ALTITUDE`], where a flat atmosphere
/// grossly overestimates the path length.
///
/// # Example
/// ```
/// use solar_radiation::radiation::air_mass;
///
/// assert_eq!(air_mass(90.0), Some(1.0));
/// assert!((air_mass(30.0).unwrap() - 2.0).abs() < 1e-12);
/// assert_eq!(air_mass(3.0), None);
/// ```
#[must_use]
pub fn air_mass(altitude: f64) -> Option<f64> {
    if altitude.is_nan() || altitude < MIN_PLANE_PARALLEL_ALTITUDE {
        return None;
    }
    Some(1.0 / sin(degrees_to_radians(altitude)))
}

/// Relative air mass after Kasten & Young (1989) for a zenith angle in degrees.
///
/// Zenith angles beyond 91.5° are clamped there.
#[must_use]
pub fn air_mass_kasten_young(zenith: f64) -> f64 {
    let zenith = zenith.min(KASTEN_YOUNG_MAX_ZENITH);
    1.0 / (cos(degrees_to_radians(zenith)) + 0.50572 * powf(96.07995 - zenith, -1.6364))
}

/// Kasten & Young air mass reduced for the site altitude.
///
/// `m = exp(-0.0001184 h) / (cos θz + 0.50572 (96.07995° - θz)^-1.634)`
///
/// This is the form used by Aglietti et al. (2009) for high-altitude platforms,
/// with their 1.634 exponent. Zenith angles beyond 91.5° are clamped there.
///
/// # Errors
/// Returns `InvalidAltitude` if altitude is outside 0 to 24 000 meters.
///
/// # Example
/// ```
/// use solar_radiation::radiation::air_mass_kasten_young_scaled;
///
/// let sea = air_mass_kasten_young_scaled(60.0, 0.0).unwrap();
/// let mountain = air_mass_kasten_young_scaled(60.0, 2000.0).unwrap();
/// assert!((mountain / sea - (-0.2368f64).exp()).abs() < 1e-12);
/// ```
pub fn air_mass_kasten_young_scaled(zenith: f64, site_altitude: f64) -> Result<f64> {
    check_altitude(site_altitude)?;
    Ok(scaled_kasten_young(zenith, site_altitude))
}

fn scaled_kasten_young(zenith: f64, site_altitude: f64) -> f64 {
    let zenith = zenith.min(KASTEN_YOUNG_MAX_ZENITH);
    exp(-AIR_MASS_ALTITUDE_DECAY * site_altitude)
        / (cos(degrees_to_radians(zenith)) + 0.50572 * powf(96.07995 - zenith, -1.634))
}

/// Relative air mass after Young (1994) for a zenith angle in degrees (0° to 90°).
#[must_use]
pub fn air_mass_young(zenith: f64) -> f64 {
    let c = cos(degrees_to_radians(zenith.clamp(0.0, 90.0)));
    let c2 = c * c;
    (1.002432 * c2 + 0.148386 * c + 0.0096467)
        / (c2 * c + 0.149864 * c2 + 0.0102963 * c + 0.000303978)
}

/// Air mass formula applied by the beam model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AirMassModel {
    /// `1 / cos θz`, cut off below 5° solar altitude.
    PlaneParallel,
    /// Kasten & Young (1989), usable down to the horizon.
    KastenYoung1989,
    /// Kasten & Young scaled by site altitude, see [`air_mass_kasten_young_scaled`].
    #[default]
    KastenYoungScaled,
    /// Young (1994), usable down to the horizon.
    Young1994,
}

impl AirMassModel {
    /// Relative air mass for a zenith angle in degrees, or `None` where the model is undefined.
    ///
    /// `site_altitude` (meters) is only used by [`AirMassModel::KastenYoungScaled`]
    /// and is expected to be validated already.
    #[must_use]
    pub fn air_mass(self, zenith: f64, site_altitude: f64) -> Option<f64> {
        match self {
            Self::PlaneParallel => air_mass(90.0 - zenith),
            Self::KastenYoung1989 => Some(air_mass_kasten_young(zenith)),
            Self::KastenYoungScaled => Some(scaled_kasten_young(zenith, site_altitude)),
            Self::Young1994 => Some(air_mass_young(zenith)),
        }
    }
}

/// Standard-day atmospheric pressure in pascals at an altitude in meters.
///
/// Linear interpolation in the International Standard Atmosphere table.
///
/// # Errors
/// Returns `InvalidAltitude` if altitude is outside 0 to 24 000 meters.
///
/// # Example
/// ```
/// use solar_radiation::radiation::pressure;
///
/// assert_eq!(pressure(0.0).unwrap(), 101_325.0);
/// assert_eq!(pressure(500.0).unwrap(), 95_600.5);
/// assert!(pressure(30_000.0).is_err());
/// ```
pub fn pressure(altitude: f64) -> Result<f64> {
    check_altitude(altitude)?;
    Ok(interpolate(&ISA_ALTITUDES, &ISA_PRESSURES, altitude))
}

/// Clear-sky atmosphere parameters for the beam model.
///
/// # Example
/// ```
/// use solar_radiation::{AirMassModel, Atmosphere, Eccentricity};
///
/// let standard = Atmosphere::standard();
/// assert_eq!(standard.extinction(), 0.32);
/// assert_eq!(standard.air_mass_model(), AirMassModel::KastenYoungScaled);
///
/// let hazy = Atmosphere::new(0.45, AirMassModel::PlaneParallel, Eccentricity::Simple).unwrap();
/// assert_eq!(hazy.extinction(), 0.45);
/// assert!(Atmosphere::new(-0.1, AirMassModel::Young1994, Eccentricity::Spencer).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Extinction coefficient k (per unit air mass at sea-level pressure)
    extinction: f64,
    air_mass_model: AirMassModel,
    eccentricity: Eccentricity,
}

impl Atmosphere {
    /// Creates an atmosphere with the given parameters.
    ///
    /// # Errors
    /// Returns `InvalidExtinction` if the extinction coefficient is negative or not finite.
    pub fn new(
        extinction: f64,
        air_mass_model: AirMassModel,
        eccentricity: Eccentricity,
    ) -> Result<Self> {
        check_extinction(extinction)?;
        Ok(Self {
            extinction,
            air_mass_model,
            eccentricity,
        })
    }

    /// Standard clear sky: k = 0.32, altitude-scaled Kasten & Young air mass, Spencer eccentricity.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            extinction: STANDARD_EXTINCTION,
            air_mass_model: AirMassModel::KastenYoungScaled,
            eccentricity: Eccentricity::Spencer,
        }
    }

    /// Gets the extinction coefficient.
    #[must_use]
    pub const fn extinction(&self) -> f64 {
        self.extinction
    }

    /// Gets the air mass model.
    #[must_use]
    pub const fn air_mass_model(&self) -> AirMassModel {
        self.air_mass_model
    }

    /// Gets the eccentricity correction.
    #[must_use]
    pub const fn eccentricity(&self) -> Eccentricity {
        self.eccentricity
    }

    /// Returns a copy with a different extinction coefficient.
    ///
    /// # Errors
    /// Returns `InvalidExtinction` if the coefficient is negative or not finite.
    pub fn with_extinction(self, extinction: f64) -> Result<Self> {
        check_extinction(extinction)?;
        Ok(Self { extinction, ..self })
    }

    /// Returns a copy with a different air mass model.
    #[must_use]
    pub const fn with_air_mass_model(self, air_mass_model: AirMassModel) -> Self {
        Self {
            air_mass_model,
            ..self
        }
    }

    /// Returns a copy with a different eccentricity correction.
    #[must_use]
    pub const fn with_eccentricity(self, eccentricity: Eccentricity) -> Self {
        Self {
            eccentricity,
            ..self
        }
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_extinction(extinction: f64) -> Result<()> {
    if !extinction.is_finite() || extinction < 0.0 {
        return Err(Error::invalid_extinction(extinction));
    }
    Ok(())
}

/// Direct beam irradiance in W/m² on a plane normal to the sun.
///
/// * `extraterrestrial` - extraterrestrial normal radiation `G_on` in W/m²
/// * `air_mass` - relative air mass
/// * `site_altitude` - altitude above sea level in meters (0 to 24 000)
/// * `extinction` - extinction coefficient `k`
///
/// # Errors
/// Returns `InvalidAltitude` or `InvalidExtinction` for out-of-range inputs.
pub fn direct_beam_irradiance(
    extraterrestrial: f64,
    air_mass: f64,
    site_altitude: f64,
    extinction: f64,
) -> Result<f64> {
    check_extinction(extinction)?;
    let relative_pressure = pressure(site_altitude)? / ISA_PRESSURES[0];
    Ok(extraterrestrial * exp(-extinction * relative_pressure * air_mass))
}

/// Clear-sky beam irradiance in W/m² on a plane normal to the sun.
///
/// `instant` is solar time. Returns 0 when the sun is at or below the horizon,
/// or when the air mass model is undefined at the current solar altitude.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidAltitude` for out-of-range inputs.
pub fn beam_irradiance(
    instant: &Instant,
    latitude: f64,
    site_altitude: f64,
    atmosphere: &Atmosphere,
) -> Result<f64> {
    check_altitude(site_altitude)?;
    let position = solar_position(instant, latitude)?;
    if !position.is_sun_up() {
        log::debug!(
            "sun below horizon at {instant:?} (altitude {:.3}°)",
            position.altitude()
        );
        return Ok(0.0);
    }

    let Some(air_mass) = atmosphere
        .air_mass_model()
        .air_mass(position.zenith_angle(), site_altitude)
    else {
        log::debug!(
            "air mass undefined at altitude {:.3}° with {:?}",
            position.altitude(),
            atmosphere.air_mass_model()
        );
        return Ok(0.0);
    };

    let g_on = atmosphere
        .eccentricity()
        .extraterrestrial_radiation(instant.day_of_year())?;
    let beam = direct_beam_irradiance(g_on, air_mass, site_altitude, atmosphere.extinction())?;
    log::trace!("G_on={g_on:.2} m={air_mass:.4} beam={beam:.2} W/m²");
    Ok(beam)
}

/// Clear-sky beam irradiance in W/m² on an arbitrarily oriented plane, standard atmosphere.
///
/// When `longitude` is given, `instant` is the location's standard (clock) time
/// and is converted to solar time; otherwise `instant` is already solar time.
///
/// Always non-negative; 0 when the sun is below the horizon or behind the plane.
///
/// # Errors
/// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidAltitude` for out-of-range inputs.
///
/// # Example
/// ```
/// use solar_radiation::{Instant, SurfaceOrientation, radiation::irradiance_on_plane};
///
/// let instant = Instant::new(2019, 10, 17, 13, 1).unwrap();
/// let g = irradiance_on_plane(&SurfaceOrientation::zenith(), 0.0, &instant, -23.5, None).unwrap();
/// assert!(g > 800.0 && g < 1000.0);
///
/// // nothing reaches the underside
/// let g = irradiance_on_plane(&SurfaceOrientation::nadir(), 0.0, &instant, -23.5, None).unwrap();
/// assert_eq!(g, 0.0);
/// ```
pub fn irradiance_on_plane(
    orientation: &SurfaceOrientation,
    site_altitude: f64,
    instant: &Instant,
    latitude: f64,
    longitude: Option<f64>,
) -> Result<f64> {
    irradiance_on_plane_with(
        orientation,
        site_altitude,
        instant,
        latitude,
        longitude,
        &Atmosphere::standard(),
    )
}

/// Clear-sky beam irradiance in W/m² on a plane, with explicit atmosphere parameters.
///
/// See [`irradiance_on_plane`].
///
/// # Errors
/// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidAltitude` for out-of-range inputs.
pub fn irradiance_on_plane_with(
    orientation: &SurfaceOrientation,
    site_altitude: f64,
    instant: &Instant,
    latitude: f64,
    longitude: Option<f64>,
    atmosphere: &Atmosphere,
) -> Result<f64> {
    check_latitude(latitude)?;
    let solar_time = match longitude {
        Some(_) => standard_to_solar_time(instant, longitude)?,
        None => *instant,
    };

    let beam = beam_irradiance(&solar_time, latitude, site_altitude, atmosphere)?;
    if beam <= 0.0 {
        return Ok(0.0);
    }

    let sun = solar_position(&solar_time, latitude)?.to_ned();
    let cos_incidence = orientation.normal().dot(&sun);
    Ok(beam * cos_incidence.max(0.0))
}
