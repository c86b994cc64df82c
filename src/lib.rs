//! # Solar Radiation Library
//!
//! Clear-sky solar geometry and beam irradiance on arbitrarily oriented surfaces,
//! after Duffie & Beckman.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculation chain runs from calendar time to power:
//! - **Time**: day of year, equation of time, standard (clock) time to true solar time
//! - **Geometry**: declination, hour angle, zenith/altitude/azimuth, sunrise and sunset
//! - **Radiation**: extraterrestrial radiation, air mass, standard-atmosphere pressure,
//!   direct beam irradiance and its projection onto a plane
//! - **Panel**: output power of a photovoltaic panel
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Pure functions over small `Copy` value types, safe to call from any thread
//! - Polar day and polar night reported as typed results instead of NaN
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Convert between [`Instant`] and chrono date-time types
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-radiation = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-radiation = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Duffie, J. A.; Beckman, W. A. (2013). Solar Engineering of Thermal Processes, 4th ed. Wiley.
//! - Spencer, J. W. (1971). Fourier series representation of the position of the sun. Search, 2(5), 172.
//! - Kasten, F.; Young, A. T. (1989). Revised optical air mass tables and approximation formula.
//!   Applied Optics, 28(22), 4735-4738.
//! - Aglietti, G. S.; Redi, S.; Tatnall, A. R.; Markvart, T. (2009). Harnessing high-altitude
//!   solar power. IEEE Transactions on Energy Conversion, 24(2), 442-451.
//!
//! ## Quick Start
//!
//! ### Sun position
//! ```rust
//! use solar_radiation::{Instant, geometry, time};
//!
//! // Madison, WI at 10:30 standard time
//! let clock = Instant::new(2019, 2, 13, 10, 30).unwrap();
//! let solar = time::standard_to_solar_time(&clock, Some(-89.4)).unwrap();
//! let position = geometry::solar_position(&solar, 43.07).unwrap();
//!
//! println!("Altitude: {:.2}°", position.altitude());
//! println!("Azimuth: {:.2}° (west of south)", position.azimuth());
//! ```
//!
//! ### Irradiance on a tilted plane
//! ```rust
//! use solar_radiation::{Instant, SurfaceOrientation, radiation};
//!
//! // 30° slope facing due south, 500 m above sea level
//! let panel = SurfaceOrientation::from_slope_azimuth(30.0, 0.0).unwrap();
//! let clock = Instant::new(2019, 6, 21, 13, 0).unwrap();
//! let g = radiation::irradiance_on_plane(&panel, 500.0, &clock, 48.21, Some(16.37)).unwrap();
//!
//! println!("Beam irradiance: {g:.1} W/m²");
//! ```
//!
//! ### Panel power
//! ```rust
//! use solar_radiation::{GeoPosition, Instant, SolarPanel, SurfaceOrientation};
//!
//! let mut panel = SolarPanel::new(2.1, 0.2).unwrap();
//! panel.set_orientation(SurfaceOrientation::zenith());
//! panel.set_position(GeoPosition::new(40.73, -73.93, 0.0).unwrap());
//! panel.set_datetime(Instant::new(2019, 12, 25, 16, 15).unwrap());
//!
//! println!("Power: {:.2} W", panel.power().unwrap());
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = South, negative toward the east, positive toward the west (-180° to 180°)
//! - **Zenith angle**: 0° = directly overhead, 90° = horizon (0° to 180°)
//! - **Vectors**: local North-East-Down frame; a horizontal surface facing the sky is `[0, 0, -1]`

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of tabulated values in tests
)]

extern crate alloc;

// Public API exports
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::panel::SolarPanel;
pub use crate::radiation::{AirMassModel, Atmosphere, Eccentricity, irradiance_on_plane};
pub use crate::time::Instant;
pub use crate::types::{
    GeoPosition, PolarCondition, SolarPosition, SunriseResult, SurfaceOrientation,
};
pub use crate::vector::Vector3;

// Model modules
pub mod geometry;
pub mod radiation;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;
mod vector;

// Public modules
pub mod frames;
pub mod panel;
pub mod time;
