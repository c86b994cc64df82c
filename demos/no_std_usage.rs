//! Example using only the numeric API.
//!
//! Every call here is available with `default-features = false, features = ["libm"]`;
//! callers supply calendar fields themselves instead of chrono types.

use solar_radiation::{
    Atmosphere, GeoPosition, Instant, SurfaceOrientation, frames, geometry, radiation, time,
};

fn main() {
    env_logger::init();

    println!("Solar radiation without std/chrono dependencies\n");

    // Vienna: 48.21°N, 16.37°E, 190 m; 2024-06-21 13:00 CET
    let site = GeoPosition::new(48.21, 16.37, 190.0).expect("Valid position");
    let clock = Instant::new(2024, 6, 21, 13, 0).expect("Valid date");

    let day = clock.day_of_year();
    let solar =
        time::standard_to_solar_time(&clock, Some(site.longitude())).expect("Valid longitude");
    println!("Day of year: {day}");
    println!("Solar time: {:02}:{:02}", solar.hour(), solar.minute());

    // step through the model by hand
    let declination = geometry::declination(day).expect("Valid day");
    let omega = geometry::hour_angle(&solar);
    let altitude =
        geometry::solar_altitude(site.latitude(), declination, omega).expect("Valid latitude");
    let zenith = 90.0 - altitude;
    println!("Declination: {declination:.3}°, hour angle: {omega:.3}°, altitude: {altitude:.3}°");

    let g_on = radiation::extraterrestrial_radiation_spencer(day).expect("Valid day");
    let m = radiation::air_mass_kasten_young_scaled(zenith, site.altitude())
        .expect("Valid altitude");
    let beam = radiation::direct_beam_irradiance(
        g_on,
        m,
        site.altitude(),
        radiation::STANDARD_EXTINCTION,
    )
    .expect("Valid altitude");
    println!("G_on: {g_on:.1} W/m², air mass: {m:.3}, beam: {beam:.1} W/m²");

    let via_model = radiation::beam_irradiance(
        &solar,
        site.latitude(),
        site.altitude(),
        &Atmosphere::standard(),
    )
    .expect("Valid inputs");
    println!("beam_irradiance(): {via_model:.1} W/m²\n");

    // sun and site in Earth-fixed axes
    let sun_ned =
        geometry::solar_vector_ned(site.latitude(), declination, omega).expect("Valid latitude");
    let sun_ecef = frames::ned_to_ecef(sun_ned, site.latitude(), site.longitude())
        .expect("Valid coordinates");
    let site_ecef = frames::lla_to_ecef(&site);
    println!(
        "Site ECEF: [{:.0}, {:.0}, {:.0}] m",
        site_ecef[0], site_ecef[1], site_ecef[2]
    );
    println!(
        "Sun direction ECEF: [{:.4}, {:.4}, {:.4}]\n",
        sun_ecef[0], sun_ecef[1], sun_ecef[2]
    );

    let orientations = [
        ("horizontal", SurfaceOrientation::zenith()),
        (
            "south 35°",
            SurfaceOrientation::from_slope_azimuth(35.0, 0.0).expect("Valid slope"),
        ),
        (
            "west wall",
            SurfaceOrientation::from_slope_azimuth(90.0, 90.0).expect("Valid slope"),
        ),
        (
            "north wall",
            SurfaceOrientation::from_slope_azimuth(90.0, 180.0).expect("Valid slope"),
        ),
    ];
    for (name, orientation) in &orientations {
        let g = radiation::irradiance_on_plane(
            orientation,
            site.altitude(),
            &solar,
            site.latitude(),
            None,
        )
        .expect("Valid inputs");
        println!("  {name:<11} {g:>7.1} W/m²");
    }
}
