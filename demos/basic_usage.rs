//! Basic sun position and irradiance calculation from a chrono timestamp.

use chrono::{DateTime, FixedOffset};
use solar_radiation::{Instant, SurfaceOrientation, geometry, radiation, time};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Madison, WI: 10:30 Central Standard Time on February 13, 2019
    let datetime = "2019-02-13T10:30:00-06:00".parse::<DateTime<FixedOffset>>()?;
    let latitude = 43.07;
    let longitude = -89.4;

    let clock = Instant::from_datetime(&datetime);
    let solar = time::standard_to_solar_time(&clock, Some(longitude))?;
    println!("Clock time:  {}", datetime.format("%Y-%m-%d %H:%M %:z"));
    println!(
        "Solar time:  {:02}:{:02}:{:04.1}",
        solar.hour(),
        solar.minute(),
        solar.second()
    );
    println!(
        "Equation of time: {:+.2} min\n",
        time::equation_of_time(clock.day_of_year())?
    );

    let position = geometry::solar_position(&solar, latitude)?;
    println!("Declination: {:.3}°", position.declination());
    println!("Hour angle:  {:.3}°", position.hour_angle());
    println!("Zenith:      {:.3}°", position.zenith_angle());
    println!("Altitude:    {:.3}°", position.altitude());
    println!("Azimuth:     {:.3}° (0° = south, west positive)", position.azimuth());

    let sun = position.to_ned();
    println!(
        "Sun vector (NED): [{:.4}, {:.4}, {:.4}]\n",
        sun[0], sun[1], sun[2]
    );

    // 45° slope facing 15° west of south
    let surface = SurfaceOrientation::from_slope_azimuth(45.0, 15.0)?;
    println!(
        "Incidence on 45° / 15° W surface: {:.2}°",
        geometry::incidence_angle(&solar, latitude, &surface)?
    );
    let g = radiation::irradiance_on_plane(&surface, 270.0, &clock, latitude, Some(longitude))?;
    println!("Beam irradiance on surface: {g:.1} W/m²");

    let flat = radiation::irradiance_on_plane(
        &SurfaceOrientation::zenith(),
        270.0,
        &clock,
        latitude,
        Some(longitude),
    )?;
    println!("Beam irradiance on horizontal: {flat:.1} W/m²");

    Ok(())
}
