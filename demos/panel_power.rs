//! Hourly output of a rooftop photovoltaic panel over one day.

use solar_radiation::{
    AirMassModel, Atmosphere, GeoPosition, Instant, SolarPanel, SurfaceOrientation,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // New York, 2.1 m² panel at 20 % efficiency
    let position = GeoPosition::new(40.73, -73.93, 10.0)?;
    let tilted = SurfaceOrientation::from_slope_azimuth(40.0, 0.0)?;

    let mut roof = SolarPanel::new(2.1, 0.2)?.with_label("roof, 40° south");
    roof.set_position(position);
    roof.set_orientation(tilted);

    let mut flat = SolarPanel::new(2.1, 0.2)?
        .with_label("flat, hazy")
        .with_atmosphere(
            Atmosphere::standard()
                .with_extinction(0.45)?
                .with_air_mass_model(AirMassModel::Young1994),
        );
    flat.set_position(position);
    flat.set_orientation(SurfaceOrientation::zenith());

    for (month, day) in [(6, 21), (12, 21)] {
        println!("2019-{month:02}-{day:02}, clock time (EST)");
        println!(
            "  hour   {:>18}   {:>18}",
            roof.label().unwrap_or(""),
            flat.label().unwrap_or("")
        );

        let (mut roof_wh, mut flat_wh) = (0.0, 0.0);
        for hour in 0..24 {
            let clock = Instant::new(2019, month, day, hour, 30)?;
            roof.set_datetime(clock);
            flat.set_datetime(clock);
            let (p_roof, p_flat) = (roof.power()?, flat.power()?);
            roof_wh += p_roof;
            flat_wh += p_flat;
            if p_roof > 0.0 || p_flat > 0.0 {
                println!("  {hour:02}:30  {p_roof:>16.1} W   {p_flat:>16.1} W");
            }
        }
        println!("  total  {roof_wh:>15.0} Wh   {flat_wh:>15.0} Wh\n");
    }

    Ok(())
}
