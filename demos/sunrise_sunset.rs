//! Sunrise, sunset and day length across latitudes, including polar day and night.

use solar_radiation::{Instant, SunriseResult, geometry};

struct Place {
    name: &'static str,
    latitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let places = [
        Place { name: "Quito", latitude: -0.18 },
        Place { name: "Madison", latitude: 43.07 },
        Place { name: "Tromsø", latitude: 69.65 },
        Place { name: "Longyearbyen", latitude: 78.22 },
        Place { name: "McMurdo", latitude: -77.85 },
    ];
    let dates = [
        Instant::new(2019, 3, 21, 0, 0)?,
        Instant::new(2019, 6, 21, 0, 0)?,
        Instant::new(2019, 12, 21, 0, 0)?,
    ];

    for date in &dates {
        println!(
            "=== {}-{:02}-{:02} (declination {:+.2}°) ===",
            date.year(),
            date.month(),
            date.day(),
            geometry::declination_at(date)
        );
        for place in &places {
            let result = geometry::sunrise_sunset(date, place.latitude)?;
            let hours = geometry::daylight_hours(date, place.latitude)?;
            print_sunrise_result(place.name, &result, hours);
        }
        println!();
    }

    Ok(())
}

fn print_sunrise_result(label: &str, result: &SunriseResult<Instant>, hours: f64) {
    match result {
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => {
            println!(
                "  {label:<14} sunrise {} sunset {} ({hours:.2} h)",
                hhmm(sunrise),
                hhmm(sunset)
            );
        }
        SunriseResult::AllDay { .. } => println!("  {label:<14} sun above the horizon all day"),
        SunriseResult::AllNight { .. } => println!("  {label:<14} sun below the horizon all day"),
    }
}

fn hhmm(instant: &Instant) -> String {
    format!("{:02}:{:02} solar", instant.hour(), instant.minute())
}
