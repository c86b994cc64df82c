//! Sun position and day length against worked textbook examples and reference values.

use csv::ReaderBuilder;
use solar_radiation::{Instant, SunriseResult, geometry};
use std::error::Error;
use std::fs::File;

#[derive(Debug)]
struct PositionRecord {
    instant: Instant,
    latitude: f64,
    expected_zenith: f64,
    expected_azimuth: f64,
    tolerance: f64,
    source: String,
}

impl PositionRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        let (year, month, day) = parse_date(&record[0])?;
        let (hour, minute) = parse_time(&record[1])?;
        Ok(Self {
            instant: Instant::new(year, month, day, hour, minute)?,
            latitude: record[2].parse()?,
            expected_zenith: record[3].parse()?,
            expected_azimuth: record[4].parse()?,
            tolerance: record[5].parse()?,
            source: record[6].to_string(),
        })
    }
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), Box<dyn Error>> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("bad date '{s}'").into());
    }
    Ok((parts[0].parse()?, parts[1].parse()?, parts[2].parse()?))
}

fn parse_time(s: &str) -> Result<(u32, u32), Box<dyn Error>> {
    let (hour, minute) = s.split_once(':').ok_or_else(|| format!("bad time '{s}'"))?;
    Ok((hour.parse()?, minute.parse()?))
}

fn open(path: &str) -> Result<csv::Reader<File>, Box<dyn Error>> {
    Ok(ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(File::open(path)?))
}

#[test]
fn test_sun_position_examples() -> Result<(), Box<dyn Error>> {
    let mut reader = open("tests/data/duffie_beckman_examples.csv")?;
    let mut count = 0;

    for result in reader.records() {
        let record = PositionRecord::from_csv_record(&result?)?;
        let position = geometry::solar_position(&record.instant, record.latitude)?;

        let zenith_error = (position.zenith_angle() - record.expected_zenith).abs();
        let azimuth_error = (position.azimuth() - record.expected_azimuth).abs();
        assert!(
            zenith_error < record.tolerance,
            "{}: zenith {:.3}° (expected {:.3}°)",
            record.source,
            position.zenith_angle(),
            record.expected_zenith
        );
        assert!(
            azimuth_error < record.tolerance,
            "{}: azimuth {:.3}° (expected {:.3}°)",
            record.source,
            position.azimuth(),
            record.expected_azimuth
        );
        assert!((position.altitude() + position.zenith_angle() - 90.0).abs() < 1e-12);
        count += 1;
    }

    assert_eq!(count, 8, "unexpected number of reference rows");
    Ok(())
}

#[test]
fn test_day_length_reference() -> Result<(), Box<dyn Error>> {
    let mut reader = open("tests/data/day_lengths.csv")?;
    let mut failed_cases = 0;

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let (year, month, day) = parse_date(&record[0])?;
        let date = Instant::new(year, month, day, 0, 0)?;
        let latitude: f64 = record[1].parse()?;

        let sunrise_result = geometry::sunrise_sunset(&date, latitude)?;
        let hours = geometry::daylight_hours(&date, latitude)?;

        let ok = match &record[2] {
            "NORMAL" => {
                let expected: f64 = record[3].parse()?;
                match sunrise_result {
                    SunriseResult::RegularDay {
                        sunrise, sunset, ..
                    } => {
                        let span = sunset.fractional_hour() - sunrise.fractional_hour();
                        (hours - expected).abs() < 0.001 && (span - hours).abs() < 1e-6
                    }
                    _ => false,
                }
            }
            "ALL_DAY" => sunrise_result.is_polar_day() && hours == 24.0,
            "ALL_NIGHT" => sunrise_result.is_polar_night() && hours == 0.0,
            other => {
                println!("Record {}: unknown day type '{other}'", i + 1);
                false
            }
        };

        if !ok {
            println!(
                "Record {}: {} at {latitude}° gave {sunrise_result:?}, {hours:.3} h",
                i + 1,
                &record[0]
            );
            failed_cases += 1;
        }
    }

    assert_eq!(failed_cases, 0, "Some test cases failed");
    Ok(())
}

#[test]
fn test_solar_time_example() {
    // 10:30 standard time in Madison (89.4° W) on February 3 is 10:19 solar time
    let clock = Instant::new(2019, 2, 3, 10, 30).unwrap();
    let solar = solar_radiation::time::standard_to_solar_time(&clock, Some(-89.4)).unwrap();

    assert_eq!((solar.hour(), solar.minute()), (10, 18));
    assert_eq!(solar.second().floor(), 54.0);
    let eot = solar_radiation::time::equation_of_time(34).unwrap();
    assert!((eot + 13.5).abs() < 0.1);
}

#[test]
fn test_declination_example() {
    // March 16: δ ≈ -2.4° in the textbook table, -2.04° from the Spencer series
    let march_16 = solar_radiation::time::day_of_year(3, 16).unwrap();
    assert_eq!(march_16, 75);
    let delta = geometry::declination(march_16).unwrap();
    assert!((delta + 2.04).abs() < 0.01);

    let omega_s = geometry::sunset_hour_angle(43.0, delta).unwrap();
    assert!((omega_s - 88.1).abs() < 0.05);
}
