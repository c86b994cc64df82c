//! Calendar and solar-time calculations.
//!
//! Clock time is converted to true solar time with the equation of time and,
//! when a longitude is known, the offset from the local standard meridian
//! (4 minutes per degree).

#![allow(clippy::unreadable_literal)]

use crate::error::{check_day_of_year, check_longitude};
use crate::math::{cos, degrees_to_radians, floor, round_ties_even, sin};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, Timelike};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per hour
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Minutes of solar time per degree of longitude
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Cumulative days before each month in a non-leap year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A calendar date and time of day without a time zone.
///
/// Depending on context this is either the location's standard (clock) time or
/// true solar time. Dates follow the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use solar_radiation::Instant;
/// let noon = Instant::new(2019, 6, 21, 12, 0).unwrap();
/// assert_eq!(noon.day_of_year(), 172);
/// assert!(Instant::new(2019, 2, 29, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    /// Seconds, possibly fractional (0 to < 60)
    second: f64,
}

impl Instant {
    /// Creates an instant at a whole minute.
    ///
    /// # Errors
    /// Returns `InvalidDate` if any component is out of range for the calendar.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        Self::from_ymd_hms(year, month, day, hour, minute, 0.0)
    }

    /// Creates an instant with (fractional) seconds.
    ///
    /// # Errors
    /// Returns `InvalidDate` if any component is outside its valid range (month 1-12,
    /// day valid for the month, hour 0-23, minute 0-59, second 0-59.999).
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_date("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_date("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_date(
                "second must be between 0 and 59.999...",
            ));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates an instant from any chrono date-time value.
    ///
    /// Works with `NaiveDateTime` and `DateTime<Tz>`; the local (wall clock)
    /// fields are used as they are.
    ///
    /// # Example
    /// ```
    /// # use solar_radiation::Instant;
    /// use chrono::NaiveDate;
    ///
    /// let dt = NaiveDate::from_ymd_opt(2019, 10, 17).unwrap().and_hms_opt(13, 1, 0).unwrap();
    /// let instant = Instant::from_datetime(&dt);
    /// assert_eq!(instant, Instant::new(2019, 10, 17, 13, 1).unwrap());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_datetime<D: Datelike + Timelike>(datetime: &D) -> Self {
        // leap second nanoseconds (>= 1e9) fold into the last second
        let nanos = datetime.nanosecond().min(999_999_999);
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: f64::from(datetime.second()) + f64::from(nanos) / 1e9,
        }
    }

    /// Converts to a chrono `NaiveDateTime`, truncated to whole nanoseconds.
    ///
    /// Returns `None` if the year is outside chrono's supported range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_datetime(&self) -> Option<chrono::NaiveDateTime> {
        let whole = floor(self.second);
        let nanos = ((self.second - whole) * 1e9) as u32;
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_nano_opt(
            self.hour,
            self.minute,
            whole as u32,
            nanos.min(999_999_999),
        )
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of the month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the seconds, possibly fractional.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Day of the year of this instant (1-366, leap years honoured).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        let leap_day = if self.month > 2 && is_leap_year(self.year) {
            1
        } else {
            0
        };
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + self.day + leap_day
    }

    /// Fractional hour of the day (0 to < 24).
    #[must_use]
    pub fn fractional_hour(&self) -> f64 {
        self.seconds_of_day() / SECONDS_PER_HOUR
    }

    /// Seconds elapsed since midnight.
    #[must_use]
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * SECONDS_PER_HOUR + f64::from(self.minute) * 60.0 + self.second
    }

    /// Midnight at the start of this instant's date.
    #[must_use]
    pub const fn start_of_day(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: 0,
            minute: 0,
            second: 0.0,
        }
    }

    /// Shifts the instant by a (possibly negative) number of seconds.
    ///
    /// Day, month and year roll over as needed. Shifts beyond the range of
    /// representable years saturate at the first or last day of that range.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn add_seconds(&self, seconds: f64) -> Self {
        let total = self.seconds_of_day() + seconds;
        let mut day_offset = floor(total / SECONDS_PER_DAY);
        let mut remainder = total - day_offset * SECONDS_PER_DAY;
        if remainder < 0.0 {
            remainder += SECONDS_PER_DAY;
            day_offset -= 1.0;
        } else if remainder >= SECONDS_PER_DAY {
            remainder -= SECONDS_PER_DAY;
            day_offset += 1.0;
        }

        let days = days_from_civil(self.year, self.month, self.day)
            .saturating_add(day_offset as i64)
            .clamp(
                days_from_civil(i32::MIN, 1, 1),
                days_from_civil(i32::MAX, 12, 31),
            );
        let (year, month, day) = civil_from_days(days);

        let hour = floor(remainder / SECONDS_PER_HOUR);
        let remainder = remainder - hour * SECONDS_PER_HOUR;
        let minute = floor(remainder / 60.0);
        let second = (remainder - minute * 60.0).clamp(0.0, 59.999_999_999);

        Self {
            year,
            month,
            day,
            hour: (hour as u32).min(23),
            minute: (minute as u32).min(59),
            second,
        }
    }

    /// Shifts the instant by a (possibly negative, fractional) number of minutes.
    #[must_use]
    pub fn add_minutes(&self, minutes: f64) -> Self {
        self.add_seconds(minutes * 60.0)
    }

    /// Shifts the instant by a (possibly negative, fractional) number of hours.
    #[must_use]
    pub fn add_hours(&self, hours: f64) -> Self {
        self.add_seconds(hours * SECONDS_PER_HOUR)
    }
}

/// Day of the year for a month and day in a non-leap year.
///
/// # Errors
/// Returns `InvalidDate` for impossible dates, including February 29.
///
/// # Example
/// ```
/// # use solar_radiation::time::day_of_year;
/// assert_eq!(day_of_year(1, 1).unwrap(), 1);
/// assert_eq!(day_of_year(2, 1).unwrap(), 32);
/// assert_eq!(day_of_year(12, 31).unwrap(), 365);
/// assert!(day_of_year(2, 30).is_err());
/// ```
pub fn day_of_year(month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    // 2019 stands in for any common year
    if day == 0 || day > days_in_month(2019, month) {
        return Err(Error::invalid_date("day is out of range for month"));
    }
    Ok(DAYS_BEFORE_MONTH[(month - 1) as usize] + day)
}

/// Day angle `B = (n - 1) · 360 / 365` in degrees.
///
/// # Errors
/// Returns `InvalidDate` if the day is outside 1 to 366.
pub fn day_angle(day: u32) -> Result<f64> {
    check_day_of_year(day)?;
    Ok(f64::from(day - 1) * 360.0 / 365.0)
}

/// Equation of time in minutes for a day of the year (Spencer, 1971).
///
/// Positive when the sun runs ahead of mean solar time.
///
/// # Errors
/// Returns `InvalidDate` if the day is outside 1 to 366.
///
/// # Example
/// ```
/// # use solar_radiation::time::equation_of_time;
/// // early November: sundials run about 16 minutes fast
/// let e = equation_of_time(307).unwrap();
/// assert!(e > 16.0 && e < 17.0);
/// ```
pub fn equation_of_time(day: u32) -> Result<f64> {
    let b = degrees_to_radians(day_angle(day)?);
    Ok(229.2
        * (0.000075 + 0.001868 * cos(b)
            - 0.032077 * sin(b)
            - 0.014615 * cos(2.0 * b)
            - 0.04089 * sin(2.0 * b)))
}

/// Standard meridian of the time zone a longitude nominally belongs to (nearest multiple of 15°).
///
/// Longitudes exactly halfway between two meridians (±7.5°, ±22.5°, ...) go to the
/// meridian that is an even multiple of 15°.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn standard_meridian(longitude: f64) -> Result<f64> {
    check_longitude(longitude)?;
    Ok(round_ties_even(longitude / 15.0) * 15.0)
}

/// Converts standard (clock) time to true solar time.
///
/// Adds the equation of time for the instant's day and, if `longitude` is given,
/// 4 minutes per degree of offset from the standard meridian (east positive).
///
/// # Errors
/// Returns `InvalidLongitude` for an out-of-range longitude.
///
/// # Example
/// ```
/// # use solar_radiation::{Instant, time::standard_to_solar_time};
/// // Madison, WI (89.4° W) on February 3 at 10:30 standard time
/// let clock = Instant::new(2019, 2, 3, 10, 30).unwrap();
/// let solar = standard_to_solar_time(&clock, Some(-89.4)).unwrap();
/// assert_eq!((solar.hour(), solar.minute()), (10, 18));
/// ```
pub fn standard_to_solar_time(instant: &Instant, longitude: Option<f64>) -> Result<Instant> {
    let mut correction = equation_of_time(instant.day_of_year())?;
    if let Some(longitude) = longitude {
        correction += MINUTES_PER_DEGREE * (longitude - standard_meridian(longitude)?);
    }
    let solar = instant.add_minutes(correction);
    log::trace!("standard time {instant:?} -> solar time {solar:?} ({correction:+.3} min)");
    Ok(solar)
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month = i64::from(month);
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Inverse of [`days_from_civil`].
#[allow(clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let days = days + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month as u32, day as u32)
}
