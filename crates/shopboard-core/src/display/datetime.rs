//! Date and time display utilities.
//!
//! Wrapper types that format a `Timestamp` in a given time zone through the
//! `Display` trait, the way the board dates are shown on the kiosk.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A calendar date in day-first form: `DD/MM/YYYY`.
///
/// # Examples
///
/// ```rust
/// use jiff::{tz::TimeZone, Timestamp};
/// use shopboard_core::display::ShortDate;
///
/// let due: Timestamp = "2024-06-01T12:00:00Z".parse().unwrap();
/// assert_eq!(ShortDate::new(&due, &TimeZone::UTC).to_string(), "01/06/2024");
/// ```
pub struct ShortDate<'a> {
    timestamp: &'a Timestamp,
    time_zone: &'a TimeZone,
}

impl<'a> ShortDate<'a> {
    pub fn new(timestamp: &'a Timestamp, time_zone: &'a TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl fmt::Display for ShortDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%d/%m/%Y")
        )
    }
}

/// A 24-hour wall-clock time: `HH:MM:SS`.
pub struct ClockTime<'a> {
    timestamp: &'a Timestamp,
    time_zone: &'a TimeZone,
}

impl<'a> ClockTime<'a> {
    pub fn new(timestamp: &'a Timestamp, time_zone: &'a TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl fmt::Display for ClockTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_is_zero_padded() {
        let at: Timestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        assert_eq!(ClockTime::new(&at, &TimeZone::UTC).to_string(), "03:04:05");
    }

    #[test]
    fn test_short_date_crosses_midnight_in_zone() {
        let at: Timestamp = "2024-01-01T02:00:00Z".parse().unwrap();
        let zone = TimeZone::fixed(jiff::tz::offset(-5));
        assert_eq!(ShortDate::new(&at, &zone).to_string(), "31/12/2023");
    }
}
