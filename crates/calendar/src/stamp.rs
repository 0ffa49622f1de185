//! Model time stamps in the `YYYY-MM-DD_HH:MM:SS` pattern.

use crate::date::NoLeapDate;
use crate::error::CalendarError;

/// Byte length of the textual stamp pattern `YYYY-MM-DD_HH:MM:SS`.
pub const STAMP_LEN: usize = 19;

/// A model time stamp: a no-leap date plus a time of day.
///
/// This is the parsed form of the time strings carried in forcing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeStamp {
    date: NoLeapDate,
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeStamp {
    /// Creates a time stamp from a date and a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Timestamp`] if the time of day is out of
    /// range (hour > 23, minute or second > 59).
    pub fn new(date: NoLeapDate, hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CalendarError::Timestamp {
                raw: format!("{hour:02}:{minute:02}:{second:02}"),
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Returns midnight on January 1 of the given year.
    pub fn first_of_year(year: i32) -> Self {
        Self {
            date: NoLeapDate::first_of_year(year),
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Parses a stamp from the exact pattern `YYYY-MM-DD_HH:MM:SS`.
    ///
    /// The input must already be trimmed of any padding; the pattern is
    /// fixed-width with a 4-digit year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Timestamp`] if the pattern does not match,
    /// or [`CalendarError::InvalidMonth`] / [`CalendarError::InvalidDay`]
    /// if the date is not a valid no-leap calendar date.
    pub fn parse(raw: &str) -> Result<Self, CalendarError> {
        let bytes = raw.as_bytes();
        let fail = || CalendarError::Timestamp {
            raw: raw.to_string(),
        };

        if bytes.len() != STAMP_LEN {
            return Err(fail());
        }
        if bytes[4] != b'-'
            || bytes[7] != b'-'
            || bytes[10] != b'_'
            || bytes[13] != b':'
            || bytes[16] != b':'
        {
            return Err(fail());
        }

        let field = |lo: usize, hi: usize| -> Result<u32, CalendarError> {
            let mut value = 0u32;
            for &b in &bytes[lo..hi] {
                if !b.is_ascii_digit() {
                    return Err(fail());
                }
                value = value * 10 + u32::from(b - b'0');
            }
            Ok(value)
        };

        let year = field(0, 4)? as i32;
        let month = field(5, 7)? as u8;
        let day = field(8, 10)? as u8;
        let hour = field(11, 13)? as u8;
        let minute = field(14, 16)? as u8;
        let second = field(17, 19)? as u8;

        if hour > 23 || minute > 59 || second > 59 {
            return Err(fail());
        }

        let date = NoLeapDate::new(year, month, day)?;
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Returns the date part of the stamp.
    pub fn date(self) -> NoLeapDate {
        self.date
    }

    /// Returns the calendar year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Formats the stamp back into the `YYYY-MM-DD_HH:MM:SS` pattern.
    pub fn to_xtime_string(self) -> String {
        format!(
            "{:04}-{:02}-{:02}_{:02}:{:02}:{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.hour,
            self.minute,
            self.second
        )
    }
}
