//! Error types for the firn-calendar crate.

/// Error type for all fallible operations in the firn-calendar crate.
///
/// This enum covers validation failures for month numbers and
/// day-within-month values in the 365-day no-leap calendar, plus
/// model time-stamp strings that do not match the expected pattern.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a time-stamp string does not match `YYYY-MM-DD_HH:MM:SS`.
    #[error("unparseable time stamp: '{raw}' (expected YYYY-MM-DD_HH:MM:SS)")]
    Timestamp {
        /// The string that failed to parse.
        raw: String,
    },
}
