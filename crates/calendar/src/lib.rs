//! # firn-calendar
//!
//! Pure date arithmetic for the 365-day no-leap calendar used by forcing
//! files: date validation, model time-stamp parsing and formatting, and
//! annual year sequences.
//!
//! ## Quick Start
//!
//! ```
//! use firn_calendar::{NoLeapDate, TimeStamp, annual_sequence};
//!
//! // Stamp parsing (the forcing-file time pattern)
//! let stamp = TimeStamp::parse("1995-01-01_00:00:00").unwrap();
//! assert_eq!(stamp.year(), 1995);
//!
//! // Regenerated first-of-year stamps
//! let out = TimeStamp::first_of_year(2101);
//! assert_eq!(out.to_xtime_string(), "2101-01-01_00:00:00");
//!
//! // Year sequences
//! assert_eq!(annual_sequence(2101, 2103), vec![2101, 2102, 2103]);
//!
//! // Date validation (February is always 28 days)
//! assert!(NoLeapDate::new(2000, 2, 29).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | No-leap date with year context |
//! | `stamp` | Model time-stamp parsing and formatting |
//! | `annual` | Annual year sequence generation |
//! | `error` | Error types |

mod annual;
mod date;
mod error;
mod stamp;

pub use annual::annual_sequence;
pub use date::{NoLeapDate, days_in_month};
pub use error::CalendarError;
pub use stamp::{STAMP_LEN, TimeStamp};
