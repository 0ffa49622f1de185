//! # firn
//!
//! Bootstrap extension of annual ice-sheet forcing files.
//!
//! Climate projections often stop decades before the end of a long model
//! run. This library synthesizes the missing span by resampling whole
//! years, with replacement, from a historical reference window of an
//! existing forcing file, and writes the result as a new forcing file with
//! a regenerated time coordinate.
//!
//! The high-level entry point is [`extend_forcing`]; orchestration code
//! supplies file paths and an [`ExtendConfig`] with the year ranges and
//! seed. The underlying pieces are reusable on their own:
//!
//! - [`firn_resample`]: the in-memory series model and the seeded
//!   bootstrap transform;
//! - [`firn_io`]: NetCDF reading/writing and the fixed-width time-string
//!   codec;
//! - [`firn_calendar`]: the 365-day no-leap calendar.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use firn::{ExtendConfig, extend_forcing};
//!
//! let config = ExtendConfig::new(1995, 2015, 2301, 2500);
//! extend_forcing(
//!     Path::new("forcing_1950-2300.nc"),
//!     Path::new("forcing_2301-2500.nc"),
//!     &config,
//! )?;
//! # Ok::<(), firn::Error>(())
//! ```
//!
//! For a fixed seed the run is fully deterministic: the sampled year
//! sequence and every output value are identical across invocations.

mod config;
mod error;
mod extend;

pub use config::ExtendConfig;
pub use error::Error;
pub use extend::extend_forcing;

pub use firn_calendar::{NoLeapDate, TimeStamp};
pub use firn_io::{IoError, ReaderConfig, WriterConfig, read_forcing, write_forcing};
pub use firn_resample::{
    ForcingField, ForcingSeries, ReferenceWindow, ResampleError, TargetSpan, extend_series,
};
