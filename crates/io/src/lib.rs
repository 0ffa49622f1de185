//! # firn-io
//!
//! Read annual forcing data from NetCDF files and write extended series
//! back out. Bridges the external file format into the in-memory
//! [`ForcingSeries`](firn_resample::ForcingSeries) model.
//!
//! Time is carried in forcing files as a fixed-width byte field of
//! `YYYY-MM-DD_HH:MM:SS` strings; this crate decodes it on the way in and
//! regenerates it (first-of-year, space-padded) on the way out.

mod error;
mod read;
mod write;
mod xtime;

pub use error::IoError;
pub use read::{ReaderConfig, read_forcing};
pub use write::{WriterConfig, write_forcing};
pub use xtime::{XTIME_WIDTH, decode_stamp, encode_stamp};
