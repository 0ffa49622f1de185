//! Error types for firn-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the firn-io crate.
///
/// This enum covers I/O failures, format-specific errors from the NetCDF
/// library, time-string decoding problems, and data-model mismatches
/// encountered when reading or writing forcing files.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a required variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a dimension has an unexpected rank or size.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when a time-string record is not decodable text.
    #[error("invalid time string: {reason}")]
    InvalidTimeString {
        /// Description of the decoding issue.
        reason: String,
    },

    /// Wraps an error originating from the firn-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Wraps an invariant violation reported by the forcing-series model.
    #[error("invalid forcing data: {reason}")]
    Forcing {
        /// Description of the violated invariant.
        reason: String,
    },

    /// Returned when a reader or writer configuration is invalid.
    #[error("invalid configuration: {details}")]
    Validation {
        /// Human-readable summary of the problem.
        details: String,
    },
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

impl From<firn_calendar::CalendarError> for IoError {
    fn from(e: firn_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}

impl From<firn_resample::ResampleError> for IoError {
    fn from(e: firn_resample::ResampleError) -> Self {
        IoError::Forcing {
            reason: e.to_string(),
        }
    }
}
