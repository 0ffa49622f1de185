//! Reading forcing files into the in-memory series model.

use std::path::Path;

use firn_resample::{ForcingField, ForcingSeries};
use tracing::debug;

use crate::error::IoError;
use crate::xtime;

/// Configuration for reading an annual forcing file.
///
/// The defaults match the upstream forcing-file convention: a `xtime`
/// character variable along a `Time` record dimension.
///
/// # Example
///
/// ```
/// use firn_io::ReaderConfig;
///
/// let config = ReaderConfig::default().with_time_var("time_stamps");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// NetCDF variable holding the fixed-width time strings.
    time_var: String,
    /// Dimension that makes a variable per-year when it comes first.
    time_dim: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            time_var: "xtime".into(),
            time_dim: "Time".into(),
        }
    }
}

impl ReaderConfig {
    /// Sets the time-string variable name.
    pub fn with_time_var(mut self, name: impl Into<String>) -> Self {
        self.time_var = name.into();
        self
    }

    /// Sets the time dimension name.
    pub fn with_time_dim(mut self, name: impl Into<String>) -> Self {
        self.time_dim = name.into();
        self
    }

    /// Returns the time-string variable name.
    pub fn time_var(&self) -> &str {
        &self.time_var
    }

    /// Returns the time dimension name.
    pub fn time_dim(&self) -> &str {
        &self.time_dim
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if either name is empty.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.time_var.is_empty() {
            return Err(IoError::Validation {
                details: "time_var must not be empty".to_string(),
            });
        }
        if self.time_dim.is_empty() {
            return Err(IoError::Validation {
                details: "time_dim must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Reads an annual forcing file into a [`ForcingSeries`].
///
/// The time-string variable is decoded record by record and the calendar
/// year of each stamp becomes the year coordinate. Every other variable is
/// read as flattened `f64` data; a variable whose first dimension is the
/// time dimension becomes a per-year field, anything else is carried as a
/// constant field.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing or unreadable, if the
/// time-string variable is absent or malformed, or if the decoded series
/// violates the year-coordinate invariants.
pub fn read_forcing(path: &Path, config: &ReaderConfig) -> Result<ForcingSeries, IoError> {
    config.validate()?;

    let file = open_file(path)?;

    let years = read_years(&file, config, path)?;

    let mut fields = Vec::new();
    for var in file.variables() {
        if var.name() == config.time_var {
            continue;
        }

        let dims: Vec<String> = var.dimensions().iter().map(|d| d.name()).collect();
        let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
        let values = var.get_values::<f64, _>(..)?;

        let per_year = dims.first().is_some_and(|d| d == &config.time_dim);
        let field = if per_year {
            ForcingField::per_year(var.name(), dims, shape, values)?
        } else {
            ForcingField::constant(var.name(), dims, shape, values)?
        };
        fields.push(field);
    }

    debug!(
        n_years = years.len(),
        n_fields = fields.len(),
        "decoded forcing file"
    );

    Ok(ForcingSeries::new(years, fields)?)
}

/// Decodes the time-string variable into one calendar year per record.
fn read_years(
    file: &netcdf::File,
    config: &ReaderConfig,
    path: &Path,
) -> Result<Vec<i32>, IoError> {
    let var = file
        .variable(&config.time_var)
        .ok_or_else(|| IoError::MissingVariable {
            name: config.time_var.clone(),
            path: path.to_path_buf(),
        })?;

    let dims = var.dimensions();
    if dims.len() != 2 {
        return Err(IoError::DimensionMismatch {
            name: format!("{} rank", config.time_var),
            expected: 2,
            got: dims.len(),
        });
    }
    let width = dims[1].len();
    if width == 0 {
        return Err(IoError::DimensionMismatch {
            name: format!("{} width", config.time_var),
            expected: 1,
            got: 0,
        });
    }

    let raw = var.get_values::<u8, _>(..)?;
    raw.chunks(width)
        .map(|record| Ok(xtime::decode_stamp(record)?.year()))
        .collect()
}
