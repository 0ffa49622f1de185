//! Writing an extended series back out as a forcing file.

use std::path::Path;

use firn_calendar::TimeStamp;
use firn_resample::ForcingSeries;
use tracing::debug;

use crate::error::IoError;
use crate::xtime;

/// Dimension name for the byte width of the time-string variable.
const STRLEN_DIM: &str = "StrLen";

/// Configuration for writing an annual forcing file.
///
/// The defaults mirror [`ReaderConfig`](crate::ReaderConfig): an `xtime`
/// character variable along a `Time` record dimension.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// NetCDF variable to hold the regenerated time strings.
    time_var: String,
    /// Record dimension for the time strings.
    time_dim: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            time_var: "xtime".into(),
            time_dim: "Time".into(),
        }
    }
}

impl WriterConfig {
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

/// Writes a [`ForcingSeries`] to a NetCDF file at `path`.
///
/// The time-string variable is regenerated from the year coordinate: one
/// record per year, stamped to the first of the year and space-padded to
/// [`xtime::XTIME_WIDTH`] bytes. Field data is written verbatim under the
/// field's own dimension names.
///
/// The caller must only invoke this with a fully assembled series; nothing
/// is created on disk before that point, so a failed transform never leaves
/// partial output.
///
/// # Errors
///
/// Returns [`IoError::DimensionMismatch`] if two fields disagree about a
/// dimension's extent, or [`IoError::Netcdf`] for failures in the
/// underlying library.
pub fn write_forcing(
    path: &Path,
    series: &ForcingSeries,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let mut file = netcdf::create(path)?;

    file.add_dimension(&config.time_dim, series.n_years())?;
    file.add_dimension(STRLEN_DIM, xtime::XTIME_WIDTH)?;

    // Regenerated time strings: one first-of-year stamp per output year.
    let mut stamps = Vec::with_capacity(series.n_years() * xtime::XTIME_WIDTH);
    for &year in series.years() {
        stamps.extend_from_slice(&xtime::encode_stamp(&TimeStamp::first_of_year(year)));
    }
    let mut var = file.add_variable::<u8>(&config.time_var, &[&config.time_dim, STRLEN_DIM])?;
    var.put_values(&stamps, ..)?;

    for field in series.fields() {
        for (dim_name, &dim_len) in field.dims().iter().zip(field.shape()) {
            match file.dimension(dim_name).map(|d| d.len()) {
                Some(existing) if existing != dim_len => {
                    return Err(IoError::DimensionMismatch {
                        name: dim_name.clone(),
                        expected: existing,
                        got: dim_len,
                    });
                }
                Some(_) => {}
                None => {
                    file.add_dimension(dim_name, dim_len)?;
                }
            }
        }

        let dim_refs: Vec<&str> = field.dims().iter().map(String::as_str).collect();
        let mut var = file.add_variable::<f64>(field.name(), &dim_refs)?;
        var.put_values(field.values(), ..)?;
    }

    debug!(
        path = %path.display(),
        n_years = series.n_years(),
        n_fields = series.fields().len(),
        "wrote forcing file"
    );

    Ok(())
}
