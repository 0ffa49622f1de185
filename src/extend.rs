//! The high-level forcing-extension pipeline.

use std::path::Path;

use firn_io::{ReaderConfig, WriterConfig, read_forcing, write_forcing};
use firn_resample::extend_series;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::ExtendConfig;
use crate::error::Error;

/// Extends the forcing file at `input` and writes the result to `output`.
///
/// Pipeline: read the source series, seed a [`StdRng`] from the configured
/// seed, bootstrap-extend over the configured spans, write the extended
/// series. The output file is only created once the extended series exists
/// in full, so a failing run never leaves partial output.
///
/// # Errors
///
/// Returns [`Error`] if the source cannot be read, the reference window is
/// not covered by the source years, or the output cannot be written.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn extend_forcing(input: &Path, output: &Path, config: &ExtendConfig) -> Result<(), Error> {
    let window = config.reference_window()?;
    let span = config.target_span()?;

    let source = read_forcing(input, &ReaderConfig::default())?;
    info!(
        n_years = source.n_years(),
        first = source.first_year(),
        last = source.last_year(),
        "source forcing loaded"
    );

    let mut rng = StdRng::seed_from_u64(config.seed());
    let extended = extend_series(&source, &window, &span, &mut rng)?;

    write_forcing(output, &extended, &WriterConfig::default())?;
    info!(n_years = extended.n_years(), "extended forcing written");

    Ok(())
}
