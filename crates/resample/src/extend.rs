//! Series extension: gather sampled records into a new annual series.

use firn_calendar::annual_sequence;
use tracing::debug;

use crate::error::ResampleError;
use crate::sample::sample_indices;
use crate::series::{ForcingField, ForcingSeries};
use crate::window::{ReferenceWindow, TargetSpan};

/// Extends a forcing series over `span` by bootstrap-sampling years from
/// `window`.
///
/// One source year is drawn per output year (with replacement, order
/// preserved). Per-year fields are rebuilt by copying the sampled annual
/// records verbatim; fields without a time dimension are cloned through
/// unchanged. The output year coordinate is freshly generated from the
/// span, independent of the source's time stamps.
///
/// Deterministic for a given RNG state; the output always has exactly
/// `span.n_years()` records.
///
/// # Errors
///
/// Returns [`ResampleError`] if the reference window is not covered by the
/// source years. Any error leaves no partial result; the transform either
/// produces a complete series or nothing.
#[tracing::instrument(skip_all, fields(
    reference_start = window.start(),
    reference_end = window.end(),
    output_start = span.start(),
    output_end = span.end(),
))]
pub fn extend_series(
    source: &ForcingSeries,
    window: &ReferenceWindow,
    span: &TargetSpan,
    rng: &mut impl rand::Rng,
) -> Result<ForcingSeries, ResampleError> {
    // One drawn source record per output year.
    let indices = sample_indices(source.years(), window, span.n_years(), rng)?;
    debug!(n_samples = indices.len(), "drew bootstrap sample indices");

    let mut fields = Vec::with_capacity(source.fields().len());
    for field in source.fields() {
        if field.is_per_year() {
            fields.push(gather(field, &indices)?);
        } else {
            fields.push(field.clone());
        }
    }

    let years = annual_sequence(span.start(), span.end());
    ForcingSeries::new(years, fields)
}

/// Rebuilds a per-year field from the sampled record indices.
fn gather(field: &ForcingField, indices: &[usize]) -> Result<ForcingField, ResampleError> {
    let record_len = field.record_len();
    let mut values = Vec::with_capacity(indices.len() * record_len);
    for &i in indices {
        values.extend_from_slice(field.record(i));
    }

    let mut shape = field.shape().to_vec();
    shape[0] = indices.len();

    ForcingField::per_year(field.name(), field.dims().to_vec(), shape, values)
}
