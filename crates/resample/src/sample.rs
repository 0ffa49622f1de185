//! Bootstrap index drawing over the reference window.

use crate::error::ResampleError;
use crate::window::ReferenceWindow;

/// Draws `n` offsets uniformly from `[0, window_len)` with replacement.
///
/// Order matters and duplicates are expected; this is a bootstrap, not a
/// permutation. Deterministic for a given RNG state.
///
/// # Panics
///
/// Panics if `window_len` is zero and `n` is nonzero; a
/// [`ReferenceWindow`] always has at least one year.
pub fn bootstrap_offsets(window_len: usize, n: usize, rng: &mut impl rand::Rng) -> Vec<usize> {
    (0..n).map(|_| rng.random_range(0..window_len)).collect()
}

/// Draws `n` absolute record indices into `years` from the reference window.
///
/// The window is located inside the source year coordinate, every window
/// year is checked to be present and consecutive, and each drawn offset is
/// mapped to `base + offset` where `base` is the record index of the
/// window's first year.
///
/// # Errors
///
/// Returns [`ResampleError::EmptyData`] for an empty year coordinate,
/// [`ResampleError::ReferenceOutOfRange`] if the window is not covered by
/// the source years, or [`ResampleError::ReferenceGap`] if the source skips
/// a year inside the window.
pub fn sample_indices(
    years: &[i32],
    window: &ReferenceWindow,
    n: usize,
    rng: &mut impl rand::Rng,
) -> Result<Vec<usize>, ResampleError> {
    let base = locate_window(years, window)?;
    let offsets = bootstrap_offsets(window.len(), n, rng);
    Ok(offsets.into_iter().map(|o| base + o).collect())
}

/// Finds the record index of the window's first year and validates that the
/// whole window maps onto consecutive source records.
fn locate_window(years: &[i32], window: &ReferenceWindow) -> Result<usize, ResampleError> {
    if years.is_empty() {
        return Err(ResampleError::EmptyData);
    }
    let first = years[0];
    let last = *years.last().expect("non-empty");

    let out_of_range = || ResampleError::ReferenceOutOfRange {
        start: window.start(),
        end: window.end(),
        first,
        last,
    };

    let base = years.binary_search(&window.start()).map_err(|_| out_of_range())?;
    if base + window.len() > years.len() {
        return Err(out_of_range());
    }
    for k in 1..window.len() {
        let expected = window.start() + k as i32;
        let found = years[base + k];
        if found != expected {
            return Err(ResampleError::ReferenceGap { expected, found });
        }
    }
    Ok(base)
}
