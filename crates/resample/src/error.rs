//! Error types for the firn-resample crate.

/// Error type for all fallible operations in the firn-resample crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResampleError {
    /// Returned when a forcing series has no annual records.
    #[error("forcing series has no annual records")]
    EmptyData,

    /// Returned when a field's flattened data does not match its shape.
    #[error("field '{field}': shape implies {expected} values, got {got}")]
    ShapeMismatch {
        /// Name of the mismatched field.
        field: String,
        /// Number of values implied by the shape.
        expected: usize,
        /// Actual number of values.
        got: usize,
    },

    /// Returned when a per-year field's leading extent disagrees with the
    /// number of years in the series.
    #[error("field '{field}': expected {expected} annual records, got {got}")]
    LengthMismatch {
        /// Name of the mismatched field.
        field: String,
        /// Expected number of annual records.
        expected: usize,
        /// Actual number of annual records.
        got: usize,
    },

    /// Returned when the year coordinate is not strictly increasing.
    #[error("years not strictly increasing at record {index}: {prev} then {next}")]
    YearsNotIncreasing {
        /// Record index of the offending year.
        index: usize,
        /// Year at the preceding record.
        prev: i32,
        /// Year at the offending record.
        next: i32,
    },

    /// Returned when a reference window has no years in it.
    #[error("empty reference window: [{start}, {end})")]
    EmptyWindow {
        /// First year of the window (inclusive).
        start: i32,
        /// End year of the window (exclusive).
        end: i32,
    },

    /// Returned when a target span ends before it starts.
    #[error("inverted target span: {start}..={end}")]
    InvertedSpan {
        /// First year of the span.
        start: i32,
        /// Last year of the span.
        end: i32,
    },

    /// Returned when the reference window is not covered by the source years.
    #[error(
        "reference window [{start}, {end}) outside source years {first}..={last}"
    )]
    ReferenceOutOfRange {
        /// First year of the window (inclusive).
        start: i32,
        /// End year of the window (exclusive).
        end: i32,
        /// First year present in the source.
        first: i32,
        /// Last year present in the source.
        last: i32,
    },

    /// Returned when the source years skip a year inside the reference window.
    #[error("source years skip {expected} inside the reference window (found {found})")]
    ReferenceGap {
        /// Year the window requires.
        expected: i32,
        /// Year actually present at that position.
        found: i32,
    },
}
