//! In-memory model of an annual forcing dataset.

use crate::error::ResampleError;

/// One named variable of a forcing dataset.
///
/// Values are stored flattened in row-major order with the dimension names
/// and extents kept alongside. A *per-year* field has the time dimension
/// first, one record per calendar year; any other field is an opaque block
/// that travels through resampling unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ForcingField {
    name: String,
    dims: Vec<String>,
    shape: Vec<usize>,
    values: Vec<f64>,
    per_year: bool,
}

impl ForcingField {
    /// Creates a per-year field (leading dimension is time).
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::ShapeMismatch`] if `values` does not hold
    /// exactly the number of elements the shape implies, or
    /// [`ResampleError::EmptyData`] if the shape has no dimensions at all.
    pub fn per_year(
        name: impl Into<String>,
        dims: Vec<String>,
        shape: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, ResampleError> {
        if shape.is_empty() {
            return Err(ResampleError::EmptyData);
        }
        Self::build(name.into(), dims, shape, values, true)
    }

    /// Creates a field without a time dimension (copied through verbatim).
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::ShapeMismatch`] if `values` does not hold
    /// exactly the number of elements the shape implies.
    pub fn constant(
        name: impl Into<String>,
        dims: Vec<String>,
        shape: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, ResampleError> {
        Self::build(name.into(), dims, shape, values, false)
    }

    fn build(
        name: String,
        dims: Vec<String>,
        shape: Vec<usize>,
        values: Vec<f64>,
        per_year: bool,
    ) -> Result<Self, ResampleError> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(ResampleError::ShapeMismatch {
                field: name,
                expected,
                got: values.len(),
            });
        }
        Ok(Self {
            name,
            dims,
            shape,
            values,
            per_year,
        })
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimension names.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Returns the dimension extents.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the flattened values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns `true` if the field carries one record per calendar year.
    pub fn is_per_year(&self) -> bool {
        self.per_year
    }

    /// Returns the number of values in one annual record.
    ///
    /// For a per-year field this is the product of the trailing extents
    /// (1 for a 1-D series). Meaningless for constant fields.
    pub fn record_len(&self) -> usize {
        if self.per_year {
            self.shape[1..].iter().product()
        } else {
            self.values.len()
        }
    }

    /// Returns the flattened values of the `i`-th annual record.
    ///
    /// # Panics
    ///
    /// Panics if the field is not per-year or `i` is out of range; callers
    /// index with offsets produced against the owning series.
    pub fn record(&self, i: usize) -> &[f64] {
        debug_assert!(self.per_year, "record() on a constant field");
        let len = self.record_len();
        &self.values[i * len..(i + 1) * len]
    }
}

/// An annual forcing dataset held fully in memory.
///
/// Invariant: the year coordinate is unique and strictly increasing, and
/// every per-year field carries exactly one record per year. Both are
/// enforced at construction; a `ForcingSeries` is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ForcingSeries {
    years: Vec<i32>,
    fields: Vec<ForcingField>,
}

impl ForcingSeries {
    /// Builds a series from a year coordinate and a set of fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::EmptyData`] for an empty year coordinate,
    /// [`ResampleError::YearsNotIncreasing`] if the years are not strictly
    /// increasing, or [`ResampleError::LengthMismatch`] if a per-year field
    /// does not have one record per year.
    pub fn new(years: Vec<i32>, fields: Vec<ForcingField>) -> Result<Self, ResampleError> {
        if years.is_empty() {
            return Err(ResampleError::EmptyData);
        }
        for (i, pair) in years.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ResampleError::YearsNotIncreasing {
                    index: i + 1,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        for field in &fields {
            if field.is_per_year() && field.shape()[0] != years.len() {
                return Err(ResampleError::LengthMismatch {
                    field: field.name().to_string(),
                    expected: years.len(),
                    got: field.shape()[0],
                });
            }
        }
        Ok(Self { years, fields })
    }

    /// Returns the year coordinate.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the number of annual records.
    pub fn n_years(&self) -> usize {
        self.years.len()
    }

    /// Returns the first year present.
    pub fn first_year(&self) -> i32 {
        self.years[0]
    }

    /// Returns the last year present.
    pub fn last_year(&self) -> i32 {
        *self.years.last().expect("series is never empty")
    }

    /// Returns all fields.
    pub fn fields(&self) -> &[ForcingField] {
        &self.fields
    }

    /// Returns the field with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&ForcingField> {
        self.fields.iter().find(|f| f.name() == name)
    }
}
