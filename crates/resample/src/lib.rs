//! Bootstrap resampling of annual forcing series.
//!
//! This crate turns a historical forcing series into a longer synthetic one
//! by sampling whole years, with replacement, from a reference window:
//!
//! ```text
//!  ┌──────────────┐     ┌─────────────────┐     ┌──────────────────┐
//!  │ ForcingSeries │────▶│  sample_indices  │────▶│  extend_series   │
//!  │ (years+fields)│     │ (seeded bootstrap)│     │ (gather records) │
//!  └──────────────┘     └─────────────────┘     └──────────────────┘
//! ```
//!
//! The transform is a pure, single-pass operation: it validates its inputs,
//! draws one source year per output year, and assembles a fresh series.
//! There is no retry and no partial output; any error aborts the whole
//! operation. Randomness always enters through a caller-supplied
//! `&mut impl rand::Rng`, so a fixed seed gives byte-identical results.
//!
//! # Quick start
//!
//! ```
//! use firn_resample::{ForcingField, ForcingSeries, ReferenceWindow, TargetSpan, extend_series};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let years: Vec<i32> = (1995..=2005).collect();
//! let smb: Vec<f64> = years.iter().map(|&y| y as f64).collect();
//! let field = ForcingField::per_year("smb", vec!["Time".into()], vec![11], smb).unwrap();
//! let source = ForcingSeries::new(years, vec![field]).unwrap();
//!
//! let window = ReferenceWindow::new(1995, 2000).unwrap();
//! let span = TargetSpan::new(2101, 2300).unwrap();
//! let mut rng = StdRng::seed_from_u64(4727);
//!
//! let extended = extend_series(&source, &window, &span, &mut rng).unwrap();
//! assert_eq!(extended.n_years(), 200);
//! ```

mod error;
mod extend;
mod sample;
mod series;
mod window;

pub use error::ResampleError;
pub use extend::extend_series;
pub use sample::{bootstrap_offsets, sample_indices};
pub use series::{ForcingField, ForcingSeries};
pub use window::{ReferenceWindow, TargetSpan};
