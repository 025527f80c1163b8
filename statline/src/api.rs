//! High-level API for sample analysis.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: [`analyze`]
//! runs the full pipeline (parse, validate, compute) in one call, and the
//! intermediate pieces are re-exported for callers that need finer
//! control.
//!
//! ## Design notes
//!
//! * **Ergonomic**: One call from raw text to a complete [`Summary`].
//! * **Composable**: [`parse`], [`Validator`], and [`summarize`] remain
//!   available for callers that already hold numeric data.
//! * **Type-Safe**: Generic over `Float` types for flexible precision,
//!   with the [`CheckedSample`] witness keeping unvalidated data out of
//!   the executor.
//!
//! ## Key concepts
//!
//! ### Pipeline Flow
//!
//! 1. [`parse`] raw text into a [`Sample`].
//! 2. [`Validator::validate`] promotes it to a [`CheckedSample`].
//! 3. [`summarize`] computes the [`Summary`].
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use std::result;
use std::str::FromStr;

use num_traits::Float;

// Publicly re-exported types
pub use crate::engine::executor::summarize;
pub use crate::engine::output::{SortedSample, Summary};
pub use crate::engine::validator::{CheckedSample, Validator};
pub use crate::evaluation::diagnostics::TrendDiagnostics;
pub use crate::input::{parse, Sample};
pub use crate::math::central::MedianSpan;
pub use crate::math::frequency::Modes;
pub use crate::math::trend::TrendLine;
pub use crate::primitives::errors::StatlineError;
pub use crate::report::walkthrough::{Step, Walkthrough};

/// Result type alias for sample analysis.
pub type Result<T> = result::Result<T, StatlineError>;

/// Parse, validate, and summarize raw text in one call.
///
/// # Examples
///
/// ```
/// use statline::prelude::*;
///
/// let summary: Summary<f64> = analyze("80 95 110 110 135")?;
///
/// assert_eq!(summary.count, 5);
/// assert_eq!(summary.median, 110.0);
/// assert_eq!(summary.modes.values(), &[110.0]);
/// # Ok::<(), StatlineError>(())
/// ```
pub fn analyze<T>(raw: &str) -> Result<Summary<T>>
where
    T: Float + FromStr,
{
    let sample = parse(raw)?;
    let checked = Validator::validate(sample)?;
    Ok(summarize(checked))
}
