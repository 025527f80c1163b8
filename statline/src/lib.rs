//! Descriptive statistics and trend analysis for numeric samples.
//!
//! `statline` takes a list of numbers (as raw text or as values),
//! validates it, and computes the full set of descriptive statistics:
//! mean, median (with its sorted positions), mode(s), sample variance and
//! standard deviation, plus a least-squares trend line over the input
//! order and its R^2. Results come back as one plain data structure,
//! ready to render, serialize, or inspect.
//!
//! # Quick Start
//!
//! ```
//! use statline::prelude::*;
//!
//! let summary: Summary<f64> = analyze("2 4 6 8 10")?;
//!
//! assert_eq!(summary.mean, 6.0);
//! assert_eq!(summary.trend.slope, 2.0);
//! # Ok::<(), StatlineError>(())
//! ```
//!
//! # Architecture
//!
//! The crate is arranged in layers; each depends only on those below it:
//!
//! ```text
//! Layer 6: API (api)
//!   ↓
//! Layer 5: Report (walkthrough)
//!   ↓
//! Layer 4: Engine (validator, executor, output)
//!   ↓
//! Layer 3: Evaluation (diagnostics)
//!   ↓
//! Layer 2: Math (central, dispersion, frequency, trend)
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```
//!
//! Text input handling (`input`) sits beside the API and feeds the
//! engine.

pub mod api;
pub mod engine;
pub mod evaluation;
pub mod input;
pub mod math;
pub mod primitives;
pub mod report;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::api::{
        analyze, parse, summarize, CheckedSample, MedianSpan, Modes, Result, Sample, SortedSample,
        StatlineError, Step, Summary, TrendDiagnostics, TrendLine, Validator, Walkthrough,
    };
}
