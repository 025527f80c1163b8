//! Layer 3: Evaluation
//!
//! Post-processing and fit evaluation.
//!
//! This layer judges the quality of the fitted trend line using the
//! residual and total sums of squares and the coefficient of
//! determination.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Report (walkthrough)
//!   ↓
//! Layer 4: Engine (validator, executor, output)
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Math (central, dispersion, frequency, trend)
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Diagnostic metrics for fit quality assessment.
///
/// Provides:
/// - Residual and total sums of squares
/// - Coefficient of determination (R^2)
pub mod diagnostics;
