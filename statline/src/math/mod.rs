//! Layer 2: Math
//!
//! Pure numeric kernels.
//!
//! This layer provides the arithmetic building blocks of the pipeline:
//! sums and medians, squared-deviation measures, frequency counting, and
//! the least-squares trend fit. Every kernel is generic over `Float`
//! types and free of I/O.
//!
//! # Module Organization
//!
//! - **central**: Sum, median, and median position bookkeeping
//! - **dispersion**: Squared deviations and sample variance
//! - **frequency**: Mode detection
//! - **trend**: Least-squares line fitting over positions
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
//! Layer 3: Evaluation (diagnostics)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Central tendency kernels.
///
/// Provides:
/// - Sum and median of sorted data
/// - Median position bookkeeping (`MedianSpan`)
pub mod central;

/// Dispersion kernels.
///
/// Provides:
/// - Sum of squared deviations
/// - Bessel-corrected sample variance
pub mod dispersion;

/// Frequency analysis.
///
/// Provides:
/// - Occurrence counting with first-seen ordering
/// - Mode detection (`Modes`)
pub mod frequency;

/// Trend-line fitting.
///
/// Provides:
/// - Normal-equation sums (`PositionSums`)
/// - Least-squares fit over positions (`TrendLine`)
pub mod trend;
