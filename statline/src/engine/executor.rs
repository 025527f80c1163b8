//! Execution engine for sample analysis.
//!
//! ## Purpose
//!
//! This module orchestrates the full computation over a validated sample:
//! central tendency, dispersion, mode detection, trend fitting, and fit
//! diagnostics, assembled into a single [`Summary`].
//!
//! ## Design notes
//!
//! * The executor is infallible: every failure mode is caught during
//!   validation, so this stage only computes.
//! * Each quantity is computed once and shared; the squared-deviation sum
//!   feeds both the variance and the diagnostics' total sum of squares.
//! * The same sample always produces the identical summary.
//!
//! ## Execution Flow
//!
//! 1. Sum the values and derive the mean.
//! 2. Sort a copy ascending; read the median and its positions.
//! 3. Count frequencies for the mode(s).
//! 4. Accumulate squared deviations; derive variance and std deviation.
//! 5. Fit the trend line over `(position, value)` pairs.
//! 6. Evaluate the fit (SS_res, SS_tot, R^2).
//! 7. Assemble the [`Summary`].
//!
//! ## Invariants
//!
//! * The input holds at least 2 finite values (guaranteed by the
//!   validator).
//! * The sorted view is a permutation of the input values.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not format output (handled by `output` and the
//!   report layer).

use num_traits::Float;

use crate::engine::output::{SortedSample, Summary};
use crate::engine::validator::CheckedSample;
use crate::evaluation::diagnostics::TrendDiagnostics;
use crate::math::central::{self, MedianSpan};
use crate::math::dispersion;
use crate::math::frequency;
use crate::math::trend::{PositionSums, TrendLine};
use crate::primitives::sorting::sort_ascending;

// ============================================================================
// Execution
// ============================================================================

/// Compute every statistic for a validated sample.
pub fn summarize<T: Float>(checked: CheckedSample<T>) -> Summary<T> {
    let values = checked.into_values();
    let count = values.len();

    // Central tendency
    let sum = central::total(&values);
    let mean = sum / T::from(count).unwrap();
    let sorted_values = sort_ascending(&values);
    let median = central::median(&sorted_values);
    let median_span = MedianSpan::of_len(count);

    // Frequencies
    let modes = frequency::modes(&values);

    // Dispersion
    let sum_squared_deviations = dispersion::sum_squared_deviations(&values, mean);
    let sample_variance = dispersion::sample_variance(sum_squared_deviations, count);
    let sample_std_dev = sample_variance.sqrt();

    // Trend and fit quality; SS_tot is the same squared-deviation sum
    let trend = TrendLine::fit(&PositionSums::accumulate(&values));
    let diagnostics = TrendDiagnostics::compute(&values, &trend, sum_squared_deviations);

    Summary {
        count,
        sum,
        mean,
        median,
        modes,
        sum_squared_deviations,
        sample_variance,
        sample_std_dev,
        trend,
        diagnostics,
        sorted: SortedSample {
            values: sorted_values,
            median_span,
        },
        values,
    }
}
