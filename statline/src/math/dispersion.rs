//! Dispersion measures for numeric samples.
//!
//! ## Purpose
//!
//! This module provides the squared-deviation kernels behind the sample
//! variance and standard deviation.
//!
//! ## Design notes
//!
//! * The variance uses Bessel's correction, dividing by `n - 1`.
//! * The summed squared deviations are exposed separately because the
//!   trend diagnostics reuse them as the total sum of squares.
//! * All kernels are generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Sample Variance
//!
//! s^2 = sum((x_i - mean)^2) / (n - 1)
//!
//! Dividing by `n - 1` rather than `n` keeps the estimator unbiased when
//! the mean itself was estimated from the same sample.
//!
//! ## Invariants
//!
//! * `sum_squared_deviations` >= 0 for any input.
//! * `sample_variance` requires at least 2 values.
//!
//! ## Non-goals
//!
//! * This module does not compute the mean (the caller supplies it).

use num_traits::Float;

// ============================================================================
// Kernels
// ============================================================================

/// Sum of squared deviations from the mean.
///
/// # Formula
///
/// ```text
/// SS = sum((x_i - mean)^2)
/// ```
#[inline]
pub fn sum_squared_deviations<T: Float>(values: &[T], mean: T) -> T {
    values.iter().fold(T::zero(), |acc, &v| {
        let deviation = v - mean;
        acc + deviation * deviation
    })
}

/// Bessel-corrected sample variance from precomputed squared deviations.
///
/// # Formula
///
/// ```text
/// s^2 = SS / (n - 1)
/// ```
pub fn sample_variance<T: Float>(squared_deviations: T, n: usize) -> T {
    debug_assert!(n >= 2, "sample variance requires at least 2 values");

    squared_deviations / T::from(n - 1).unwrap()
}
