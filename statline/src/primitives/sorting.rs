//! Sorting utilities for sample values.
//!
//! ## Purpose
//!
//! This module provides the ascending sort used to derive the ordered view
//! of a sample, from which the median and its positions are read.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting to preserve the relative order of
//!   equal values.
//! * **Robustness**: Non-finite values (NaN, Inf) are moved to the end of
//!   the sequence; validated samples never contain them.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input.
//! * Finite values appear in non-decreasing order.
//!
//! ## Non-goals
//!
//! * This module does not validate data or compute any statistic.

use std::cmp::Ordering;

use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort values in ascending order, leaving the input untouched.
///
/// Finite values are ordered ascending; non-finite values are placed at
/// the end, keeping their relative insertion order.
pub fn sort_ascending<T: Float>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();

    // Stable sort to preserve order of equal values
    sorted.sort_by(|a, b| match (a.is_finite(), b.is_finite()) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    });

    sorted
}
