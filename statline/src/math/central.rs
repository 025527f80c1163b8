//! Central tendency kernels for numeric samples.
//!
//! ## Purpose
//!
//! This module provides the sum and median computations, plus the
//! bookkeeping for which sorted positions the median is read from.
//!
//! ## Design notes
//!
//! * The median operates on an already-sorted slice; sorting is owned by
//!   the primitives layer.
//! * Positions are 1-based, matching how an ordered table is read.
//! * All kernels are generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Median of a Sorted Sample
//!
//! For an odd count the median is the single middle value:
//! median = x_((n + 1) / 2).
//! For an even count it is the mean of the two middle values:
//! median = (x_(n / 2) + x_(n / 2 + 1)) / 2.
//!
//! ## Invariants
//!
//! * `median` requires a non-empty sorted slice.
//! * The positions reported by [`MedianSpan`] lie within `1..=n`.
//!
//! ## Non-goals
//!
//! * This module does not sort or validate input data.

use num_traits::Float;
use serde::{Deserialize, Serialize};

// ============================================================================
// Median Positions
// ============================================================================

/// Sorted positions (1-based) the median is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedianSpan {
    /// Odd count: the single middle position.
    Single {
        /// Position `(n + 1) / 2`.
        position: usize,
    },

    /// Even count: the two middle positions whose values are averaged.
    Pair {
        /// Position `n / 2`.
        lower: usize,

        /// Position `n / 2 + 1`.
        upper: usize,
    },
}

impl MedianSpan {
    /// Median positions for a sample of `n` values.
    pub fn of_len(n: usize) -> Self {
        debug_assert!(n > 0, "median positions require a non-empty sample");

        if n % 2 == 1 {
            Self::Single {
                position: (n + 1) / 2,
            }
        } else {
            Self::Pair {
                lower: n / 2,
                upper: n / 2 + 1,
            }
        }
    }

    /// Check whether a 1-based sorted position contributes to the median.
    pub fn contains(&self, position: usize) -> bool {
        match *self {
            Self::Single { position: p } => position == p,
            Self::Pair { lower, upper } => position == lower || position == upper,
        }
    }
}

// ============================================================================
// Kernels
// ============================================================================

/// Sum of all values.
#[inline]
pub fn total<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Median of an already-sorted slice.
///
/// # Formula
///
/// ```text
/// odd n:  median = x_((n + 1) / 2)
/// even n: median = (x_(n / 2) + x_(n / 2 + 1)) / 2
/// ```
pub fn median<T: Float>(sorted: &[T]) -> T {
    debug_assert!(!sorted.is_empty(), "median requires at least one value");

    let n = sorted.len();
    let mid = n / 2;

    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / T::from(2.0).unwrap()
    }
}
