//! Frequency analysis and mode detection.
//!
//! ## Purpose
//!
//! This module counts how often each distinct value occurs, and derives
//! the mode(s) of the sample from those counts.
//!
//! ## Design notes
//!
//! * Counting is a linear scan over `(value, count)` pairs; float values
//!   are compared directly rather than hashed.
//! * First-seen order is preserved, so tied modes are reported in the
//!   order their values first appear in the input.
//! * A sample where every value occurs exactly once has no mode; the
//!   [`Modes::Amodal`] variant makes that case explicit.
//!
//! ## Invariants
//!
//! * `Modal` carries `frequency >= 2`.
//! * `Modal` lists each modal value exactly once, in first-seen order.
//!
//! ## Non-goals
//!
//! * This module does not bucket nearly-equal floats; values tie only
//!   under exact equality.

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

// ============================================================================
// Mode Representation
// ============================================================================

/// Mode(s) of a sample, or the explicit absence of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Modes<T> {
    /// Every value occurs exactly once.
    Amodal,

    /// One or more values tied at the highest frequency.
    Modal {
        /// Modal values in first-seen order.
        values: Vec<T>,

        /// Number of occurrences shared by all modal values.
        frequency: usize,
    },
}

impl<T> Modes<T> {
    /// Check whether the sample has no mode.
    pub fn is_amodal(&self) -> bool {
        matches!(self, Self::Amodal)
    }

    /// Modal values in first-seen order (empty when amodal).
    pub fn values(&self) -> &[T] {
        match self {
            Self::Amodal => &[],
            Self::Modal { values, .. } => values,
        }
    }

    /// Shared frequency of the modal values.
    pub fn frequency(&self) -> Option<usize> {
        match self {
            Self::Amodal => None,
            Self::Modal { frequency, .. } => Some(*frequency),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Modes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amodal => write!(f, "none (amodal)"),
            Self::Modal { values, .. } => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Mode Detection
// ============================================================================

/// Find the value(s) occurring most often.
///
/// Returns [`Modes::Amodal`] when the highest frequency is 1. Values tied
/// at the maximum all count as modes and are listed in first-seen order.
pub fn modes<T: Float>(values: &[T]) -> Modes<T> {
    // (value, count) pairs in first-seen order
    let mut counts: Vec<(T, usize)> = Vec::new();

    for &value in values {
        match counts.iter_mut().find(|entry| entry.0 == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value, 1)),
        }
    }

    let highest = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);
    if highest < 2 {
        return Modes::Amodal;
    }

    Modes::Modal {
        values: counts
            .into_iter()
            .filter(|&(_, count)| count == highest)
            .map(|(value, _)| value)
            .collect(),
        frequency: highest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amodal() {
        assert!(modes(&[1.0, 2.0, 3.0]).is_amodal());
        assert_eq!(modes(&[1.0, 2.0, 3.0]).frequency(), None);
    }

    #[test]
    fn test_single_mode() {
        let result = modes(&[15.0, 20.0, 18.0, 22.0, 15.0, 30.0]);
        assert_eq!(
            result,
            Modes::Modal {
                values: vec![15.0],
                frequency: 2
            }
        );
    }

    #[test]
    fn test_tied_modes_first_seen_order() {
        assert_eq!(modes(&[1.0, 1.0, 2.0, 2.0]).values(), &[1.0, 2.0]);
        assert_eq!(modes(&[2.0, 2.0, 1.0, 1.0]).values(), &[2.0, 1.0]);
    }

    #[test]
    fn test_empty_input_is_amodal() {
        assert!(modes::<f64>(&[]).is_amodal());
    }

    #[test]
    fn test_display() {
        assert_eq!(modes(&[1.0, 1.0, 2.0, 2.0]).to_string(), "1, 2");
        assert_eq!(Modes::<f64>::Amodal.to_string(), "none (amodal)");
    }
}
