//! Input validation for sample analysis.
//!
//! ## Purpose
//!
//! This module checks that a [`Sample`] meets the requirements of the
//! statistics pipeline before any computation begins, providing clear
//! error messages when validation fails. A sample that passes is promoted
//! to a [`CheckedSample`], the only input type the executor accepts.
//!
//! ## Design notes
//!
//! * All validation is performed upfront before computation begins.
//! * Validation is fail-fast: returns on the first error encountered.
//! * Error messages include the specific values and positions involved.
//! * Validation is generic over `Float` types to support f32 and f64.
//! * Checks are ordered from cheap to expensive.
//!
//! ## Validated conditions
//!
//! * **Count**: At least 2 values (variance and the line fit divide by
//!   quantities that vanish below that).
//! * **Finiteness**: Every value finite; NaN and infinities are reported
//!   like unparseable tokens.
//!
//! ## Key concepts
//!
//! ### Fail-Fast Validation
//!
//! Validation stops at the first violation, returning immediately with a
//! descriptive [`StatlineError`].
//!
//! ### Witness Type
//!
//! [`CheckedSample`] can only be constructed here. Holding one proves the
//! checks passed, which is what lets the executor compute without a
//! failure path of its own.
//!
//! ## Invariants
//!
//! * A `CheckedSample` holds at least 2 values, all finite.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not correct invalid inputs.
//!
//! ## Visibility
//!
//! [`Validator`] and [`CheckedSample`] are part of the public API; the
//! witness constructor is private to this module.

use num_traits::Float;

use crate::input::Sample;
use crate::primitives::errors::StatlineError;

// ============================================================================
// Checked Sample
// ============================================================================

/// A sample that passed validation, ready for the executor.
#[derive(Debug, Clone)]
pub struct CheckedSample<T> {
    sample: Sample<T>,
}

impl<T: Float> CheckedSample<T> {
    /// Values in input order.
    pub fn values(&self) -> &[T] {
        self.sample.values()
    }

    /// Number of values in the sample.
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    /// Check whether the sample contains no values (never true after
    /// validation).
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    /// Surrender the values for computation.
    pub(crate) fn into_values(self) -> Vec<T> {
        self.sample.into_values()
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sample data.
///
/// Provides static methods that fail fast upon identifying the first
/// violation, promoting the sample to a [`CheckedSample`] on success.
pub struct Validator;

impl Validator {
    /// Validate a sample for statistical analysis.
    pub fn validate<T: Float>(sample: Sample<T>) -> Result<CheckedSample<T>, StatlineError> {
        // Check 1: Sufficient values for variance and regression
        let n = sample.len();
        if n < 2 {
            return Err(StatlineError::TooFewValues { got: n, min: 2 });
        }

        // Check 2: All values finite
        for (i, &value) in sample.values().iter().enumerate() {
            if !value.is_finite() {
                return Err(StatlineError::InvalidNumber {
                    token: format!("{}", value.to_f64().unwrap_or(f64::NAN)),
                    position: i + 1,
                });
            }
        }

        Ok(CheckedSample { sample })
    }
}
