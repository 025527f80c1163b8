//! Goodness-of-fit diagnostics for the trend line.
//!
//! ## Purpose
//!
//! This module measures how much of the sample's variation the fitted
//! trend line accounts for, via the residual and total sums of squares
//! and the coefficient of determination.
//!
//! ## Design notes
//!
//! * The total sum of squares is supplied by the caller; the executor
//!   already computed it for the variance, and the two must agree.
//! * A zero total sum of squares (constant sample) defines R^2 = 1: the
//!   horizontal fit reproduces every value exactly.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Coefficient of Determination
//!
//! R^2 = 1 - SS_res / SS_tot
//!
//! where SS_res = sum((y_i - y_hat_i)^2) and SS_tot = sum((y_i - mean)^2).
//! R^2 = 1 means the line passes through every point; R^2 = 0 means it
//! explains no more than the mean does.
//!
//! ## Invariants
//!
//! * `ss_res` and `ss_tot` are non-negative.
//! * `r_squared` is exactly 1 whenever `ss_tot` is 0.
//!
//! ## Non-goals
//!
//! * This module does not fit the line (see the math layer).

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::math::trend::TrendLine;

// ============================================================================
// Diagnostics
// ============================================================================

/// Fit-quality measures for a trend line over positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendDiagnostics<T> {
    /// Residual sum of squares: sum((y_i - y_hat_i)^2).
    pub ss_res: T,

    /// Total sum of squares: sum((y_i - mean)^2).
    pub ss_tot: T,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> TrendDiagnostics<T> {
    /// Evaluate a fitted line against the values it was fitted to.
    ///
    /// `ss_tot` is the precomputed total sum of squares of `values`.
    ///
    /// # Formula
    ///
    /// ```text
    /// R^2 = 1 - SS_res / SS_tot    (R^2 = 1 when SS_tot = 0)
    /// ```
    pub fn compute(values: &[T], trend: &TrendLine<T>, ss_tot: T) -> Self {
        let mut ss_res = T::zero();

        for (i, &y) in values.iter().enumerate() {
            let residual = y - trend.predict(T::from(i).unwrap());
            ss_res = ss_res + residual * residual;
        }

        let r_squared = if ss_tot == T::zero() {
            T::one()
        } else {
            T::one() - ss_res / ss_tot
        };

        Self {
            ss_res,
            ss_tot,
            r_squared,
        }
    }
}
