//! Least-squares trend fitting over sample positions.
//!
//! ## Purpose
//!
//! This module fits the ordinary least-squares line through the points
//! `(i, x_i)`, where `i` is the 0-based position of each value. The line
//! summarizes the drift of the sample in the order it was given.
//!
//! ## Design notes
//!
//! * The fit uses the closed-form normal equations over running sums; no
//!   matrix machinery is involved.
//! * A denominator of exactly 0 (all positions identical, which only a
//!   single point produces) yields slope 0 and the mean as intercept
//!   rather than an error.
//! * All kernels are generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Normal Equations
//!
//! With x the positions and y the values:
//! m = (n*sum(xy) - sum(x)*sum(y)) / (n*sum(x^2) - sum(x)^2)
//! b = (sum(y) - m*sum(x)) / n
//!
//! ## Invariants
//!
//! * [`PositionSums`] holds exactly the five sums the equations need.
//! * `slope` is 0 whenever the denominator is exactly 0.
//!
//! ## Non-goals
//!
//! * This module does not judge fit quality (see the evaluation layer).

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

// ============================================================================
// Accumulated Sums
// ============================================================================

/// Running sums over `(position, value)` pairs used by the normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSums<T> {
    /// Number of points.
    pub n: usize,

    /// Sum of positions.
    pub sum_x: T,

    /// Sum of values.
    pub sum_y: T,

    /// Sum of squared positions.
    pub sum_xx: T,

    /// Sum of position-value products.
    pub sum_xy: T,
}

impl<T: Float> PositionSums<T> {
    /// Accumulate the sums for a slice of values at positions `0..n`.
    pub fn accumulate(values: &[T]) -> Self {
        let mut sum_x = T::zero();
        let mut sum_y = T::zero();
        let mut sum_xx = T::zero();
        let mut sum_xy = T::zero();

        for (i, &y) in values.iter().enumerate() {
            let x = T::from(i).unwrap();
            sum_x = sum_x + x;
            sum_y = sum_y + y;
            sum_xx = sum_xx + x * x;
            sum_xy = sum_xy + x * y;
        }

        Self {
            n: values.len(),
            sum_x,
            sum_y,
            sum_xx,
            sum_xy,
        }
    }

    /// Denominator of the slope equation: `n*sum(x^2) - sum(x)^2`.
    pub fn denominator(&self) -> T {
        let n = T::from(self.n).unwrap();
        n * self.sum_xx - self.sum_x * self.sum_x
    }
}

// ============================================================================
// Fitted Line
// ============================================================================

/// Least-squares line `y = slope * x + intercept` over positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine<T> {
    /// Change in value per step along the sample.
    pub slope: T,

    /// Fitted value at position 0.
    pub intercept: T,
}

impl<T: Float> TrendLine<T> {
    /// Fit the line from accumulated sums.
    ///
    /// # Formula
    ///
    /// ```text
    /// m = (n*sum(xy) - sum(x)*sum(y)) / (n*sum(x^2) - sum(x)^2)
    /// b = (sum(y) - m*sum(x)) / n
    /// ```
    ///
    /// When the denominator is exactly 0 the slope is defined as 0, which
    /// degenerates the intercept to the mean of the values.
    pub fn fit(sums: &PositionSums<T>) -> Self {
        debug_assert!(sums.n > 0, "trend fit requires at least one point");

        let n = T::from(sums.n).unwrap();
        let denominator = sums.denominator();

        let slope = if denominator == T::zero() {
            T::zero()
        } else {
            (n * sums.sum_xy - sums.sum_x * sums.sum_y) / denominator
        };
        let intercept = (sums.sum_y - slope * sums.sum_x) / n;

        Self { slope, intercept }
    }

    /// Fitted value at position `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

impl<T: Float + fmt::Display> fmt::Display for TrendLine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intercept < T::zero() {
            write!(f, "y = {:.4}x - {:.4}", self.slope, self.intercept.abs())
        } else {
            write!(f, "y = {:.4}x + {:.4}", self.slope, self.intercept)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let sums = PositionSums::accumulate(&[2.0, 4.0, 6.0]);
        assert_eq!(sums.n, 3);
        assert_eq!(sums.sum_x, 3.0);
        assert_eq!(sums.sum_y, 12.0);
        assert_eq!(sums.sum_xx, 5.0);
        assert_eq!(sums.sum_xy, 16.0);
    }

    #[test]
    fn test_fit_perfect_line() {
        let sums = PositionSums::accumulate(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        let line = TrendLine::fit(&sums);
        assert!((line.slope - 2.0).abs() < 1e-12);
        assert!((line.intercept - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_constant_values() {
        let sums = PositionSums::accumulate(&[5.0, 5.0, 5.0, 5.0]);
        let line = TrendLine::fit(&sums);
        assert_eq!(line.slope, 0.0);
        assert_eq!(line.intercept, 5.0);
    }

    #[test]
    fn test_zero_denominator_defines_zero_slope() {
        let sums = PositionSums::accumulate(&[7.0]);
        assert_eq!(sums.denominator(), 0.0);

        let line = TrendLine::fit(&sums);
        assert_eq!(line.slope, 0.0);
        assert_eq!(line.intercept, 7.0);
    }

    #[test]
    fn test_predict() {
        let line = TrendLine {
            slope: 2.0,
            intercept: 1.0,
        };
        assert_eq!(line.predict(3.0), 7.0);
    }

    #[test]
    fn test_display_negative_intercept() {
        let line = TrendLine {
            slope: 1.5,
            intercept: -2.0,
        };
        assert_eq!(line.to_string(), "y = 1.5000x - 2.0000");
    }
}
