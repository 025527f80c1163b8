//! Output types and result structures for sample analysis.
//!
//! ## Purpose
//!
//! This module defines the [`Summary`] struct which gathers every
//! quantity computed for a sample, and [`SortedSample`], the ordered view
//! with the median positions marked.
//!
//! ## Design notes
//!
//! * All fields are public data; nothing here computes.
//! * Results are generic over `Float` types to support f32 and f64.
//! * Implements `Display` for human-readable output with aligned columns.
//! * Serialization derives on every type so summaries can be stored or
//!   shipped as structured data.
//!
//! ## Available outputs
//!
//! * **Central tendency**: Sum, mean, median (with sorted positions), mode(s)
//! * **Dispersion**: Squared deviations, sample variance, standard deviation
//! * **Trend**: Fitted line over positions, SS_res, SS_tot, R^2
//! * **Views**: Original input order and the ascending sorted view
//!
//! ## Key concepts
//!
//! ### Median Markings
//!
//! The sorted view carries a [`MedianSpan`] so any renderer can point at
//! the exact row(s) the median came from: the middle position for an odd
//! count, the two middle positions for an even one.
//!
//! ## Invariants
//!
//! * `sorted.values` is `values` in ascending order.
//! * `count == values.len() == sorted.values.len()`.
//! * `diagnostics.ss_tot == sum_squared_deviations`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not colorize output (terminal concerns live in the
//!   front end).
//!
//! ## Visibility
//!
//! [`Summary`] is part of the public API and is the primary result type
//! returned by the analysis pipeline.

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::evaluation::diagnostics::TrendDiagnostics;
use crate::math::central::MedianSpan;
use crate::math::frequency::Modes;
use crate::math::trend::TrendLine;

// ============================================================================
// Sorted View
// ============================================================================

/// Ascending view of a sample with its median positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedSample<T> {
    /// Values in ascending order.
    pub values: Vec<T>,

    /// 1-based sorted position(s) the median is read from.
    pub median_span: MedianSpan,
}

impl<T: Float + fmt::Display> fmt::Display for SortedSample<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} {:>12}", "Position", "Value")?;
        writeln!(f, "{:-<width$}", "", width = 21)?;

        for (i, value) in self.values.iter().enumerate() {
            let position = i + 1;
            if self.median_span.contains(position) {
                writeln!(f, "{:>8} {:>12.4} <- median", position, value)?;
            } else {
                writeln!(f, "{:>8} {:>12.4}", position, value)?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Complete set of statistics computed for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary<T> {
    /// Number of values.
    pub count: usize,

    /// Sum of all values.
    pub sum: T,

    /// Arithmetic mean.
    pub mean: T,

    /// Median of the sorted values.
    pub median: T,

    /// Mode(s), or the explicit absence of one.
    pub modes: Modes<T>,

    /// Sum of squared deviations from the mean.
    pub sum_squared_deviations: T,

    /// Bessel-corrected sample variance.
    pub sample_variance: T,

    /// Sample standard deviation.
    pub sample_std_dev: T,

    /// Least-squares line over `(position, value)` pairs.
    pub trend: TrendLine<T>,

    /// Fit-quality measures for the trend line.
    pub diagnostics: TrendDiagnostics<T>,

    /// Ascending view with median positions marked.
    pub sorted: SortedSample<T>,

    /// Values in their original input order.
    pub values: Vec<T>,
}

impl<T: Float> Summary<T> {
    /// Fitted trend value at each original position.
    pub fn fitted(&self) -> Vec<T> {
        (0..self.count)
            .map(|i| self.trend.predict(T::from(i).unwrap()))
            .collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Count: {}", self.count)?;
        writeln!(f, "  Mean: {:.4}", self.mean)?;
        writeln!(f, "  Median: {:.4}", self.median)?;
        writeln!(f, "  Modes: {}", self.modes)?;
        writeln!(f, "  Sample variance: {:.4}", self.sample_variance)?;
        writeln!(f, "  Sample std dev: {:.4}", self.sample_std_dev)?;
        writeln!(f, "  Trend: {}", self.trend)?;
        writeln!(f, "  R^2: {:.4}", self.diagnostics.r_squared)?;
        writeln!(f)?;

        writeln!(f, "Values:")?;
        writeln!(f, "{:>8} {:>12} {:>12}", "Position", "Value", "Trend")?;
        writeln!(f, "{:-<width$}", "", width = 34)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.count;
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let fitted = self.fitted();
        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8} {:>12.4} {:>12.4}",
                idx + 1,
                self.values[idx],
                fitted[idx]
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> Summary<f64> {
        Summary {
            count: 3,
            sum: 6.0,
            mean: 2.0,
            median: 2.0,
            modes: Modes::Amodal,
            sum_squared_deviations: 2.0,
            sample_variance: 1.0,
            sample_std_dev: 1.0,
            trend: TrendLine {
                slope: 1.0,
                intercept: 1.0,
            },
            diagnostics: TrendDiagnostics {
                ss_res: 0.0,
                ss_tot: 2.0,
                r_squared: 1.0,
            },
            sorted: SortedSample {
                values: vec![1.0, 2.0, 3.0],
                median_span: MedianSpan::Single { position: 2 },
            },
            values: vec![1.0, 2.0, 3.0],
        }
    }

    #[test]
    fn test_fitted_values() {
        let summary = sample_summary();
        assert_eq!(summary.fitted(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_summary_display_sections() {
        let rendered = sample_summary().to_string();
        assert!(rendered.contains("Summary:"));
        assert!(rendered.contains("Count: 3"));
        assert!(rendered.contains("Mean: 2.0000"));
        assert!(rendered.contains("Modes: none (amodal)"));
        assert!(rendered.contains("Trend: y = 1.0000x + 1.0000"));
        assert!(rendered.contains("Values:"));
    }

    #[test]
    fn test_sorted_display_marks_median_row() {
        let rendered = sample_summary().sorted.to_string();
        let marked: Vec<&str> = rendered
            .lines()
            .filter(|line| line.contains("<- median"))
            .collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("2.0000"));
    }

    #[test]
    fn test_long_table_elides_middle_rows() {
        let values: Vec<f64> = (1..=30).map(|v| v as f64).collect();
        let mut summary = sample_summary();
        summary.count = 30;
        summary.sorted.values = values.clone();
        summary.values = values;

        let rendered = summary.to_string();
        assert!(rendered.contains("..."));
        assert!(!rendered.contains("15.0000"));
    }
}
