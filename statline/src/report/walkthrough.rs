//! Step-by-step derivation of each computed statistic.
//!
//! ## Purpose
//!
//! This module turns a [`Summary`] into a narrated [`Walkthrough`]: one
//! step per statistic, showing the formula, the numbers substituted into
//! it, a plain-language explanation, and the result.
//!
//! ## Design notes
//!
//! * Steps are data, not formatted text; any front end can render them.
//! * Formulas are written in plain ASCII (`s^2`, `sum(..)`) so they read
//!   the same in a terminal, a log file, or a report.
//! * Substituted numbers are shown at 4 decimal places; counts stay
//!   exact.
//! * The step order follows the computation: mean, median, mode,
//!   variance, standard deviation, trend line, R^2.
//!
//! ## Invariants
//!
//! * Every walkthrough has exactly one step per statistic (7 in total).
//! * Steps narrate the same numbers the summary holds; only the position
//!   sums echoed in the trend step are re-derived.
//!
//! ## Non-goals
//!
//! * This module does not colorize or paginate (front-end concerns).

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::engine::output::Summary;
use crate::math::central::MedianSpan;
use crate::math::frequency::Modes;
use crate::math::trend::PositionSums;

// ============================================================================
// Step Structures
// ============================================================================

/// One narrated derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Name of the statistic being derived.
    pub title: String,

    /// The formula in plain ASCII.
    pub formula: String,

    /// The formula with this sample's numbers substituted.
    pub substitution: String,

    /// Plain-language description of the operation.
    pub explanation: String,

    /// The resulting value, formatted.
    pub result: String,
}

/// Ordered derivation steps for one summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walkthrough {
    /// One step per statistic, in computation order.
    pub steps: Vec<Step>,
}

impl Walkthrough {
    /// Narrate every statistic in `summary`.
    pub fn for_summary<T: Float + fmt::Display>(summary: &Summary<T>) -> Self {
        Self {
            steps: vec![
                mean_step(summary),
                median_step(summary),
                mode_step(summary),
                variance_step(summary),
                std_dev_step(summary),
                trend_step(summary),
                r_squared_step(summary),
            ],
        }
    }
}

impl fmt::Display for Walkthrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Derivation:")?;

        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {}", i + 1, step.title)?;
            writeln!(f, "   Formula:      {}", step.formula)?;
            writeln!(f, "   Substitution: {}", step.substitution)?;
            writeln!(f, "   Explanation:  {}", step.explanation)?;
            writeln!(f, "   Result:       {}", step.result)?;
        }

        Ok(())
    }
}

// ============================================================================
// Step Builders
// ============================================================================

fn join_values<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn mean_step<T: Float + fmt::Display>(summary: &Summary<T>) -> Step {
    Step {
        title: "Mean".to_string(),
        formula: "mean = sum(x_i) / n".to_string(),
        substitution: format!("mean = {:.4} / {}", summary.sum, summary.count),
        explanation: "Add every value together, then divide by how many values there are."
            .to_string(),
        result: format!("{:.4}", summary.mean),
    }
}

fn median_step<T: Float + fmt::Display>(summary: &Summary<T>) -> Step {
    let sorted = join_values(&summary.sorted.values);

    let (formula, substitution) = match summary.sorted.median_span {
        MedianSpan::Single { position } => (
            "median = x_((n + 1) / 2)".to_string(),
            format!("sorted = [{}]; median = value at position {}", sorted, position),
        ),
        MedianSpan::Pair { lower, upper } => (
            "median = (x_(n / 2) + x_(n / 2 + 1)) / 2".to_string(),
            format!(
                "sorted = [{}]; median = ({:.4} + {:.4}) / 2",
                sorted,
                summary.sorted.values[lower - 1],
                summary.sorted.values[upper - 1],
            ),
        ),
    };

    Step {
        title: "Median".to_string(),
        formula,
        substitution,
        explanation: "Sort the values ascending and take the middle one; with an even count, average the two middle values."
            .to_string(),
        result: format!("{:.4}", summary.median),
    }
}

fn mode_step<T: Float + fmt::Display>(summary: &Summary<T>) -> Step {
    let substitution = match &summary.modes {
        Modes::Amodal => "every value occurs exactly once".to_string(),
        Modes::Modal { values, frequency } => {
            if values.len() == 1 {
                format!(
                    "{} occurs {} times, more than any other value",
                    values[0], frequency
                )
            } else {
                format!("{} each occur {} times", join_values(values), frequency)
            }
        }
    };

    Step {
        title: "Mode".to_string(),
        formula: "mode = value(s) with the highest frequency".to_string(),
        substitution,
        explanation: "Count how often each value appears; the mode is the value seen most often."
            .to_string(),
        result: summary.modes.to_string(),
    }
}

fn variance_step<T: Float + fmt::Display>(summary: &Summary<T>) -> Step {
    Step {
        title: "Sample variance".to_string(),
        formula: "s^2 = sum((x_i - mean)^2) / (n - 1)".to_string(),
        substitution: format!(
            "s^2 = {:.4} / {}",
            summary.sum_squared_deviations,
            summary.count - 1
        ),
        explanation: "Square each value's distance from the mean, add them up, and divide by n - 1."
            .to_string(),
        result: format!("{:.4}", summary.sample_variance),
    }
}

fn std_dev_step<T: Float + fmt::Display>(summary: &Summary<T>) -> Step {
    Step {
        title: "Sample standard deviation".to_string(),
        formula: "s = sqrt(s^2)".to_string(),
        substitution: format!("s = sqrt({:.4})", summary.sample_variance),
        explanation: "Take the square root of the sample variance to return to the original units."
            .to_string(),
        result: format!("{:.4}", summary.sample_std_dev),
    }
}

fn trend_step<T: Float + fmt::Display>(summary: &Summary<T>) -> Step {
    let sums = PositionSums::accumulate(&summary.values);

    let substitution = if sums.denominator() == T::zero() {
        "the denominator n*sum(x^2) - sum(x)^2 is 0, so the slope is defined as 0".to_string()
    } else {
        format!(
            "m = ({0}*{1:.4} - {2:.4}*{3:.4}) / ({0}*{4:.4} - {2:.4}^2), b = ({3:.4} - m*{2:.4}) / {0}",
            summary.count, sums.sum_xy, sums.sum_x, sums.sum_y, sums.sum_xx,
        )
    };

    Step {
        title: "Trend line".to_string(),
        formula:
            "m = (n*sum(x*y) - sum(x)*sum(y)) / (n*sum(x^2) - sum(x)^2), b = (sum(y) - m*sum(x)) / n"
                .to_string(),
        substitution,
        explanation: "Fit a straight line through the points (position, value) by least squares; positions count from 0."
            .to_string(),
        result: summary.trend.to_string(),
    }
}

fn r_squared_step<T: Float + fmt::Display>(summary: &Summary<T>) -> Step {
    let substitution = if summary.diagnostics.ss_tot == T::zero() {
        "SS_tot = 0 (every value equals the mean), so R^2 is defined as 1".to_string()
    } else {
        format!(
            "R^2 = 1 - {:.4} / {:.4}",
            summary.diagnostics.ss_res, summary.diagnostics.ss_tot,
        )
    };

    Step {
        title: "Coefficient of determination".to_string(),
        formula: "R^2 = 1 - SS_res / SS_tot".to_string(),
        substitution,
        explanation: "The share of the variation in the values that the trend line accounts for."
            .to_string(),
        result: format!("{:.4}", summary.diagnostics.r_squared),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::analyze;

    #[test]
    fn test_one_step_per_statistic() {
        let summary = analyze::<f64>("1 2 3 4 5").unwrap();
        let walkthrough = Walkthrough::for_summary(&summary);
        assert_eq!(walkthrough.steps.len(), 7);
    }

    #[test]
    fn test_mean_substitution_shows_sum_and_count() {
        let summary = analyze::<f64>("1 2 3 4 5").unwrap();
        let walkthrough = Walkthrough::for_summary(&summary);
        assert_eq!(walkthrough.steps[0].substitution, "mean = 15.0000 / 5");
    }

    #[test]
    fn test_even_median_averages_middle_values() {
        let summary = analyze::<f64>("10 20 30 40").unwrap();
        let step = &Walkthrough::for_summary(&summary).steps[1];
        assert_eq!(
            step.substitution,
            "sorted = [10, 20, 30, 40]; median = (20.0000 + 30.0000) / 2"
        );
    }

    #[test]
    fn test_constant_sample_narrates_degenerate_r_squared() {
        let summary = analyze::<f64>("5 5 5 5").unwrap();
        let walkthrough = Walkthrough::for_summary(&summary);
        assert!(walkthrough.steps[6].substitution.contains("SS_tot = 0"));
    }

    #[test]
    fn test_display_numbers_steps() {
        let summary = analyze::<f64>("1 2 3").unwrap();
        let rendered = Walkthrough::for_summary(&summary).to_string();
        assert!(rendered.contains("1. Mean"));
        assert!(rendered.contains("7. Coefficient of determination"));
        assert!(rendered.contains("Formula:"));
    }
}
