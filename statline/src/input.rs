//! Text input handling for sample data.
//!
//! This module defines the [`Sample`] container and the tokenizer that
//! turns raw text into one. Values may be separated by spaces, commas,
//! or any mix of the two.

use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::primitives::errors::StatlineError;

// ============================================================================
// Sample Container
// ============================================================================

/// An unvalidated sequence of numeric values in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample<T> {
    values: Vec<T>,
}

impl<T: Float> Sample<T> {
    /// Wrap already-numeric values, keeping their order.
    pub fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Values in input order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of values in the sample.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the sample contains no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Surrender the values, consuming the sample.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse raw text into a [`Sample`].
///
/// Commas count as spaces, so `"10, 20  30,40"` and `"10 20 30 40"` read
/// identically. Each token must parse as a finite number; the first one
/// that does not is reported with its 1-based position.
pub fn parse<T>(raw: &str) -> Result<Sample<T>, StatlineError>
where
    T: Float + FromStr,
{
    let normalized = raw.replace(',', " ");
    let mut values = Vec::new();

    for (i, token) in normalized.split_whitespace().enumerate() {
        let value: T = token.parse().map_err(|_| StatlineError::InvalidNumber {
            token: token.to_string(),
            position: i + 1,
        })?;

        // Tokens like "NaN" or "inf" parse but are not analyzable numbers
        if !value.is_finite() {
            return Err(StatlineError::InvalidNumber {
                token: token.to_string(),
                position: i + 1,
            });
        }

        values.push(value);
    }

    Ok(Sample { values })
}

impl<T: Float + FromStr> FromStr for Sample<T> {
    type Err = StatlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let sample: Sample<f64> = parse("10, 20  30,40").unwrap();
        assert_eq!(sample.values(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_parse_reports_offending_token() {
        let err = parse::<f64>("10 abc 30").unwrap_err();
        assert_eq!(
            err,
            StatlineError::InvalidNumber {
                token: "abc".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_finite_tokens() {
        assert!(parse::<f64>("1 NaN 3").is_err());
        assert!(parse::<f64>("1 inf 3").is_err());
    }

    #[test]
    fn test_parse_empty_text() {
        let sample: Sample<f64> = parse("").unwrap();
        assert!(sample.is_empty());
    }

    #[test]
    fn test_from_str() {
        let sample: Sample<f64> = "1 2 3".parse().unwrap();
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn test_negative_and_fractional_tokens() {
        let sample: Sample<f64> = parse("-1.5, 2.25, -3e2").unwrap();
        assert_eq!(sample.values(), &[-1.5, 2.25, -300.0]);
    }
}
