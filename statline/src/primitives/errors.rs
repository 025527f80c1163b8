//! Shared error types for sample analysis.
//!
//! ## Purpose
//!
//! This module defines the unified [`StatlineError`] enum used throughout
//! the crate. Every fallible operation reports one of its variants, each
//! carrying enough context to point at the offending input.
//!
//! ## Design notes
//!
//! * Errors are raised while reading and validating input; once a sample
//!   passes validation, the computation itself cannot fail.
//! * Variants carry the problematic token or count so messages can be
//!   shown to the user verbatim.
//! * Positions in error messages are 1-based, matching how the input is
//!   read aloud.
//!
//! ## Visibility
//!
//! [`StatlineError`] is part of the public API and is re-exported from
//! the API layer.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while turning raw input into an analyzable sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatlineError {
    /// A token could not be read as a finite number.
    #[error("invalid number '{token}' at position {position}")]
    InvalidNumber {
        /// The token as it appeared in the input.
        token: String,

        /// 1-based position of the token within the input.
        position: usize,
    },

    /// The sample is too small for the requested analysis.
    #[error("need at least {min} values to analyze, got {got}")]
    TooFewValues {
        /// Number of values actually supplied.
        got: usize,

        /// Minimum number of values required.
        min: usize,
    },
}
