//! Layer 5: Report
//!
//! Narrated derivations of computed results.
//!
//! This layer re-expresses a finished summary as teaching material: each
//! statistic with its formula, the substituted numbers, and a
//! plain-language explanation.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Report ← You are here
//!   ↓
//! Layer 4: Engine (validator, executor, output)
//!   ↓
//! Layer 3: Evaluation (diagnostics)
//!   ↓
//! Layer 2: Math (central, dispersion, frequency, trend)
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Step-by-step derivations.
///
/// Provides:
/// - `Walkthrough` and `Step` report structures
/// - One narrated step per computed statistic
pub mod walkthrough;
