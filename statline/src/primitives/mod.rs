//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the shared error type and the low-level helpers
//! used throughout the crate. It has zero internal dependencies within
//! the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (StatlineError)
//! - **sorting**: Low-level sorting helpers
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Report (walkthrough)
//!   ↓
//! Layer 4: Engine (validator, executor, output)
//!   ↓
//! Layer 3: Evaluation (diagnostics)
//!   ↓
//! Layer 2: Math (central, dispersion, frequency, trend)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `StatlineError` enum
/// - Variants carrying the offending token or count
pub mod errors;

/// Sorting utilities.
///
/// Provides:
/// - Stable ascending sort for float slices
pub mod sorting;
