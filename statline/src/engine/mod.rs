//! Layer 4: Engine
//!
//! Validation, execution, and result assembly.
//!
//! This layer takes a parsed sample through the pipeline: the validator
//! promotes it to a checked sample, the executor orchestrates the math
//! and evaluation layers over it, and the output module defines the
//! result structures everything lands in.
//!
//! # Module Organization
//!
//! - **validator**: Fail-fast input checks and the `CheckedSample` witness
//! - **executor**: Orchestration of the full computation
//! - **output**: `Summary` and `SortedSample` result types
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Report (walkthrough)
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation (diagnostics)
//!   ↓
//! Layer 2: Math (central, dispersion, frequency, trend)
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Input validation.
///
/// Provides:
/// - Fail-fast checks with context-carrying errors
/// - The `CheckedSample` witness required by the executor
pub mod validator;

/// Execution engine.
///
/// Provides:
/// - Single-pass orchestration of every statistic
pub mod executor;

/// Output types.
///
/// Provides:
/// - The `Summary` result structure
/// - The `SortedSample` ordered view with median markings
pub mod output;
