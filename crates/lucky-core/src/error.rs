//! # Error Types
//!
//! Input errors for lucky-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lucky-core errors (this file)                                         │
//! │  └── InvalidInputError - non-integer or out-of-range input             │
//! │                                                                         │
//! │  lucky-cli errors (app)                                                │
//! │  └── ConfigError       - bad environment configuration                 │
//! │                                                                         │
//! │  Flow: InvalidInputError → CLI → stderr message + exit code 2          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every message names the offending value and the violated constraint
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Invalid Input Error
// =============================================================================

/// Input rejected by a digit check.
///
/// There is a single error kind for the whole crate: the input was either
/// not an integer at all, or an integer outside the width's range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Text input was empty or only whitespace.
    #[error("input is required: expected an integer")]
    Empty,

    /// Text input could not be read as a whole number.
    ///
    /// ## When This Occurs
    /// - Fractional values such as `12.5`
    /// - Non-numeric text such as `abc`
    /// - Integers too large to represent (beyond `i64`)
    #[error("'{input}' is not an integer")]
    NotAnInteger { input: String },

    /// Integer lies outside the closed range required by the check.
    ///
    /// ## User Workflow
    /// ```text
    /// lucky sum 1000
    ///      │
    ///      ▼
    /// sum_of_digits(1000)
    ///      │
    ///      ▼
    /// OutOfRange { value: 1000, digits: 3, min: 100, max: 999 }
    ///      │
    ///      ▼
    /// stderr: "value 1000 is out of range: must be a 3-digit number between 100 and 999"
    /// ```
    #[error("value {value} is out of range: must be a {digits}-digit number between {min} and {max}")]
    OutOfRange {
        value: i64,
        digits: usize,
        min: i64,
        max: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with InvalidInputError.
pub type CheckResult<T> = Result<T, InvalidInputError>;

// =============================================================================
// Unit Tests
// =============================================================================
