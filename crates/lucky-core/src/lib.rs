//! # lucky-core: Pure Digit Logic for Lucky Digits
//!
//! Digit sums of three-digit numbers and lucky ticket checks for six-digit
//! numbers, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Lucky Digits Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    lucky-cli (`lucky` binary)                   │   │
//! │  │        args ──► config ──► tracing ──► stdout / exit code       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lucky-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │   │ validation │  │  digits   │  │  ticket   │  │  error   │  │   │
//! │  │   │ DigitWidth │  │  Digits   │  │  Verdict  │  │ Invalid  │  │   │
//! │  │   │ parse      │  │  sum      │  │  is_lucky │  │ Input    │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SUBSCRIBERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Width ranges and text-to-integer parsing
//! - [`digits`] - Decimal decomposition and digit sum
//! - [`ticket`] - Lucky ticket check
//! - [`error`] - Input error type
//!
//! ## Example Usage
//!
//! ```rust
//! use lucky_core::{is_lucky_ticket, sum_of_digits};
//!
//! assert_eq!(sum_of_digits(123), Ok(6));
//! assert_eq!(is_lucky_ticket(385916), Ok(true));
//!
//! let err = sum_of_digits(1000).unwrap_err();
//! assert!(err.to_string().contains("between 100 and 999"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod digits;
pub mod error;
pub mod ticket;
pub mod validation;

#[cfg(test)]
mod proptests;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use digits::{sum_of_digits, sum_of_digits_str, Digits};
pub use error::{CheckResult, InvalidInputError};
pub use ticket::{check_ticket, is_lucky_ticket, is_lucky_ticket_str, TicketVerdict};
pub use validation::DigitWidth;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sample three-digit number used in docs and as a smoke input.
pub const SAMPLE_THREE_DIGIT: i64 = 123;

/// Sample lucky ticket: 3+8+5 = 9+1+6.
pub const SAMPLE_TICKET: i64 = 385_916;
