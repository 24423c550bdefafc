//! # Validation Module
//!
//! Input validation for the digit checks.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Text (CLI argument, user input)                              │
//! │  └── parse_integer: empty? fractional? not a number?                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Range (THIS MODULE)                                          │
//! │  └── validate_width: 100..=999 or 100000..=999999                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Digits                                                       │
//! │  └── decomposition always yields exactly width.digit_count() digits    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lucky_core::validation::{parse_integer, validate_width, DigitWidth};
//!
//! let n = parse_integer(" 385916 ").unwrap();
//! assert_eq!(validate_width(n, DigitWidth::Six), Ok(385916));
//! assert!(validate_width(n, DigitWidth::Three).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CheckResult, InvalidInputError};

// =============================================================================
// Digit Width
// =============================================================================

/// Fixed number width accepted by a check.
///
/// Each width maps to a closed range with no leading zeros:
///
/// | Width   | Digits | Range               |
/// |---------|--------|---------------------|
/// | `Three` | 3      | `100..=999`         |
/// | `Six`   | 6      | `100000..=999999`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitWidth {
    /// Three-digit numbers (digit sum).
    Three,
    /// Six-digit numbers (lucky ticket).
    Six,
}

impl DigitWidth {
    /// Number of decimal digits in this width.
    pub const fn digit_count(self) -> usize {
        match self {
            DigitWidth::Three => 3,
            DigitWidth::Six => 6,
        }
    }

    /// Smallest value of this width.
    pub const fn min(self) -> i64 {
        match self {
            DigitWidth::Three => 100,
            DigitWidth::Six => 100_000,
        }
    }

    /// Largest value of this width.
    pub const fn max(self) -> i64 {
        match self {
            DigitWidth::Three => 999,
            DigitWidth::Six => 999_999,
        }
    }

    /// Returns true if `value` has exactly this many digits.
    pub fn contains(self, value: i64) -> bool {
        (self.min()..=self.max()).contains(&value)
    }
}

impl fmt::Display for DigitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-digit", self.digit_count())
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Validates that `value` lies within the closed range of `width`.
///
/// ## Returns
/// The value narrowed to `u32` (every width fits), ready for decomposition.
///
/// ## Example
/// ```rust
/// use lucky_core::validation::{validate_width, DigitWidth};
///
/// assert_eq!(validate_width(100, DigitWidth::Three), Ok(100));
/// assert!(validate_width(99, DigitWidth::Three).is_err());
/// assert!(validate_width(-5, DigitWidth::Three).is_err());
/// ```
pub fn validate_width(value: i64, width: DigitWidth) -> CheckResult<u32> {
    let out_of_range = || InvalidInputError::OutOfRange {
        value,
        digits: width.digit_count(),
        min: width.min(),
        max: width.max(),
    };

    if !width.contains(value) {
        return Err(out_of_range());
    }

    u32::try_from(value).map_err(|_| out_of_range())
}

/// Parses user text into an integer.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - An optional leading `+` or `-` sign is accepted
/// - Anything else that is not a base-10 whole number is rejected
///
/// ## Example
/// ```rust
/// use lucky_core::validation::parse_integer;
/// use lucky_core::InvalidInputError;
///
/// assert_eq!(parse_integer("123"), Ok(123));
/// assert_eq!(parse_integer("-5"), Ok(-5));
/// assert_eq!(parse_integer(""), Err(InvalidInputError::Empty));
/// assert!(parse_integer("12.5").is_err());
/// ```
pub fn parse_integer(text: &str) -> CheckResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    text.parse::<i64>()
        .map_err(|_| InvalidInputError::NotAnInteger {
            input: text.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bounds() {
        assert_eq!(DigitWidth::Three.digit_count(), 3);
        assert_eq!(DigitWidth::Six.digit_count(), 6);

        for width in [DigitWidth::Three, DigitWidth::Six] {
            assert_eq!(width.min().to_string().len(), width.digit_count());
            assert_eq!(width.max().to_string().len(), width.digit_count());
            assert!(!width.contains(width.min() - 1));
            assert!(!width.contains(width.max() + 1));
        }
    }

    #[test]
    fn test_validate_width_three() {
        assert_eq!(validate_width(100, DigitWidth::Three), Ok(100));
        assert_eq!(validate_width(999, DigitWidth::Three), Ok(999));

        assert!(validate_width(99, DigitWidth::Three).is_err());
        assert!(validate_width(1000, DigitWidth::Three).is_err());
        assert!(validate_width(0, DigitWidth::Three).is_err());
        assert!(validate_width(-5, DigitWidth::Three).is_err());
        assert!(validate_width(-123, DigitWidth::Three).is_err());
    }

    #[test]
    fn test_validate_width_six() {
        assert_eq!(validate_width(100_000, DigitWidth::Six), Ok(100_000));
        assert_eq!(validate_width(999_999, DigitWidth::Six), Ok(999_999));

        assert!(validate_width(99_999, DigitWidth::Six).is_err());
        assert!(validate_width(1_000_000, DigitWidth::Six).is_err());
        assert!(validate_width(i64::MAX, DigitWidth::Six).is_err());
        assert!(validate_width(i64::MIN, DigitWidth::Six).is_err());
    }

    #[test]
    fn test_out_of_range_carries_constraint() {
        let err = validate_width(1000, DigitWidth::Three).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::OutOfRange {
                value: 1000,
                digits: 3,
                min: 100,
                max: 999,
            }
        );
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("123"), Ok(123));
        assert_eq!(parse_integer("  385916\n"), Ok(385_916));
        assert_eq!(parse_integer("+42"), Ok(42));
        assert_eq!(parse_integer("-5"), Ok(-5));

        assert_eq!(parse_integer(""), Err(InvalidInputError::Empty));
        assert_eq!(parse_integer("   "), Err(InvalidInputError::Empty));
        assert_eq!(
            parse_integer("12.5"),
            Err(InvalidInputError::NotAnInteger {
                input: "12.5".to_string()
            })
        );
        assert!(parse_integer("abc").is_err());
        assert!(parse_integer("1e3").is_err());
        assert!(parse_integer("99999999999999999999").is_err());
    }

    #[test]
    fn test_width_display() {
        assert_eq!(DigitWidth::Three.to_string(), "3-digit");
        assert_eq!(DigitWidth::Six.to_string(), "6-digit");
    }
}
