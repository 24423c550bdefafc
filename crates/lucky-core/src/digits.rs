//! # Digits Module
//!
//! Decimal decomposition of fixed-width numbers and the digit sum.
//!
//! ## Decomposition
//! ```text
//! 385916 ──► [3, 8, 5, 9, 1, 6]      (most significant first)
//!
//! Computed with division/modulo from the least significant end:
//!   385916 % 10 = 6,  385916 / 10 = 38591
//!    38591 % 10 = 1,   38591 / 10 = 3859
//!    ...
//! ```
//!
//! The digit count always equals the width's digit count; values that would
//! produce more or fewer digits are rejected before decomposition.

use crate::error::CheckResult;
use crate::validation::{parse_integer, validate_width, DigitWidth};

// =============================================================================
// Digits
// =============================================================================

/// Base-10 digits of a validated number, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    width: DigitWidth,
    digits: Vec<u8>,
}

impl Digits {
    /// Decomposes `value` into exactly `width.digit_count()` digits.
    ///
    /// ## Example
    /// ```rust
    /// use lucky_core::digits::Digits;
    /// use lucky_core::validation::DigitWidth;
    ///
    /// let digits = Digits::of_width(385916, DigitWidth::Six).unwrap();
    /// assert_eq!(digits.as_slice(), &[3, 8, 5, 9, 1, 6]);
    ///
    /// assert!(Digits::of_width(42, DigitWidth::Three).is_err());
    /// ```
    pub fn of_width(value: i64, width: DigitWidth) -> CheckResult<Self> {
        let mut rest = validate_width(value, width)?;
        let mut digits = vec![0u8; width.digit_count()];

        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        debug_assert_eq!(rest, 0, "validated value has more digits than its width");

        Ok(Self { width, digits })
    }

    /// The width these digits were validated against.
    pub fn width(&self) -> DigitWidth {
        self.width
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Sum of all digits.
    pub fn sum(&self) -> u32 {
        sum_slice(&self.digits)
    }

    /// Splits the digits into two contiguous halves of equal length.
    pub fn halves(&self) -> (&[u8], &[u8]) {
        self.digits.split_at(self.digits.len() / 2)
    }
}

/// Sums a run of decimal digits.
pub(crate) fn sum_slice(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

// =============================================================================
// Digit Sum
// =============================================================================

/// Sums the decimal digits of a three-digit number.
///
/// ## Rules
/// - `value` must satisfy `100 <= value <= 999`
/// - Anything else is rejected with [`InvalidInputError::OutOfRange`]
///
/// [`InvalidInputError::OutOfRange`]: crate::InvalidInputError::OutOfRange
///
/// ## Example
/// ```rust
/// use lucky_core::sum_of_digits;
///
/// assert_eq!(sum_of_digits(123), Ok(6));
/// assert_eq!(sum_of_digits(999), Ok(27));
/// assert!(sum_of_digits(1000).is_err());
/// ```
pub fn sum_of_digits(value: i64) -> CheckResult<u32> {
    Ok(Digits::of_width(value, DigitWidth::Three)?.sum())
}

/// Parses `text` as an integer and sums its digits.
///
/// Non-integer text is rejected before the range check.
pub fn sum_of_digits_str(text: &str) -> CheckResult<u32> {
    sum_of_digits(parse_integer(text)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
