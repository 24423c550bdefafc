//! # Lucky Ticket Module
//!
//! A ticket is *lucky* when the sum of the first three digits of its
//! six-digit number equals the sum of the last three.
//!
//! ## Check Flow
//! ```text
//! 385916
//!   │
//!   ▼
//! validate: 100000..=999999
//!   │
//!   ▼
//! [3, 8, 5] [9, 1, 6]
//!   │         │
//!   ▼         ▼
//!   16   ==   16   ──► yes
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digits::{sum_slice, Digits};
use crate::error::CheckResult;
use crate::validation::{parse_integer, DigitWidth};

/// Outcome of a lucky ticket check.
///
/// Displays as `yes` or `no`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketVerdict {
    /// The validated ticket number.
    pub number: u32,
    /// Sum of the first three digits.
    pub front_sum: u32,
    /// Sum of the last three digits.
    pub back_sum: u32,
    /// Whether both half sums are equal.
    pub lucky: bool,
}

impl fmt::Display for TicketVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.lucky { "yes" } else { "no" })
    }
}

/// Checks a six-digit ticket number and reports both half sums.
///
/// ## Example
/// ```rust
/// use lucky_core::check_ticket;
///
/// let verdict = check_ticket(385916).unwrap();
/// assert_eq!((verdict.front_sum, verdict.back_sum), (16, 16));
/// assert_eq!(verdict.to_string(), "yes");
/// ```
pub fn check_ticket(value: i64) -> CheckResult<TicketVerdict> {
    let digits = Digits::of_width(value, DigitWidth::Six)?;
    let (front, back) = digits.halves();
    let front_sum = sum_slice(front);
    let back_sum = sum_slice(back);

    Ok(TicketVerdict {
        number: digits.as_slice().iter().fold(0, |acc, &d| acc * 10 + u32::from(d)),
        front_sum,
        back_sum,
        lucky: front_sum == back_sum,
    })
}

/// Returns true if the first-half digit sum of a six-digit number equals
/// its second-half digit sum.
///
/// ## Rules
/// - `value` must satisfy `100000 <= value <= 999999`
///
/// ## Example
/// ```rust
/// use lucky_core::is_lucky_ticket;
///
/// assert_eq!(is_lucky_ticket(385916), Ok(true));
/// assert_eq!(is_lucky_ticket(123456), Ok(false));
/// assert!(is_lucky_ticket(12345).is_err());
/// ```
pub fn is_lucky_ticket(value: i64) -> CheckResult<bool> {
    check_ticket(value).map(|verdict| verdict.lucky)
}

/// Parses `text` as an integer and checks it as a ticket number.
pub fn is_lucky_ticket_str(text: &str) -> CheckResult<bool> {
    is_lucky_ticket(parse_integer(text)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
