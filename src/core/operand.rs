//! Operand accumulation buffer.
//!
//! An `Operand` collects digits and at most one decimal point as the
//! user types. All mutation rules that keep the buffer a valid numeric
//! prefix live here, so the keypad never has to inspect raw text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text buffer for the operand currently being typed.
///
/// The buffer only ever holds digits and at most one `.`, so it always
/// parses as a decimal number once non-empty (a trailing `.` is allowed
/// mid-entry and parses fine as `f64`).
///
/// # Example
///
/// ```rust
/// use sumpad::core::Operand;
///
/// let mut operand = Operand::new();
/// operand.push_decimal();
/// operand.push_digit('5');
/// assert_eq!(operand.as_str(), "0.5");
///
/// // A second decimal point is silently ignored.
/// operand.push_decimal();
/// assert_eq!(operand.as_str(), "0.5");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Operand(String);

impl Operand {
    /// Create an empty operand buffer.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Rebuild an operand from previously accumulated text.
    ///
    /// Used when backspace hands a settled value or a left operand back
    /// to the typist. The text must have come out of an `Operand` (or a
    /// canonical result string); no re-validation happens here.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Append a digit `0`-`9`.
    ///
    /// Non-digit characters are ignored; the keypad only routes digits
    /// here, so this is defensive rather than load-bearing.
    pub fn push_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() {
            self.0.push(digit);
        }
    }

    /// Append a decimal point.
    ///
    /// No-op if the buffer already contains one. A leading decimal point
    /// on an empty buffer is normalized to `"0."`.
    pub fn push_decimal(&mut self) {
        if self.has_decimal() {
            return;
        }
        if self.0.is_empty() {
            self.0.push('0');
        }
        self.0.push('.');
    }

    /// Remove the most recently typed character.
    ///
    /// Returns the removed character, or `None` on an empty buffer.
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Whether a decimal point has already been typed.
    pub fn has_decimal(&self) -> bool {
        self.0.contains('.')
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the buffer, yielding the accumulated text.
    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
