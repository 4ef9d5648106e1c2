//! Binary arithmetic operators.
//!
//! Operators are plain tags; arithmetic is dispatched directly on the
//! tag rather than by evaluating expression text, so no generic
//! expression evaluator is involved anywhere in the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operators the keypad offers.
///
/// # Example
///
/// ```rust
/// use sumpad::core::Operator;
///
/// assert_eq!(Operator::Add.symbol(), "+");
/// assert_eq!(Operator::Multiply.apply(12.5, 4.0), 50.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown in display and expression text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator to two numeric operands.
    ///
    /// Pure arithmetic only; finiteness classification belongs to the
    /// evaluator, which inspects the result.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    /// Parse a keypad symbol into an operator.
    ///
    /// Returns `None` for anything outside `+ - * /`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
