//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while resolving a binary expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of a division is zero (covers `0 / 0` too).
    #[error("division by zero")]
    DivisionByZero,

    /// An operand string failed to parse as a finite decimal number.
    /// Validated buffers should never produce this; it is handled
    /// defensively all the same.
    #[error("operand is not a finite number: '{0}'")]
    InvalidOperand(String),

    /// The arithmetic result is not a finite number (overflow).
    #[error("result is not a finite number")]
    NonFiniteResult,
}
