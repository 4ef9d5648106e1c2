//! Tokenless arithmetic evaluation.
//!
//! Resolves a binary expression of the form `<number> <operator> <number>`
//! by parsing the two operand strings and dispatching directly on the
//! operator tag. There is no expression text to tokenize and no generic
//! evaluator involved.

use crate::core::Operator;

mod error;

pub use error::EvalError;

/// Evaluate `left op right`, producing the canonical decimal result string.
///
/// Both operands must parse as finite decimal numbers. Division by a
/// zero right operand fails before any arithmetic happens, and a
/// non-finite result (overflow) is rejected rather than leaking into
/// display text.
///
/// Pure function: same inputs, same output, no side effects.
///
/// # Example
///
/// ```rust
/// use sumpad::core::Operator;
/// use sumpad::eval::{evaluate, EvalError};
///
/// assert_eq!(evaluate("12.5", Operator::Multiply, "4").unwrap(), "50");
/// assert_eq!(
///     evaluate("8", Operator::Divide, "0"),
///     Err(EvalError::DivisionByZero)
/// );
/// ```
pub fn evaluate(left: &str, op: Operator, right: &str) -> Result<String, EvalError> {
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;

    if op == Operator::Divide && right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    let result = op.apply(left, right);
    if !result.is_finite() {
        return Err(EvalError::NonFiniteResult);
    }

    Ok(format_result(result))
}

fn parse_operand(text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EvalError::InvalidOperand(text.to_string()))
}

/// Canonical decimal rendering: no forced trailing zeros, no scientific
/// notation for normal-range magnitudes. `f64`'s `Display` already
/// guarantees both.
fn format_result(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_addition() {
        assert_eq!(evaluate("5", Operator::Add, "3").unwrap(), "8");
    }

    #[test]
    fn fractional_multiplication_drops_trailing_zeros() {
        assert_eq!(evaluate("12.5", Operator::Multiply, "4").unwrap(), "50");
    }

    #[test]
    fn fractional_result_keeps_fraction() {
        assert_eq!(evaluate("7", Operator::Divide, "2").unwrap(), "3.5");
    }

    #[test]
    fn subtraction_can_go_negative() {
        assert_eq!(evaluate("3", Operator::Subtract, "5").unwrap(), "-2");
    }

    #[test]
    fn trailing_decimal_point_operand_parses() {
        // Mid-entry operands like "4." are valid f64 text.
        assert_eq!(evaluate("4.", Operator::Add, "1").unwrap(), "5");
    }

    #[test]
    fn division_by_zero_is_classified() {
        assert_eq!(
            evaluate("8", Operator::Divide, "0"),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn zero_over_zero_is_division_by_zero_not_nan() {
        assert_eq!(
            evaluate("0", Operator::Divide, "0"),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn division_by_fractional_zero_text() {
        assert_eq!(
            evaluate("1", Operator::Divide, "0.0"),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn malformed_operand_is_rejected() {
        assert_eq!(
            evaluate("abc", Operator::Add, "1"),
            Err(EvalError::InvalidOperand("abc".to_string()))
        );
        assert_eq!(
            evaluate("1", Operator::Add, ""),
            Err(EvalError::InvalidOperand(String::new()))
        );
    }

    #[test]
    fn non_finite_operand_text_is_rejected() {
        assert_eq!(
            evaluate("inf", Operator::Add, "1"),
            Err(EvalError::InvalidOperand("inf".to_string()))
        );
    }

    #[test]
    fn overflow_is_non_finite_result() {
        let huge = format!("{}", f64::MAX);
        assert_eq!(
            evaluate(&huge, Operator::Multiply, "2"),
            Err(EvalError::NonFiniteResult)
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = evaluate("9", Operator::Divide, "4");
        let second = evaluate("9", Operator::Divide, "4");
        assert_eq!(first, second);
    }
}
