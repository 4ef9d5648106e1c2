//! Entry state of the keypad.
//!
//! The machine's position is an explicit tagged variant rather than a
//! set of nullable flags. Each variant carries only the fields valid in
//! that position, so combinations like "operator chosen but no left
//! operand" cannot be represented at all.

use super::operand::Operand;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Where the keypad currently stands in interpreting input.
///
/// All variants are immutable values; the keypad replaces its state on
/// every transition instead of mutating fields in place.
///
/// # Example
///
/// ```rust
/// use sumpad::core::{EntryState, Operator};
///
/// let state = EntryState::AwaitingSecondOperand {
///     left: "12".to_string(),
///     op: Operator::Add,
/// };
/// assert_eq!(state.name(), "AwaitingSecondOperand");
/// assert!(!state.is_error());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum EntryState {
    /// Nothing typed, nothing pending. Display shows `"0"`.
    Idle,

    /// The first operand is being typed.
    EnteringOperand { operand: Operand },

    /// An operator has been chosen; the second operand has not started.
    AwaitingSecondOperand { left: String, op: Operator },

    /// The second operand is being typed.
    EnteringSecondOperand {
        left: String,
        op: Operator,
        right: Operand,
    },

    /// A result (or a backspaced-into value) with no operation pending.
    /// A digit starts typing over it; an operator chains from it.
    Settled { value: String },

    /// A new operand being typed over a settled result. The prior value
    /// stays recoverable: backspacing the operand away reverts the
    /// display to it, while an operator press discards it and operates
    /// on the new operand.
    OverwritingResult { prior: String, operand: Operand },

    /// The last evaluation failed. Display shows the error sentinel;
    /// digits behave exactly as from `Idle`.
    Error,
}

impl EntryState {
    /// The state's name for display and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::EnteringOperand { .. } => "EnteringOperand",
            Self::AwaitingSecondOperand { .. } => "AwaitingSecondOperand",
            Self::EnteringSecondOperand { .. } => "EnteringSecondOperand",
            Self::Settled { .. } => "Settled",
            Self::OverwritingResult { .. } => "OverwritingResult",
            Self::Error => "Error",
        }
    }

    /// Check if this is the failed-evaluation state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Check if an equals press would resolve anything from here.
    ///
    /// True only when a left operand, an operator, and a non-empty right
    /// operand are all present.
    pub fn is_resolvable(&self) -> bool {
        matches!(self, Self::EnteringSecondOperand { right, .. } if !right.is_empty())
    }
}

impl Default for EntryState {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_covers_every_variant() {
        assert_eq!(EntryState::Idle.name(), "Idle");
        assert_eq!(
            EntryState::EnteringOperand {
                operand: Operand::from_text("5")
            }
            .name(),
            "EnteringOperand"
        );
        assert_eq!(
            EntryState::AwaitingSecondOperand {
                left: "5".to_string(),
                op: Operator::Add,
            }
            .name(),
            "AwaitingSecondOperand"
        );
        assert_eq!(
            EntryState::EnteringSecondOperand {
                left: "5".to_string(),
                op: Operator::Add,
                right: Operand::from_text("3"),
            }
            .name(),
            "EnteringSecondOperand"
        );
        assert_eq!(
            EntryState::Settled {
                value: "8".to_string()
            }
            .name(),
            "Settled"
        );
        assert_eq!(
            EntryState::OverwritingResult {
                prior: "8".to_string(),
                operand: Operand::from_text("4"),
            }
            .name(),
            "OverwritingResult"
        );
        assert_eq!(EntryState::Error.name(), "Error");
    }

    #[test]
    fn only_error_variant_is_error() {
        assert!(EntryState::Error.is_error());
        assert!(!EntryState::Idle.is_error());
        assert!(!EntryState::Settled {
            value: "1".to_string()
        }
        .is_error());
    }

    #[test]
    fn resolvable_requires_all_three_fields() {
        assert!(!EntryState::Idle.is_resolvable());
        assert!(!EntryState::AwaitingSecondOperand {
            left: "5".to_string(),
            op: Operator::Add,
        }
        .is_resolvable());
        assert!(EntryState::EnteringSecondOperand {
            left: "5".to_string(),
            op: Operator::Add,
            right: Operand::from_text("3"),
        }
        .is_resolvable());
    }

    #[test]
    fn default_state_is_idle() {
        assert_eq!(EntryState::default(), EntryState::Idle);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = EntryState::EnteringSecondOperand {
            left: "12.5".to_string(),
            op: Operator::Multiply,
            right: Operand::from_text("4"),
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EntryState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
