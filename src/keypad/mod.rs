//! The keypad input state machine.
//!
//! This is the imperative shell around the pure core: it owns one
//! `EntryState`, folds key events into it, and notifies a `HistorySink`
//! each time an equals resolution succeeds. Every handler is synchronous
//! and runs to completion before the next event; there is no suspension
//! point anywhere.
//!
//! Display and history-line text are recomputed from the state on every
//! call, never stored, so they cannot desynchronize from the buffers.

use crate::core::{EntryState, Operand, Operator};
use crate::eval::{self, EvalError};
use crate::history::{HistorySink, NullSink};
use serde::{Deserialize, Serialize};

/// Display text shown after a failed evaluation.
pub const ERROR_SENTINEL: &str = "Error";

/// A single keypad event.
///
/// The presentation layer maps physical key or button presses 1:1 onto
/// these values and feeds them to [`Keypad::press`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Key {
    /// A digit `0`-`9`.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// One of the four binary operators.
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

/// Sequential-entry calculator input state machine.
///
/// Folds a stream of [`Key`] events into a display string, a pending
/// operation, and evaluated results. Every handler is a total function:
/// any key in any state has a defined transition, and the only failure
/// mode (a malformed or non-finite evaluation) is absorbed into the
/// [`EntryState::Error`] position rather than surfaced to the caller.
///
/// # Example
///
/// ```rust
/// use sumpad::history::CalculationLog;
/// use sumpad::keypad::Keypad;
///
/// let mut keypad = Keypad::with_sink(CalculationLog::new());
/// for key in "5+3=".chars() {
///     keypad.press_char(key);
/// }
///
/// assert_eq!(keypad.display(), "8");
/// assert_eq!(keypad.sink().latest().unwrap().expression, "5 + 3");
/// ```
#[derive(Clone, Debug)]
pub struct Keypad<S: HistorySink = NullSink> {
    state: EntryState,
    sink: S,
}

impl Keypad<NullSink> {
    /// Create a keypad that discards history notifications.
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }
}

impl Default for Keypad<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HistorySink> Keypad<S> {
    /// Create a keypad reporting completed calculations to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            state: EntryState::Idle,
            sink,
        }
    }

    /// The machine's current position.
    pub fn state(&self) -> &EntryState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the keypad, yielding the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The display text, derived from the current state.
    ///
    /// Never empty: `"0"` at idle, the operand or pending expression
    /// while typing, the result once settled, [`ERROR_SENTINEL`] after a
    /// failed evaluation.
    pub fn display(&self) -> String {
        match &self.state {
            EntryState::Idle => "0".to_string(),
            EntryState::EnteringOperand { operand } => operand.as_str().to_string(),
            EntryState::AwaitingSecondOperand { left, op } => format!("{left} {op} "),
            EntryState::EnteringSecondOperand { left, op, right } => {
                format!("{left} {op} {right}")
            }
            EntryState::Settled { value } => value.clone(),
            EntryState::OverwritingResult { operand, .. } => operand.as_str().to_string(),
            EntryState::Error => ERROR_SENTINEL.to_string(),
        }
    }

    /// The in-progress expression line, derived from the current state.
    ///
    /// Empty unless an operation is pending; a completed expression
    /// lives in the history sink, not here.
    pub fn history_line(&self) -> String {
        match &self.state {
            EntryState::AwaitingSecondOperand { left, op } => format!("{left} {op}"),
            EntryState::EnteringSecondOperand { left, op, right } => {
                format!("{left} {op} {right}")
            }
            _ => String::new(),
        }
    }

    /// Dispatch a key event to its handler.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.press_digit(digit),
            Key::Decimal => self.press_decimal(),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
            Key::Clear => self.press_clear(),
            Key::Backspace => self.press_backspace(),
        }
    }

    /// Convenience dispatch from a character: digits, `.`, `+ - * /`,
    /// `=`. Anything else is ignored.
    pub fn press_char(&mut self, symbol: char) {
        if let Some(digit) = symbol.to_digit(10) {
            self.press_digit(digit as u8);
        } else if symbol == '.' {
            self.press_decimal();
        } else if symbol == '=' {
            self.press_equals();
        } else if let Some(op) = Operator::from_symbol(symbol) {
            self.press_operator(op);
        }
    }

    /// Handle a digit key `0`-`9`.
    ///
    /// Starts a new operand from idle, after an error, or over a settled
    /// result; otherwise appends. A lone `"0"` first operand is replaced
    /// rather than extended, so leading zeros collapse the way the idle
    /// display does.
    pub fn press_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let symbol = (b'0' + digit) as char;

        self.state = match std::mem::take(&mut self.state) {
            EntryState::Idle | EntryState::Error => {
                let mut operand = Operand::new();
                operand.push_digit(symbol);
                EntryState::EnteringOperand { operand }
            }
            EntryState::EnteringOperand { mut operand } => {
                if operand.as_str() == "0" {
                    operand = Operand::new();
                }
                operand.push_digit(symbol);
                EntryState::EnteringOperand { operand }
            }
            EntryState::Settled { value } => {
                let mut operand = Operand::new();
                operand.push_digit(symbol);
                EntryState::OverwritingResult {
                    prior: value,
                    operand,
                }
            }
            EntryState::OverwritingResult { prior, mut operand } => {
                if operand.as_str() == "0" {
                    operand = Operand::new();
                }
                operand.push_digit(symbol);
                EntryState::OverwritingResult { prior, operand }
            }
            EntryState::AwaitingSecondOperand { left, op } => {
                let mut right = Operand::new();
                right.push_digit(symbol);
                EntryState::EnteringSecondOperand { left, op, right }
            }
            EntryState::EnteringSecondOperand { left, op, mut right } => {
                right.push_digit(symbol);
                EntryState::EnteringSecondOperand { left, op, right }
            }
        };
    }

    /// Handle the decimal point key.
    ///
    /// A leading decimal point starts the operand as `"0."`; a second
    /// decimal point within an operand is a silent no-op.
    pub fn press_decimal(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            EntryState::Idle | EntryState::Error => {
                let mut operand = Operand::new();
                operand.push_decimal();
                EntryState::EnteringOperand { operand }
            }
            EntryState::EnteringOperand { mut operand } => {
                operand.push_decimal();
                EntryState::EnteringOperand { operand }
            }
            EntryState::Settled { value } => {
                let mut operand = Operand::new();
                operand.push_decimal();
                EntryState::OverwritingResult {
                    prior: value,
                    operand,
                }
            }
            EntryState::OverwritingResult { prior, mut operand } => {
                operand.push_decimal();
                EntryState::OverwritingResult { prior, operand }
            }
            EntryState::AwaitingSecondOperand { left, op } => {
                let mut right = Operand::new();
                right.push_decimal();
                EntryState::EnteringSecondOperand { left, op, right }
            }
            EntryState::EnteringSecondOperand { left, op, mut right } => {
                right.push_decimal();
                EntryState::EnteringSecondOperand { left, op, right }
            }
        };
    }

    /// Handle an operator key.
    ///
    /// With a fresh operand typed, installs the operation. With an
    /// operation already pending and no new operand, replaces the
    /// operator in place. With a second operand typed, resolves the
    /// pending operation first and chains the new operator over its
    /// result — strict left-to-right, no precedence. Ignored when there
    /// is nothing to operate on.
    pub fn press_operator(&mut self, op: Operator) {
        self.state = match std::mem::take(&mut self.state) {
            state @ (EntryState::Idle | EntryState::Error) => state,
            EntryState::EnteringOperand { operand } => EntryState::AwaitingSecondOperand {
                left: operand.into_text(),
                op,
            },
            EntryState::Settled { value } => {
                EntryState::AwaitingSecondOperand { left: value, op }
            }
            EntryState::OverwritingResult { operand, .. } => EntryState::AwaitingSecondOperand {
                left: operand.into_text(),
                op,
            },
            EntryState::AwaitingSecondOperand { left, .. } => {
                EntryState::AwaitingSecondOperand { left, op }
            }
            EntryState::EnteringSecondOperand {
                left,
                op: pending,
                right,
            } => match self.resolve(&left, pending, right.as_str()) {
                Ok(result) => EntryState::AwaitingSecondOperand { left: result, op },
                Err(_) => EntryState::Error,
            },
        };
    }

    /// Handle the equals key.
    ///
    /// No-op unless a left operand, operator, and second operand are all
    /// present. On success the sink is notified and the result settles,
    /// ready to seed a chained operation. On failure the machine moves
    /// to the error position with no stale operands left behind.
    pub fn press_equals(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            EntryState::EnteringSecondOperand { left, op, right } => {
                match self.resolve(&left, op, right.as_str()) {
                    Ok(result) => EntryState::Settled { value: result },
                    Err(_) => EntryState::Error,
                }
            }
            state => state,
        };
    }

    /// Handle the clear key: reset to idle from any state.
    pub fn press_clear(&mut self) {
        self.state = EntryState::Idle;
    }

    /// Handle the backspace key.
    ///
    /// Removes the most recently typed character, descending through
    /// buffers: the second operand first, then the pending operator
    /// (undoing the operator press), then the first operand or settled
    /// value. Idle and error positions are untouched.
    pub fn press_backspace(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            EntryState::EnteringSecondOperand { left, op, mut right } => {
                right.pop();
                if right.is_empty() {
                    EntryState::AwaitingSecondOperand { left, op }
                } else {
                    EntryState::EnteringSecondOperand { left, op, right }
                }
            }
            EntryState::AwaitingSecondOperand { left, .. } => EntryState::EnteringOperand {
                operand: Operand::from_text(left),
            },
            EntryState::EnteringOperand { mut operand } => {
                operand.pop();
                if operand.is_empty() {
                    EntryState::Idle
                } else {
                    EntryState::EnteringOperand { operand }
                }
            }
            EntryState::OverwritingResult { prior, mut operand } => {
                operand.pop();
                if operand.is_empty() {
                    EntryState::Settled { value: prior }
                } else {
                    EntryState::OverwritingResult { prior, operand }
                }
            }
            EntryState::Settled { mut value } => {
                value.pop();
                if value.is_empty() {
                    EntryState::Idle
                } else {
                    // Mirror the truncated value into the typing buffer
                    // while keeping it recoverable as the prior value.
                    EntryState::OverwritingResult {
                        prior: value.clone(),
                        operand: Operand::from_text(value),
                    }
                }
            }
            state @ (EntryState::Idle | EntryState::Error) => state,
        };
    }

    /// Resolve `left op right`, notifying the sink exactly once on
    /// success. The caller decides which state the result settles into.
    fn resolve(&mut self, left: &str, op: Operator, right: &str) -> Result<String, EvalError> {
        let result = eval::evaluate(left, op, right)?;
        let expression = format!("{left} {op} {right}");
        self.sink.on_calculation_complete(&expression, &result);
        Ok(result)
    }
}
