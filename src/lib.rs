//! Sumpad: a keypad calculator input state machine
//!
//! Sumpad folds a stream of discrete key events — digits, decimal point,
//! operator, equals, clear, backspace — into a display string, a pending
//! operation, and evaluated results. The core is pure state-transition
//! logic with no I/O: the machine's position is an explicit tagged
//! variant, display text is recomputed from it on every call, and
//! arithmetic is dispatched directly on operator tags.
//!
//! # Core Concepts
//!
//! - **EntryState**: the machine's position as a tagged variant, with
//!   invalid buffer combinations unrepresentable
//! - **Keypad**: the event handlers, one per key kind, each a total
//!   function over the state
//! - **HistorySink**: outbound notification of each completed
//!   calculation, with `CalculationLog` as the in-memory implementation
//!
//! # Example
//!
//! ```rust
//! use sumpad::history::CalculationLog;
//! use sumpad::keypad::{Key, Keypad};
//! use sumpad::core::Operator;
//!
//! let mut keypad = Keypad::with_sink(CalculationLog::new());
//!
//! keypad.press(Key::Digit(1));
//! keypad.press(Key::Digit(2));
//! keypad.press(Key::Decimal);
//! keypad.press(Key::Digit(5));
//! keypad.press(Key::Operator(Operator::Multiply));
//! keypad.press(Key::Digit(4));
//! keypad.press(Key::Equals);
//!
//! assert_eq!(keypad.display(), "50");
//! let entry = keypad.sink().latest().unwrap();
//! assert_eq!(entry.expression, "12.5 * 4");
//! assert_eq!(entry.result, "50");
//! ```

pub mod core;
pub mod eval;
pub mod history;
pub mod keypad;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{EntryState, Operand, Operator};
pub use eval::EvalError;
pub use history::{Calculation, CalculationLog, HistorySink};
pub use keypad::{Key, Keypad, ERROR_SENTINEL};
