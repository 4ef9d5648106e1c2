//! Core keypad types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operand accumulation via `Operand`
//! - Operator tags via `Operator`
//! - The machine's position via the `EntryState` tagged variant
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod operand;
mod operator;
mod state;

pub use operand::Operand;
pub use operator::Operator;
pub use state::EntryState;
