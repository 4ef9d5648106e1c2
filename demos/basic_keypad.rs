//! Basic Keypad
//!
//! This example demonstrates feeding key events into the calculator
//! state machine and reading the derived display.
//!
//! Key concepts:
//! - One event handler per key kind, all total functions
//! - Display text derived from state on every call
//! - History sink notified once per completed calculation
//!
//! Run with: cargo run --example basic_keypad

use sumpad::core::Operator;
use sumpad::history::CalculationLog;
use sumpad::keypad::{Key, Keypad};

fn main() {
    println!("=== Basic Keypad Example ===\n");

    let mut keypad = Keypad::with_sink(CalculationLog::new());

    // Type "12.5 * 4 =" one key at a time.
    let keys = [
        Key::Digit(1),
        Key::Digit(2),
        Key::Decimal,
        Key::Digit(5),
        Key::Operator(Operator::Multiply),
        Key::Digit(4),
        Key::Equals,
    ];

    for key in keys {
        keypad.press(key);
        println!("{:>24}  | {:?}", keypad.display(), key);
    }

    println!("\nFinal display: {}", keypad.display());
    println!("State: {}", keypad.state().name());

    for entry in keypad.sink().entries() {
        println!("History: {} = {}", entry.expression, entry.result);
    }

    println!("\n=== Example Complete ===");
}
