//! Chained Operations
//!
//! This example demonstrates left-to-right operator chaining, error
//! recovery, and snapshotting the calculation history.
//!
//! Key concepts:
//! - Pressing an operator over a typed second operand resolves first
//! - A failed evaluation lands in the error position, then recovers
//! - The history log serializes into a versioned snapshot
//!
//! Run with: cargo run --example chained_operations

use sumpad::history::CalculationLog;
use sumpad::keypad::Keypad;
use sumpad::snapshot::HistorySnapshot;

fn main() {
    println!("=== Chained Operations Example ===\n");

    let mut keypad = Keypad::with_sink(CalculationLog::new());

    // "5 + 3 + 2 =" resolves (5 + 3) first, then 8 + 2.
    for symbol in "5+3+2=".chars() {
        keypad.press_char(symbol);
    }
    println!("5 + 3 + 2 = {}", keypad.display());

    // Division by zero shows the error sentinel and resets cleanly.
    for symbol in "8/0=".chars() {
        keypad.press_char(symbol);
    }
    println!("8 / 0 = {}", keypad.display());

    for symbol in "4*4=".chars() {
        keypad.press_char(symbol);
    }
    println!("4 * 4 = {}", keypad.display());

    println!("\nHistory ({} entries):", keypad.sink().len());
    for entry in keypad.sink().entries() {
        println!("  {} = {}  ({})", entry.expression, entry.result, entry.timestamp);
    }

    let snapshot = HistorySnapshot::capture(keypad.sink());
    let json = snapshot.to_json().expect("history should serialize");
    println!("\nSnapshot JSON ({} bytes)", json.len());

    let restored = HistorySnapshot::from_json(&json)
        .expect("snapshot should restore")
        .restore();
    println!("Restored {} entries", restored.len());

    println!("\n=== Example Complete ===");
}
