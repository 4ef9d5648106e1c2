//! Completed-calculation history.
//!
//! The keypad reports each successful equals resolution to a
//! `HistorySink`. What the sink does with the pair — storage, ordering,
//! display — is its own policy; the machine only guarantees exactly one
//! notification per successful resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Receiver for completed calculations.
///
/// Implementations decide storage and ordering. The keypad calls
/// `on_calculation_complete` exactly once per successful equals
/// resolution, including resolutions triggered by operator chaining.
///
/// # Example
///
/// ```rust
/// use sumpad::history::HistorySink;
///
/// struct Printer;
///
/// impl HistorySink for Printer {
///     fn on_calculation_complete(&mut self, expression: &str, result: &str) {
///         println!("{expression} = {result}");
///     }
/// }
/// ```
pub trait HistorySink {
    fn on_calculation_complete(&mut self, expression: &str, result: &str);
}

/// Sink that discards every notification.
///
/// The default collaborator for a keypad constructed without a sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl HistorySink for NullSink {
    fn on_calculation_complete(&mut self, _expression: &str, _result: &str) {}
}

/// One completed calculation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Calculation {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The resolved expression, e.g. `"12.5 * 4"`.
    pub expression: String,
    /// The canonical result string, e.g. `"50"`.
    pub result: String,
    /// When the calculation completed.
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Build an entry for a calculation completing now.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// In-memory history sink recording calculations in chronological order.
///
/// # Example
///
/// ```rust
/// use sumpad::history::{CalculationLog, HistorySink};
///
/// let mut log = CalculationLog::new();
/// log.on_calculation_complete("5 + 3", "8");
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.entries()[0].expression, "5 + 3");
/// assert_eq!(log.entries()[0].result, "8");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CalculationLog {
    entries: Vec<Calculation>,
}

impl CalculationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All recorded calculations, oldest first.
    pub fn entries(&self) -> &[Calculation] {
        &self.entries
    }

    /// The most recently recorded calculation, if any.
    pub fn latest(&self) -> Option<&Calculation> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistorySink for CalculationLog {
    fn on_calculation_complete(&mut self, expression: &str, result: &str) {
        self.entries.push(Calculation::new(expression, result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = CalculationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.latest().is_none());
    }

    #[test]
    fn entries_keep_chronological_order() {
        let mut log = CalculationLog::new();
        log.on_calculation_complete("5 + 3", "8");
        log.on_calculation_complete("8 + 2", "10");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].expression, "5 + 3");
        assert_eq!(log.entries()[1].expression, "8 + 2");
        assert_eq!(log.latest().unwrap().result, "10");
    }

    #[test]
    fn entry_ids_are_unique() {
        let a = Calculation::new("1 + 1", "2");
        let b = Calculation::new("1 + 1", "2");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn null_sink_discards_everything() {
        let mut sink = NullSink;
        sink.on_calculation_complete("5 + 3", "8");
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = CalculationLog::new();
        log.on_calculation_complete("12.5 * 4", "50");

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: CalculationLog = serde_json::from_str(&json).unwrap();

        assert_eq!(log.entries(), deserialized.entries());
    }
}
