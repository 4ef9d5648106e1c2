//! Snapshot and restore for calculation history.
//!
//! Serializes a `CalculationLog` into a versioned envelope so a host
//! application can persist the history list between sessions. Only the
//! history crosses sessions; calculator entry state is deliberately
//! never captured.

use crate::history::CalculationLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable envelope around a calculation history.
///
/// # Example
///
/// ```rust
/// use sumpad::history::{CalculationLog, HistorySink};
/// use sumpad::snapshot::HistorySnapshot;
///
/// let mut log = CalculationLog::new();
/// log.on_calculation_complete("5 + 3", "8");
///
/// let json = HistorySnapshot::capture(&log).to_json().unwrap();
/// let restored = HistorySnapshot::from_json(&json).unwrap().restore();
/// assert_eq!(restored.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,

    /// The recorded history
    pub log: CalculationLog,
}

impl HistorySnapshot {
    /// Capture the current contents of a calculation log.
    pub fn capture(log: &CalculationLog) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            log: log.clone(),
        }
    }

    /// Unwrap the snapshot into its history log.
    pub fn restore(self) -> CalculationLog {
        self.log
    }

    /// Serialize to JSON text.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON text, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the compact binary format, rejecting unsupported
    /// versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistorySink;

    fn sample_log() -> CalculationLog {
        let mut log = CalculationLog::new();
        log.on_calculation_complete("12.5 * 4", "50");
        log.on_calculation_complete("50 - 8", "42");
        log
    }

    #[test]
    fn capture_stamps_current_version() {
        let snapshot = HistorySnapshot::capture(&sample_log());
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.log.len(), 2);
    }

    #[test]
    fn json_round_trip_preserves_entries() {
        let log = sample_log();
        let json = HistorySnapshot::capture(&log).to_json().unwrap();
        let restored = HistorySnapshot::from_json(&json).unwrap().restore();
        assert_eq!(restored.entries(), log.entries());
    }

    #[test]
    fn binary_round_trip_preserves_entries() {
        let log = sample_log();
        let bytes = HistorySnapshot::capture(&log).to_binary().unwrap();
        let restored = HistorySnapshot::from_binary(&bytes).unwrap().restore();
        assert_eq!(restored.entries(), log.entries());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = HistorySnapshot::capture(&sample_log());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = snapshot.to_json().unwrap();

        match HistorySnapshot::from_json(&json) {
            Err(SnapshotError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, SNAPSHOT_VERSION + 1);
                assert_eq!(supported, SNAPSHOT_VERSION);
            }
            other => panic!("Expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = HistorySnapshot::from_json("{not json");
        assert!(matches!(
            result,
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}
