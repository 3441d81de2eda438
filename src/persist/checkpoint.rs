//! Versioned checkpoints of an automaton.
//!
//! A checkpoint wraps a [`Snapshot`] with a format version, an id and a
//! timestamp, and can be written as JSON for readability or with bincode
//! for compactness.

use super::error::PersistError;
use super::limits::PersistLimits;
use super::snapshot::Snapshot;
use crate::core::AutomatonModel;
use crate::variant::AutomatonVariant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of an automaton.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub saved_at: DateTime<Utc>,

    /// The automaton itself
    pub snapshot: Snapshot,
}

impl Checkpoint {
    pub fn capture<V: AutomatonVariant>(
        model: &AutomatonModel<V>,
        limits: &PersistLimits,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            saved_at: Utc::now(),
            snapshot: Snapshot::capture(model, limits),
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PersistError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| PersistError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        bincode::serialize(self).map_err(|e| PersistError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| PersistError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Rebuild the DFA held by this checkpoint.
    pub fn restore(self, limits: &PersistLimits) -> Result<AutomatonModel, PersistError> {
        self.snapshot.restore(limits)
    }

    fn check_version(&self) -> Result<(), PersistError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(PersistError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AutomatonModel {
        let mut model = AutomatonModel::new();
        let q0 = model.add_state(0.0, 0.0).id();
        let q1 = model.add_state(50.0, 0.0).id();
        model.toggle_final(q1).unwrap();
        model.add_or_merge_transition(q0, q1, ["0", "1"]).unwrap();
        model
    }

    #[test]
    fn json_roundtrip() {
        let checkpoint = Checkpoint::capture(&sample(), &PersistLimits::default());
        let json = checkpoint.to_json().unwrap();
        let back = Checkpoint::from_json(&json).unwrap();

        assert_eq!(checkpoint, back);
    }

    #[test]
    fn binary_roundtrip_restores_model() {
        let model = sample();
        let checkpoint = Checkpoint::capture(&model, &PersistLimits::default());
        let bytes = checkpoint.to_bytes().unwrap();

        let restored = Checkpoint::from_bytes(&bytes)
            .unwrap()
            .restore(&PersistLimits::default())
            .unwrap();

        assert!(restored.accepts("1"));
        assert!(!restored.accepts("11"));
        assert_eq!(restored.transitions(), model.transitions());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = Checkpoint::capture(&sample(), &PersistLimits::default());
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        let err = Checkpoint::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            PersistError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = Checkpoint::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, PersistError::DeserializationFailed(_)));
    }

    #[test]
    fn checkpoints_get_distinct_ids() {
        let model = sample();
        let a = Checkpoint::capture(&model, &PersistLimits::default());
        let b = Checkpoint::capture(&model, &PersistLimits::default());
        assert_ne!(a.id, b.id);
    }
}
