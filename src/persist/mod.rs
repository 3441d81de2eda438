//! Saving and loading automata.
//!
//! The model itself never touches storage. This module is the boundary:
//! it converts a model into the editor's plain saved shape and back,
//! enforcing the size cap and clamping presentation values on the way.
//!
//! # Example
//!
//! ```rust
//! use dfa_studio::core::AutomatonModel;
//! use dfa_studio::persist::{from_json, to_json, PersistLimits};
//!
//! let mut model = AutomatonModel::new();
//! let q0 = model.add_state(0.0, 0.0).id();
//! model.toggle_final(q0).unwrap();
//! model.add_or_merge_transition(q0, q0, ["a", "b"]).unwrap();
//!
//! let limits = PersistLimits::default();
//! let json = to_json(&model, &limits).unwrap();
//! assert!(json.contains(r#""symbol":"a,b""#));
//!
//! let restored = from_json(&json, &limits).unwrap();
//! assert!(restored.accepts("abba"));
//! ```

pub mod checkpoint;
pub mod error;
pub mod limits;
pub mod snapshot;

pub use checkpoint::{Checkpoint, CHECKPOINT_VERSION};
pub use error::PersistError;
pub use limits::{LimitsBuilder, PersistLimits, DEFAULT_MAX_BYTES, MAX_STATE_ID};
pub use snapshot::{Snapshot, StateRecord, TransitionRecord};

use crate::core::AutomatonModel;
use crate::variant::AutomatonVariant;

/// Serialize `model` to compact JSON, failing if it exceeds the size cap.
pub fn to_json<V: AutomatonVariant>(
    model: &AutomatonModel<V>,
    limits: &PersistLimits,
) -> Result<String, PersistError> {
    let json = serde_json::to_string(&Snapshot::capture(model, limits))
        .map_err(|e| PersistError::SerializationFailed(e.to_string()))?;
    limits.check_size(json.len())?;
    Ok(json)
}

/// Parse and validate a DFA from JSON produced by [`to_json`] or the editor.
pub fn from_json(json: &str, limits: &PersistLimits) -> Result<AutomatonModel, PersistError> {
    limits.check_size(json.len())?;
    let snapshot: Snapshot = serde_json::from_str(json)
        .map_err(|e| PersistError::DeserializationFailed(e.to_string()))?;
    snapshot.restore(limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_cap_applies_both_ways() {
        let mut model = AutomatonModel::new();
        for i in 0..20 {
            model.add_state(i as f64, 0.0);
        }
        let tight = PersistLimits::builder().max_bytes(64).build();

        assert!(matches!(
            to_json(&model, &tight),
            Err(PersistError::TooLarge { limit: 64, .. })
        ));

        let json = to_json(&model, &PersistLimits::default()).unwrap();
        assert!(matches!(
            from_json(&json, &tight),
            Err(PersistError::TooLarge { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let err = from_json("{not json", &PersistLimits::default()).unwrap_err();
        assert!(matches!(err, PersistError::DeserializationFailed(_)));
    }
}
