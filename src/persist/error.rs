//! Persistence error types.

use crate::core::AutomatonError;
use thiserror::Error;

/// Errors that can occur while saving or loading an automaton
#[derive(Debug, Error)]
pub enum PersistError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Serialized form exceeds the configured size cap
    #[error("Serialized automaton is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    /// Two state records share an id
    #[error("Duplicate state id {0} in snapshot")]
    DuplicateState(u32),

    /// A state id or the state counter is too large to keep counting from
    #[error("State id {id} out of range, limit is {limit}")]
    StateIdOutOfRange { id: u32, limit: u32 },

    /// Snapshot content violates a model invariant
    #[error("Snapshot rejected: {0}")]
    Automaton(#[from] AutomatonError),
}
