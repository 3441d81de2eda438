//! Build errors for the automaton builder.

use crate::core::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton from labels.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states declared. Call .state(label) or .final_state(label) before .build()")]
    NoStates,

    #[error("State label '{0}' is declared twice")]
    DuplicateLabel(String),

    #[error("Unknown state label '{0}'. Declare it with .state(label) first")]
    UnknownLabel(String),

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
