//! Errors raised by model mutations and engine queries.

use super::state::StateId;
use super::transition::TransitionId;
use thiserror::Error;

/// Errors that can occur when editing or evaluating an automaton.
///
/// Every mutation validates before it changes anything, so when one of
/// these is returned the model is exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AutomatonError {
    #[error("Invalid symbol(s) {symbols:?}: expected single non-separator characters")]
    InvalidSymbol { symbols: Vec<String> },

    #[error("State {state} already has an outgoing transition on {symbols:?}")]
    DeterminismViolation { state: StateId, symbols: Vec<char> },

    #[error("All symbols already exist on this transition: {symbols:?}")]
    DuplicateSymbol { symbols: Vec<char> },

    #[error("Unknown state {0}")]
    UnknownState(StateId),

    #[error("Unknown transition {0}")]
    UnknownTransition(TransitionId),

    #[error("No start state set. Mark a state as start before tracing")]
    NoStartState,

    #[error("A transition needs at least one symbol")]
    EmptySymbols,
}
