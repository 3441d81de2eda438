//! Automaton data model.
//!
//! This module contains the editable automaton:
//! - States with stable, never-reused ids
//! - Transitions carrying sets of one-character symbols
//! - The model that keeps both consistent and routes every transition
//!   edit through an [`AutomatonVariant`](crate::variant::AutomatonVariant)
//!
//! Everything here is synchronous and in-memory. Validation always runs
//! before mutation, so a failed call leaves the model untouched.

mod error;
mod model;
mod state;
mod symbol;
mod transition;

pub use error::AutomatonError;
pub use model::AutomatonModel;
pub use state::{Position, State, StateId};
pub use symbol::{SymbolSet, SYMBOL_SEPARATOR};
pub use transition::{Transition, TransitionId, TransitionLayout};
