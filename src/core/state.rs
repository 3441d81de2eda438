//! States of an automaton.
//!
//! A state is identified by a [`StateId`] handed out by the owning
//! [`AutomatonModel`](super::AutomatonModel). The label and the accepting
//! flag are user-editable; the position is carried for the presentation
//! layer and never interpreted here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a state, unique within one automaton.
///
/// Ids come from a counter that only moves forward, so an id is never
/// reused during a session, even after the state it named was deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Wrap a raw id.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric id.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Label a freshly created state receives, `q<id>`.
    pub fn default_label(self) -> String {
        format!("q{}", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Canvas coordinates of a state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single automaton state.
///
/// Fields are only mutable through the model so that every change goes
/// through the model's bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub(crate) id: StateId,
    pub(crate) label: String,
    pub(crate) is_final: bool,
    pub(crate) position: Position,
}

impl State {
    pub(crate) fn new(id: StateId, position: Position) -> Self {
        Self {
            id,
            label: id.default_label(),
            is_final: false,
            position,
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    /// Display name. Not required to be unique.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the state is accepting.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
