//! Labeled transitions between states.

use super::state::StateId;
use super::symbol::SymbolSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionId(Uuid);

impl TransitionId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransitionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation payload of a transition. Stored for round-tripping only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionLayout {
    /// Perpendicular bend of the edge.
    pub offset: f64,
    /// Where the label sits along the edge, 0.0 to 1.0.
    pub label_position: f64,
    /// Direction of a self-loop, in radians.
    pub loop_angle: f64,
}

impl Default for TransitionLayout {
    fn default() -> Self {
        Self {
            offset: 0.0,
            label_position: 0.5,
            loop_angle: 0.0,
        }
    }
}

/// A transition `from --symbols--> to`.
///
/// There is at most one transition per ordered `(from, to)` pair; adding
/// symbols to an existing pair merges them into its symbol set.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub(crate) id: TransitionId,
    pub(crate) from: StateId,
    pub(crate) to: StateId,
    pub(crate) symbols: SymbolSet,
    pub(crate) layout: TransitionLayout,
}

impl Transition {
    pub fn id(&self) -> TransitionId {
        self.id
    }

    pub fn from(&self) -> StateId {
        self.from
    }

    pub fn to(&self) -> StateId {
        self.to
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn layout(&self) -> TransitionLayout {
        self.layout
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Whether this transition is labeled with `symbol`.
    pub fn carries(&self, symbol: char) -> bool {
        self.symbols.contains(symbol)
    }

    /// Whether this transition touches `state` at either end.
    pub fn touches(&self, state: StateId) -> bool {
        self.from == state || self.to == state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: u32, to: u32, symbols: &str) -> Transition {
        Transition {
            id: TransitionId::new(),
            from: StateId::new(from),
            to: StateId::new(to),
            symbols: symbols.chars().collect(),
            layout: TransitionLayout::default(),
        }
    }

    #[test]
    fn carries_checks_symbol_membership() {
        let t = transition(0, 1, "ab");
        assert!(t.carries('a'));
        assert!(t.carries('b'));
        assert!(!t.carries('c'));
    }

    #[test]
    fn self_loop_and_touches() {
        let t = transition(2, 2, "a");
        assert!(t.is_self_loop());
        assert!(t.touches(StateId::new(2)));
        assert!(!t.touches(StateId::new(0)));

        let u = transition(0, 1, "a");
        assert!(!u.is_self_loop());
        assert!(u.touches(StateId::new(1)));
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(TransitionId::new(), TransitionId::new());
    }
}
