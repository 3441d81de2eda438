//! The mutable automaton model.
//!
//! [`AutomatonModel`] owns states and transitions and keeps them
//! consistent: transitions only ever reference live states, the start
//! state is either a live state or unset, and every transition edit is
//! checked by the model's [`AutomatonVariant`] before anything changes.

use super::error::AutomatonError;
use super::state::{Position, State, StateId};
use super::symbol::SymbolSet;
use super::transition::{Transition, TransitionId, TransitionLayout};
use crate::variant::{collapse_violations, AutomatonVariant, Dfa, TransitionRequest};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use tracing::debug;

/// States, transitions and the start state of one automaton.
///
/// The variant parameter decides which transition edits are legal and
/// how input is evaluated. It defaults to [`Dfa`].
///
/// # Example
///
/// ```rust
/// use dfa_studio::core::{AutomatonError, AutomatonModel};
///
/// let mut model = AutomatonModel::new();
/// let q0 = model.add_state(0.0, 0.0).id();
/// let q1 = model.add_state(120.0, 0.0).id();
/// model.toggle_final(q1).unwrap();
///
/// model.add_or_merge_transition(q0, q1, ["a"]).unwrap();
///
/// // q0 already leaves on 'a', a second edge on 'a' is rejected.
/// let err = model.add_or_merge_transition(q0, q0, ["a"]).unwrap_err();
/// assert!(matches!(err, AutomatonError::DeterminismViolation { .. }));
///
/// assert!(model.accepts("a"));
/// assert!(!model.accepts("aa"));
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonModel<V = Dfa> {
    variant: V,
    states: BTreeMap<StateId, State>,
    transitions: Vec<Transition>,
    start: Option<StateId>,
    next_id: u32,
}

impl AutomatonModel<Dfa> {
    /// Create an empty DFA.
    pub fn new() -> Self {
        Self::with_variant(Dfa)
    }
}

impl Default for AutomatonModel<Dfa> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: AutomatonVariant> AutomatonModel<V> {
    /// Create an empty automaton governed by `variant`.
    pub fn with_variant(variant: V) -> Self {
        Self {
            variant,
            states: BTreeMap::new(),
            transitions: Vec::new(),
            start: None,
            next_id: 0,
        }
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Add a non-accepting state labeled `q<id>` at `(x, y)`.
    ///
    /// A state added to an empty automaton becomes the start state.
    pub fn add_state(&mut self, x: f64, y: f64) -> &State {
        let id = StateId::new(self.next_id);
        self.next_id += 1;

        if self.states.is_empty() {
            self.start = Some(id);
        }

        debug!(state = %id, x, y, "added state");
        self.states
            .entry(id)
            .or_insert_with(|| State::new(id, Position::new(x, y)))
    }

    /// Remove a state together with every transition touching it.
    ///
    /// Removing the start state leaves the automaton without one. Removing
    /// an absent state does nothing and returns `None`.
    pub fn delete_state(&mut self, id: StateId) -> Option<State> {
        let removed = self.states.remove(&id)?;

        let before = self.transitions.len();
        self.transitions.retain(|t| !t.touches(id));

        if self.start == Some(id) {
            self.start = None;
        }

        debug!(
            state = %id,
            cascaded = before - self.transitions.len(),
            "deleted state"
        );
        Some(removed)
    }

    /// Add `symbols` to the transition `from -> to`, creating it if needed.
    ///
    /// The whole call is validated first. If any requested symbol is
    /// rejected nothing changes, and if the pair already carries every
    /// requested symbol the call fails with
    /// [`AutomatonError::DuplicateSymbol`].
    pub fn add_or_merge_transition<I, S>(
        &mut self,
        from: StateId,
        to: StateId,
        symbols: I,
    ) -> Result<&Transition, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols: Vec<S> = symbols.into_iter().collect();
        let raw: Vec<&str> = symbols.iter().map(AsRef::as_ref).collect();
        self.insert_transition(None, from, to, &raw, TransitionLayout::default())
    }

    /// Replace the symbol set of an existing transition.
    ///
    /// Validated like a merge, against every other transition leaving the
    /// same state.
    pub fn replace_symbols<I, S>(
        &mut self,
        id: TransitionId,
        symbols: I,
    ) -> Result<&Transition, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = self
            .index_of(id)
            .ok_or(AutomatonError::UnknownTransition(id))?;
        let (from, to) = (self.transitions[index].from, self.transitions[index].to);

        let symbols: Vec<S> = symbols.into_iter().collect();
        let raw: Vec<&str> = symbols.iter().map(AsRef::as_ref).collect();
        let replacement = self.validate(from, to, &raw, Some(id))?;

        debug!(transition = %id, symbols = %replacement, "replaced transition symbols");
        self.transitions[index].symbols = replacement;
        Ok(&self.transitions[index])
    }

    /// Remove a transition. Removing an absent transition does nothing.
    pub fn delete_transition(&mut self, id: TransitionId) -> Option<Transition> {
        let index = self.index_of(id)?;
        let removed = self.transitions.remove(index);
        debug!(transition = %id, "deleted transition");
        Some(removed)
    }

    pub fn set_start_state(&mut self, id: StateId) -> Result<(), AutomatonError> {
        self.require_state(id)?;
        self.start = Some(id);
        debug!(state = %id, "set start state");
        Ok(())
    }

    /// Flip the accepting flag of a state, returning the new value.
    pub fn toggle_final(&mut self, id: StateId) -> Result<bool, AutomatonError> {
        let state = self
            .states
            .get_mut(&id)
            .ok_or(AutomatonError::UnknownState(id))?;
        state.is_final = !state.is_final;
        debug!(state = %id, is_final = state.is_final, "toggled final");
        Ok(state.is_final)
    }

    pub fn set_final(&mut self, id: StateId, is_final: bool) -> Result<(), AutomatonError> {
        let state = self
            .states
            .get_mut(&id)
            .ok_or(AutomatonError::UnknownState(id))?;
        state.is_final = is_final;
        debug!(state = %id, is_final, "set final");
        Ok(())
    }

    pub fn rename(&mut self, id: StateId, label: impl Into<String>) -> Result<(), AutomatonError> {
        let state = self
            .states
            .get_mut(&id)
            .ok_or(AutomatonError::UnknownState(id))?;
        state.label = label.into();
        debug!(state = %id, label = %state.label, "renamed state");
        Ok(())
    }

    pub fn move_state(&mut self, id: StateId, position: Position) -> Result<(), AutomatonError> {
        let state = self
            .states
            .get_mut(&id)
            .ok_or(AutomatonError::UnknownState(id))?;
        state.position = position;
        debug!(state = %id, x = position.x, y = position.y, "moved state");
        Ok(())
    }

    pub fn set_layout(
        &mut self,
        id: TransitionId,
        layout: TransitionLayout,
    ) -> Result<(), AutomatonError> {
        let index = self
            .index_of(id)
            .ok_or(AutomatonError::UnknownTransition(id))?;
        self.transitions[index].layout = layout;
        debug!(transition = %id, "updated transition layout");
        Ok(())
    }

    /// The transition leaving `state` on `symbol`, if any.
    ///
    /// The determinism check guarantees there is at most one.
    pub fn lookup(&self, state: StateId, symbol: char) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.carries(symbol))
    }

    /// Evaluate `input` with the model's variant.
    pub fn accepts(&self, input: &str) -> bool {
        self.variant.accepts(self, input)
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(&id)
    }

    /// States in id order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.values()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }

    /// Transitions in creation order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn start_state(&self) -> Option<&State> {
        self.start.and_then(|id| self.states.get(&id))
    }

    pub fn start_state_id(&self) -> Option<StateId> {
        self.start
    }

    pub fn outgoing(&self, from: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.from == from)
    }

    pub fn transition_between(&self, from: StateId, to: StateId) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.to == to)
    }

    /// Every symbol used by some transition.
    pub fn alphabet(&self) -> SymbolSet {
        self.transitions
            .iter()
            .flat_map(|t| t.symbols.iter())
            .collect()
    }

    /// The id the next added state will receive.
    pub fn state_counter(&self) -> u32 {
        self.next_id
    }

    /// Insert a state with a known id, as when restoring a snapshot.
    /// Returns `false` and changes nothing if the id is taken.
    pub(crate) fn restore_state(&mut self, state: State) -> bool {
        if self.states.contains_key(&state.id) {
            return false;
        }
        self.next_id = self.next_id.max(state.id.get().saturating_add(1));
        self.states.insert(state.id, state);
        true
    }

    /// Move the id counter forward to at least `counter`.
    pub(crate) fn advance_counter(&mut self, counter: u32) {
        self.next_id = self.next_id.max(counter);
    }

    /// Shared path for creating and merging transitions.
    pub(crate) fn insert_transition(
        &mut self,
        id: Option<TransitionId>,
        from: StateId,
        to: StateId,
        raw: &[&str],
        layout: TransitionLayout,
    ) -> Result<&Transition, AutomatonError> {
        let existing = self
            .transitions
            .iter()
            .position(|t| t.from == from && t.to == to);
        let skip = existing.map(|index| self.transitions[index].id);
        let requested = self.validate(from, to, raw, skip)?;

        if let Some(index) = existing {
            let added = requested.difference(&self.transitions[index].symbols);
            if added.is_empty() {
                return Err(AutomatonError::DuplicateSymbol {
                    symbols: requested.iter().collect(),
                });
            }
            self.transitions[index].symbols.extend_from(&added);
            debug!(
                transition = %self.transitions[index].id,
                symbols = %added,
                "merged symbols into transition"
            );
            return Ok(&self.transitions[index]);
        }

        let id = match id {
            Some(id) if self.transition(id).is_none() => id,
            _ => TransitionId::new(),
        };
        debug!(transition = %id, from = %from, to = %to, symbols = %requested, "added transition");
        self.transitions.push(Transition {
            id,
            from,
            to,
            symbols: requested,
            layout,
        });
        Ok(&self.transitions[self.transitions.len() - 1])
    }

    fn validate(
        &self,
        from: StateId,
        to: StateId,
        raw: &[&str],
        skip: Option<TransitionId>,
    ) -> Result<SymbolSet, AutomatonError> {
        self.require_state(from)?;
        self.require_state(to)?;
        if raw.is_empty() {
            return Err(AutomatonError::EmptySymbols);
        }

        let others: Vec<&Transition> = self
            .outgoing(from)
            .filter(|t| Some(t.id) != skip)
            .collect();
        let request = TransitionRequest {
            from,
            to,
            symbols: raw,
            others: &others,
        };

        match self.variant.validate_transition(&request) {
            Validation::Success(symbols) => Ok(symbols),
            Validation::Failure(violations) => Err(collapse_violations(from, violations.iter())),
        }
    }

    fn require_state(&self, id: StateId) -> Result<(), AutomatonError> {
        if self.states.contains_key(&id) {
            Ok(())
        } else {
            Err(AutomatonError::UnknownState(id))
        }
    }

    fn index_of(&self, id: TransitionId) -> Option<usize> {
        self.transitions.iter().position(|t| t.id == id)
    }
}
