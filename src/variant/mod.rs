//! Automaton variants.
//!
//! A variant decides which transition edits are legal and what it means
//! for the automaton to accept an input. The model stays the same for
//! every variant; only the [`AutomatonVariant`] implementation changes.
//!
//! Validation follows a collect-everything approach: each requested
//! symbol is checked on its own and all findings are returned together,
//! using Stillwater's `Validation` type.
//!
//! # Example
//!
//! ```rust
//! use dfa_studio::core::StateId;
//! use dfa_studio::variant::{AutomatonVariant, Dfa, TransitionRequest};
//!
//! let request = TransitionRequest {
//!     from: StateId::new(0),
//!     to: StateId::new(1),
//!     symbols: &["a", "bc"],
//!     others: &[],
//! };
//!
//! assert!(Dfa.validate_transition(&request).is_failure());
//! ```

mod dfa;
mod violations;

pub use dfa::Dfa;
pub(crate) use violations::collapse_violations;
pub use violations::{Checked, SymbolViolation};

use crate::core::{AutomatonModel, StateId, SymbolSet, Transition};

/// Everything a variant needs to judge one transition edit.
#[derive(Clone, Copy, Debug)]
pub struct TransitionRequest<'a> {
    pub from: StateId,
    pub to: StateId,
    /// Symbols as entered, not yet validated.
    pub symbols: &'a [&'a str],
    /// Transitions leaving `from`, minus the one being edited or merged into.
    pub others: &'a [&'a Transition],
}

impl TransitionRequest<'_> {
    /// The other transition from the source state already carrying `symbol`.
    pub fn claimed_by(&self, symbol: char) -> Option<&Transition> {
        self.others.iter().copied().find(|t| t.carries(symbol))
    }
}

/// Capabilities an automaton flavor plugs into the model.
pub trait AutomatonVariant {
    /// Short display name, e.g. `"DFA"`.
    fn name(&self) -> &str;

    /// Check a transition edit, returning the symbol set to apply.
    fn validate_transition(&self, request: &TransitionRequest<'_>) -> Checked<SymbolSet>;

    /// Whether `model` accepts `input`.
    fn accepts(&self, model: &AutomatonModel<Self>, input: &str) -> bool
    where
        Self: Sized;
}
