//! Builder for constructing automata by state label.

use crate::builder::error::BuildError;
use crate::core::{AutomatonModel, StateId, SymbolSet};
use std::collections::HashMap;

/// Horizontal distance between consecutive states in the default layout.
const STATE_SPACING: f64 = 120.0;

/// Builder for automata with a fluent API.
///
/// States are referred to by label, so labels must be unique here even
/// though the model itself allows duplicates. Transitions go through the
/// model's normal validation.
///
/// # Example
///
/// ```rust
/// use dfa_studio::builder::AutomatonBuilder;
///
/// let model = AutomatonBuilder::new()
///     .state("q0")
///     .final_state("q1")
///     .transition("q0", "q1", "a")
///     .transition("q1", "q1", "a,b")
///     .build()
///     .unwrap();
///
/// assert!(model.accepts("abba"));
/// assert!(!model.accepts("b"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<(String, bool)>,
    start: Option<String>,
    transitions: Vec<(String, String, String)>,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a non-accepting state.
    pub fn state(mut self, label: impl Into<String>) -> Self {
        self.states.push((label.into(), false));
        self
    }

    /// Declare an accepting state.
    pub fn final_state(mut self, label: impl Into<String>) -> Self {
        self.states.push((label.into(), true));
        self
    }

    /// Choose the start state. Defaults to the first declared state.
    pub fn start(mut self, label: impl Into<String>) -> Self {
        self.start = Some(label.into());
        self
    }

    /// Add a transition labeled with a comma-joined symbol list, e.g. `"a,b"`.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        symbols: impl Into<String>,
    ) -> Self {
        self.transitions
            .push((from.into(), to.into(), symbols.into()));
        self
    }

    /// Build the automaton.
    pub fn build(self) -> Result<AutomatonModel, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut model = AutomatonModel::new();
        let mut ids: HashMap<String, StateId> = HashMap::new();

        for (index, (label, is_final)) in self.states.into_iter().enumerate() {
            if ids.contains_key(&label) {
                return Err(BuildError::DuplicateLabel(label));
            }
            let id = model.add_state(index as f64 * STATE_SPACING, 0.0).id();
            model.rename(id, label.clone())?;
            model.set_final(id, is_final)?;
            ids.insert(label, id);
        }

        let resolve = |label: &str| {
            ids.get(label)
                .copied()
                .ok_or_else(|| BuildError::UnknownLabel(label.to_string()))
        };

        if let Some(start) = &self.start {
            model.set_start_state(resolve(start.as_str())?)?;
        }

        for (from, to, symbols) in &self.transitions {
            let from = resolve(from.as_str())?;
            let to = resolve(to.as_str())?;
            model.add_or_merge_transition(from, to, SymbolSet::split_joined(symbols))?;
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AutomatonError;

    #[test]
    fn builder_requires_states() {
        let result = AutomatonBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_rejects_duplicate_labels() {
        let result = AutomatonBuilder::new().state("q0").state("q0").build();
        assert!(matches!(result, Err(BuildError::DuplicateLabel(label)) if label == "q0"));
    }

    #[test]
    fn builder_rejects_unknown_labels() {
        let result = AutomatonBuilder::new()
            .state("q0")
            .transition("q0", "q9", "a")
            .build();
        assert!(matches!(result, Err(BuildError::UnknownLabel(label)) if label == "q9"));
    }

    #[test]
    fn builder_surfaces_model_errors() {
        let result = AutomatonBuilder::new()
            .state("q0")
            .state("q1")
            .transition("q0", "q1", "a")
            .transition("q0", "q0", "a")
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Automaton(
                AutomatonError::DeterminismViolation { .. }
            ))
        ));
    }

    #[test]
    fn fluent_api_builds_model() {
        let model = AutomatonBuilder::new()
            .state("even")
            .final_state("odd")
            .start("odd")
            .transition("even", "odd", "1")
            .transition("odd", "even", "1")
            .transition("even", "even", "0")
            .transition("odd", "odd", "0")
            .build()
            .unwrap();

        assert_eq!(model.state_count(), 2);
        assert_eq!(model.transitions().len(), 4);
        assert_eq!(model.start_state().unwrap().label(), "odd");
        assert!(model.accepts(""));
        assert!(model.accepts("11"));
        assert!(!model.accepts("1"));
    }
}
