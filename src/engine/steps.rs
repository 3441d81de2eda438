//! Step-by-step evaluation traces.
//!
//! A trace materializes every intermediate configuration of a run so a
//! debugger view can move forward and backward through it. It visits
//! exactly the states and transitions [`accepts`](super::accepts) would.

use crate::core::{AutomatonError, AutomatonModel, StateId, TransitionId};
use crate::variant::AutomatonVariant;
use serde::{Deserialize, Serialize};
use tracing::trace as trace_event;

/// Where a step leaves the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    /// More input remains.
    Running,
    /// No transition matched the next character. Terminal.
    Rejected,
    /// All input consumed. Terminal.
    Final { accepted: bool },
}

/// Snapshot of the run at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// 0 is the configuration before any input is read.
    pub index: usize,
    /// Current state.
    pub state: StateId,
    /// Character read to get here. On a rejected step, the character
    /// that could not be read.
    pub symbol: Option<char>,
    /// Transition taken to get here.
    pub via: Option<TransitionId>,
    /// Input not consumed yet.
    pub remaining: String,
    pub message: String,
    pub status: StepStatus,
}

impl Step {
    pub fn is_rejected(&self) -> bool {
        matches!(self.status, StepStatus::Rejected)
    }

    pub fn is_final(&self) -> bool {
        matches!(self.status, StepStatus::Final { .. })
    }

    /// `Some(verdict)` on the final step, `None` elsewhere.
    pub fn accepted(&self) -> Option<bool> {
        match self.status {
            StepStatus::Final { accepted } => Some(accepted),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, StepStatus::Running)
    }
}

/// Ordered steps of one evaluation.
///
/// Traces are values: evaluating again produces a fresh trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    input: String,
    steps: Vec<Step>,
}

impl Trace {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// True iff the run consumed all input and stopped in an accepting state.
    pub fn accepted(&self) -> bool {
        self.last().and_then(Step::accepted).unwrap_or(false)
    }

    /// States visited, starting with the start state.
    ///
    /// A rejected step stays where the run stopped and adds nothing.
    pub fn path(&self) -> Vec<StateId> {
        self.steps
            .iter()
            .filter(|step| !step.is_rejected())
            .map(|step| step.state)
            .collect()
    }

    /// Transitions taken, in order.
    pub fn transitions_used(&self) -> Vec<TransitionId> {
        self.steps.iter().filter_map(|step| step.via).collect()
    }
}

/// Build the step-by-step trace of `model` reading `input`.
///
/// Unlike [`accepts`](super::accepts), a missing start state is an error:
/// a trace is requested explicitly and the caller needs to say why none
/// could be produced.
///
/// # Example
///
/// ```rust
/// use dfa_studio::core::AutomatonModel;
/// use dfa_studio::engine::trace;
///
/// let mut model = AutomatonModel::new();
/// let q0 = model.add_state(0.0, 0.0).id();
/// let q1 = model.add_state(100.0, 0.0).id();
/// model.add_or_merge_transition(q0, q1, ["a"]).unwrap();
/// model.add_or_merge_transition(q1, q1, ["b"]).unwrap();
/// model.toggle_final(q1).unwrap();
///
/// let run = trace(&model, "ab").unwrap();
/// assert_eq!(run.len(), 3);
/// assert!(run.steps()[0].via.is_none());
/// assert!(run.last().unwrap().is_final());
/// assert!(run.accepted());
/// ```
pub fn trace<V: AutomatonVariant>(
    model: &AutomatonModel<V>,
    input: &str,
) -> Result<Trace, AutomatonError> {
    let start = model.start_state().ok_or(AutomatonError::NoStartState)?;

    let mut steps = Vec::with_capacity(input.chars().count() + 1);
    steps.push(Step {
        index: 0,
        state: start.id(),
        symbol: None,
        via: None,
        remaining: input.to_string(),
        message: format!("Start in {}", start.label()),
        status: StepStatus::Running,
    });

    let mut current = start;
    for (offset, symbol) in input.char_indices() {
        let index = steps.len();

        let Some(transition) = model.lookup(current.id(), symbol) else {
            trace_event!(step = index, state = %current.id(), %symbol, "trace rejected");
            steps.push(Step {
                index,
                state: current.id(),
                symbol: Some(symbol),
                via: None,
                remaining: input[offset..].to_string(),
                message: format!(
                    "No transition from {} on '{}'. Rejected",
                    current.label(),
                    symbol
                ),
                status: StepStatus::Rejected,
            });
            return Ok(Trace {
                input: input.to_string(),
                steps,
            });
        };

        let next = model
            .state(transition.to())
            .ok_or(AutomatonError::UnknownState(transition.to()))?;
        trace_event!(step = index, from = %current.id(), to = %next.id(), %symbol, "trace step");
        steps.push(Step {
            index,
            state: next.id(),
            symbol: Some(symbol),
            via: Some(transition.id()),
            remaining: input[offset + symbol.len_utf8()..].to_string(),
            message: format!("Read '{}': {} -> {}", symbol, current.label(), next.label()),
            status: StepStatus::Running,
        });
        current = next;
    }

    let accepted = current.is_final();
    if let Some(last) = steps.last_mut() {
        let verdict = if accepted { "Accepted" } else { "Rejected" };
        last.message = format!(
            "{}. Input consumed in {}. {}",
            last.message,
            current.label(),
            verdict
        );
        last.status = StepStatus::Final { accepted };
    }

    Ok(Trace {
        input: input.to_string(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::accepts;

    fn even_as() -> AutomatonModel {
        let mut model = AutomatonModel::new();
        let even = model.add_state(0.0, 0.0).id();
        let odd = model.add_state(100.0, 0.0).id();
        model.toggle_final(even).unwrap();
        model.add_or_merge_transition(even, odd, ["a"]).unwrap();
        model.add_or_merge_transition(odd, even, ["a"]).unwrap();
        model.add_or_merge_transition(even, even, ["b"]).unwrap();
        model.add_or_merge_transition(odd, odd, ["b"]).unwrap();
        model
    }

    #[test]
    fn step_zero_is_the_start_configuration() {
        let model = even_as();
        let run = trace(&model, "ab").unwrap();
        let first = &run.steps()[0];

        assert_eq!(first.index, 0);
        assert_eq!(Some(first.state), model.start_state_id());
        assert!(first.symbol.is_none());
        assert!(first.via.is_none());
        assert_eq!(first.remaining, "ab");
    }

    #[test]
    fn remaining_shrinks_one_character_per_step() {
        let model = even_as();
        let run = trace(&model, "aba").unwrap();

        let remaining: Vec<&str> = run.steps().iter().map(|s| s.remaining.as_str()).collect();
        assert_eq!(remaining, vec!["aba", "ba", "a", ""]);
        assert!(run.steps().iter().enumerate().all(|(i, s)| s.index == i));
    }

    #[test]
    fn only_the_last_step_is_terminal() {
        let model = even_as();
        let run = trace(&model, "aab").unwrap();

        let (last, rest) = run.steps().split_last().unwrap();
        assert!(rest.iter().all(|s| !s.is_terminal()));
        assert_eq!(last.accepted(), Some(true));
    }

    #[test]
    fn empty_input_has_a_single_final_step() {
        let model = even_as();
        let run = trace(&model, "").unwrap();

        assert_eq!(run.len(), 1);
        assert!(run.steps()[0].is_final());
        assert!(run.accepted());
    }

    #[test]
    fn missing_transition_ends_with_rejected_step() {
        let model = even_as();
        let run = trace(&model, "acb").unwrap();

        assert_eq!(run.len(), 3);
        let last = run.last().unwrap();
        assert!(last.is_rejected());
        assert_eq!(last.symbol, Some('c'));
        assert_eq!(last.remaining, "cb");
        assert!(last.via.is_none());
        assert!(!run.accepted());
        assert_eq!(run.path().len(), 2);
    }

    #[test]
    fn trace_requires_start_state() {
        let mut model = even_as();
        let start = model.start_state_id().unwrap();
        model.delete_state(start);

        assert_eq!(
            trace(&model, "a").unwrap_err(),
            AutomatonError::NoStartState
        );
    }

    #[test]
    fn trace_agrees_with_accepts() {
        let model = even_as();
        for input in ["", "a", "aa", "ab", "bab", "abab", "c", "aac"] {
            let run = trace(&model, input).unwrap();
            assert_eq!(run.accepted(), accepts(&model, input), "input {input:?}");
        }
    }

    #[test]
    fn transitions_used_follow_the_path() {
        let model = even_as();
        let run = trace(&model, "ab").unwrap();
        let used = run.transitions_used();

        assert_eq!(used.len(), 2);
        let first = model.transition(used[0]).unwrap();
        assert_eq!(first.from(), run.path()[0]);
        assert_eq!(first.to(), run.path()[1]);
    }

    #[test]
    fn trace_serializes_correctly() {
        let model = even_as();
        let run = trace(&model, "ab").unwrap();

        let json = serde_json::to_string(&run).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();

        assert_eq!(run, deserialized);
    }
}
