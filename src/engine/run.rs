//! Plain acceptance check.

use crate::core::AutomatonModel;
use crate::variant::AutomatonVariant;
use tracing::trace;

/// Whether `model` accepts `input`, read one character at a time.
///
/// Rejects when there is no start state or when some character has no
/// matching transition; there is no implicit trap state. Otherwise the
/// answer is whether the state reached after the last character is
/// accepting. The empty input is accepted iff the start state is.
///
/// # Example
///
/// ```rust
/// use dfa_studio::core::AutomatonModel;
/// use dfa_studio::engine::accepts;
///
/// let mut model = AutomatonModel::new();
/// let q0 = model.add_state(0.0, 0.0).id();
/// model.toggle_final(q0).unwrap();
/// model.add_or_merge_transition(q0, q0, ["a", "b"]).unwrap();
///
/// assert!(accepts(&model, ""));
/// assert!(accepts(&model, "abba"));
/// assert!(!accepts(&model, "abc"));
/// ```
pub fn accepts<V: AutomatonVariant>(model: &AutomatonModel<V>, input: &str) -> bool {
    let Some(mut current) = model.start_state() else {
        return false;
    };

    for symbol in input.chars() {
        let Some(transition) = model.lookup(current.id(), symbol) else {
            trace!(state = %current.id(), %symbol, "no transition, rejecting");
            return false;
        };
        let Some(next) = model.state(transition.to()) else {
            return false;
        };
        current = next;
    }

    current.is_final()
}
