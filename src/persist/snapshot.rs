//! Plain wire shape of an automaton.
//!
//! Field names follow the editor's saved format (camelCase JSON), and a
//! transition's symbols travel as one comma-joined string. Presentation
//! values are clamped on the way in and out, and everything else is
//! validated on restore exactly as if the automaton had been edited by
//! hand.

use super::error::PersistError;
use super::limits::PersistLimits;
use crate::core::{
    AutomatonModel, Position, State, StateId, SymbolSet, TransitionId, TransitionLayout,
};
use crate::variant::{AutomatonVariant, Dfa};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Saved form of a state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub is_final: bool,
    #[serde(default)]
    pub label: String,
}

/// Saved form of a transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRecord {
    pub id: String,
    pub from_id: u32,
    pub to_id: u32,
    /// Comma-joined symbols, e.g. `a,b`.
    pub symbol: String,
    #[serde(default)]
    pub offset: f64,
    #[serde(default = "default_label_position")]
    pub label_position: f64,
    #[serde(default)]
    pub loop_angle: f64,
}

fn default_label_position() -> f64 {
    TransitionLayout::default().label_position
}

/// Saved form of a whole automaton.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub states: Vec<StateRecord>,
    pub transitions: Vec<TransitionRecord>,
    #[serde(default)]
    pub start_state_id: Option<u32>,
    #[serde(default)]
    pub state_counter: u32,
}

impl Snapshot {
    /// Capture `model`, clamping presentation values into `limits`.
    pub fn capture<V: AutomatonVariant>(
        model: &AutomatonModel<V>,
        limits: &PersistLimits,
    ) -> Self {
        let states = model
            .states()
            .map(|state| StateRecord {
                id: state.id().get(),
                x: limits.clamp_coordinate(state.position().x),
                y: limits.clamp_coordinate(state.position().y),
                is_final: state.is_final(),
                label: state.label().to_string(),
            })
            .collect();

        let transitions = model
            .transitions()
            .iter()
            .map(|transition| {
                let layout = clamp_layout(transition.layout(), limits);
                TransitionRecord {
                    id: transition.id().to_string(),
                    from_id: transition.from().get(),
                    to_id: transition.to().get(),
                    symbol: transition.symbols().to_joined(),
                    offset: layout.offset,
                    label_position: layout.label_position,
                    loop_angle: layout.loop_angle,
                }
            })
            .collect();

        Self {
            states,
            transitions,
            start_state_id: model.start_state_id().map(StateId::get),
            state_counter: model.state_counter(),
        }
    }

    /// Rebuild a DFA from this snapshot.
    pub fn restore(self, limits: &PersistLimits) -> Result<AutomatonModel, PersistError> {
        self.restore_with(Dfa, limits)
    }

    /// Rebuild an automaton of the given variant.
    ///
    /// Fails if records reference missing states, repeat a state id, hold
    /// an id or counter past [`MAX_STATE_ID`](super::limits::MAX_STATE_ID),
    /// carry malformed symbols, or break determinism. Transition ids that are
    /// not UUIDs are replaced by fresh ones.
    pub fn restore_with<V: AutomatonVariant>(
        self,
        variant: V,
        limits: &PersistLimits,
    ) -> Result<AutomatonModel<V>, PersistError> {
        let mut model = AutomatonModel::with_variant(variant);
        limits.check_state_id(self.state_counter)?;

        for record in self.states {
            limits.check_state_id(record.id)?;
            let id = StateId::new(record.id);
            let label = if record.label.is_empty() {
                id.default_label()
            } else {
                record.label
            };
            let state = State {
                id,
                label,
                is_final: record.is_final,
                position: Position::new(
                    limits.clamp_coordinate(record.x),
                    limits.clamp_coordinate(record.y),
                ),
            };
            if !model.restore_state(state) {
                return Err(PersistError::DuplicateState(record.id));
            }
        }
        model.advance_counter(self.state_counter);

        for record in &self.transitions {
            let id = Uuid::parse_str(&record.id)
                .ok()
                .map(TransitionId::from_uuid);
            let layout = clamp_layout(
                TransitionLayout {
                    offset: record.offset,
                    label_position: record.label_position,
                    loop_angle: record.loop_angle,
                },
                limits,
            );
            model.insert_transition(
                id,
                StateId::new(record.from_id),
                StateId::new(record.to_id),
                &SymbolSet::split_joined(&record.symbol),
                layout,
            )?;
        }

        if let Some(start) = self.start_state_id {
            model.set_start_state(StateId::new(start))?;
        }

        debug!(
            states = model.state_count(),
            transitions = model.transitions().len(),
            "restored automaton"
        );
        Ok(model)
    }
}

fn clamp_layout(layout: TransitionLayout, limits: &PersistLimits) -> TransitionLayout {
    let label_position = if layout.label_position.is_nan() {
        default_label_position()
    } else {
        layout.label_position.clamp(0.0, 1.0)
    };
    let loop_angle = if layout.loop_angle.is_finite() {
        layout.loop_angle
    } else {
        0.0
    };

    TransitionLayout {
        offset: limits.clamp_offset(layout.offset),
        label_position,
        loop_angle,
    }
}
