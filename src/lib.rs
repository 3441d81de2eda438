//! DFA Studio: the model and simulation core of an interactive DFA editor.
//!
//! An editor front end turns user gestures into calls on an
//! [`AutomatonModel`], which validates each edit before applying it, and
//! then asks the [`engine`] whether inputs are accepted or for a
//! step-by-step trace to display.
//!
//! # Core Concepts
//!
//! - **Model**: states, transitions and the start state, kept consistent
//!   on every edit
//! - **Variant**: the rules of the automaton flavor, [`Dfa`] being the one
//!   provided: single-character symbols, at most one outgoing transition
//!   per symbol
//! - **Engine**: acceptance checks, debug traces and batch testing
//! - **Persist**: the plain saved shape, with size and range limits
//!
//! # Example
//!
//! ```rust
//! use dfa_studio::core::AutomatonModel;
//! use dfa_studio::engine::{bulk_test, trace};
//!
//! let mut model = AutomatonModel::new();
//! let q0 = model.add_state(0.0, 0.0).id();
//! let q1 = model.add_state(120.0, 0.0).id();
//! model.toggle_final(q1).unwrap();
//! model.add_or_merge_transition(q0, q1, ["a"]).unwrap();
//!
//! assert!(model.accepts("a"));
//! assert!(!model.accepts(""));
//!
//! let run = trace(&model, "a").unwrap();
//! assert_eq!(run.path(), vec![q0, q1]);
//!
//! let report = bulk_test(&model, ["a"], ["", "b", "aa"]);
//! assert!(report.all_passed());
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod persist;
pub mod variant;

// Re-export commonly used types
pub use crate::builder::AutomatonBuilder;
pub use crate::core::{AutomatonError, AutomatonModel, State, StateId, Transition, TransitionId};
pub use crate::engine::{accepts, bulk_test, trace, Step, Trace};
pub use crate::variant::{AutomatonVariant, Dfa};
