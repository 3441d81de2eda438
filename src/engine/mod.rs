//! Evaluating input against an automaton.
//!
//! All functions here are read-only over an [`AutomatonModel`](crate::core::AutomatonModel):
//! - [`accepts`]: yes/no verdict, total (no start state means reject)
//! - [`trace`]: every intermediate configuration, for debugging
//! - [`bulk_test`]: verdicts for lists of inputs with expectations
//!
//! Both evaluators walk the model through
//! [`lookup`](crate::core::AutomatonModel::lookup), so a trace always
//! visits the states `accepts` visits.

mod bulk;
mod cursor;
mod run;
mod steps;

pub use bulk::{bulk_test, BulkCase, BulkReport};
pub use cursor::TraceCursor;
pub use run::accepts;
pub use steps::{trace, Step, StepStatus, Trace};
