//! Per-symbol validation findings.

use crate::core::{AutomatonError, StateId, TransitionId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Outcome of checking part of a transition request.
/// Failures accumulate instead of stopping at the first one.
pub type Checked<T> = Validation<T, NonEmptyVec<SymbolViolation>>;

/// Problems found with a single requested symbol
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SymbolViolation {
    #[error("'{symbol}' is not a single character")]
    NotSingleCharacter { symbol: String },

    #[error("'{symbol}' cannot be used as a symbol")]
    Reserved { symbol: char },

    #[error("'{symbol}' already leaves this state on transition {existing}")]
    AlreadyClaimed {
        symbol: char,
        existing: TransitionId,
    },
}

/// Fold the findings for a request from `from` into one error.
///
/// Malformed symbols win over determinism conflicts. Each error lists
/// every symbol of its kind, in request order.
pub(crate) fn collapse_violations<'a, I>(from: StateId, violations: I) -> AutomatonError
where
    I: IntoIterator<Item = &'a SymbolViolation>,
{
    let mut invalid = Vec::new();
    let mut claimed = Vec::new();

    for violation in violations {
        match violation {
            SymbolViolation::NotSingleCharacter { symbol } => invalid.push(symbol.clone()),
            SymbolViolation::Reserved { symbol } => invalid.push(symbol.to_string()),
            SymbolViolation::AlreadyClaimed { symbol, .. } => {
                if !claimed.contains(symbol) {
                    claimed.push(*symbol);
                }
            }
        }
    }

    if invalid.is_empty() {
        AutomatonError::DeterminismViolation {
            state: from,
            symbols: claimed,
        }
    } else {
        AutomatonError::InvalidSymbol { symbols: invalid }
    }
}
