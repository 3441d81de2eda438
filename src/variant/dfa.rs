//! The deterministic finite automaton variant.

use super::violations::{Checked, SymbolViolation};
use super::{AutomatonVariant, TransitionRequest};
use crate::core::{AutomatonModel, SymbolSet, SYMBOL_SEPARATOR};
use crate::engine;
use stillwater::validation::Validation;

/// Deterministic finite automaton.
///
/// Symbols must be exactly one character, and no state may have two
/// outgoing transitions sharing a symbol. `,` and whitespace are refused
/// because they do not survive the comma-joined persisted form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dfa;

impl Dfa {
    fn check_symbol(raw: &str, request: &TransitionRequest<'_>) -> Checked<char> {
        let mut chars = raw.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => {
                return Validation::fail(SymbolViolation::NotSingleCharacter {
                    symbol: raw.to_string(),
                })
            }
        };

        if symbol == SYMBOL_SEPARATOR || symbol.is_whitespace() {
            return Validation::fail(SymbolViolation::Reserved { symbol });
        }

        match request.claimed_by(symbol) {
            Some(existing) => Validation::fail(SymbolViolation::AlreadyClaimed {
                symbol,
                existing: existing.id(),
            }),
            None => Validation::success(symbol),
        }
    }
}

impl AutomatonVariant for Dfa {
    fn name(&self) -> &str {
        "DFA"
    }

    fn validate_transition(&self, request: &TransitionRequest<'_>) -> Checked<SymbolSet> {
        let checks: Vec<Checked<char>> = request
            .symbols
            .iter()
            .map(|raw| Self::check_symbol(raw, request))
            .collect();

        Validation::all_vec(checks).map(|symbols| symbols.into_iter().collect())
    }

    fn accepts(&self, model: &AutomatonModel<Self>, input: &str) -> bool {
        engine::accepts(model, input)
    }
}
