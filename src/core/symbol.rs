//! Symbol sets carried by transitions.

use std::collections::BTreeSet;
use std::fmt;

/// Separator used when a symbol set is written as a single string.
pub const SYMBOL_SEPARATOR: char = ',';

/// Set of distinct one-character symbols.
///
/// Iteration order is the natural `char` order, which keeps messages and
/// the serialized form stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SymbolSet(BTreeSet<char>);

impl SymbolSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    pub fn insert(&mut self, symbol: char) -> bool {
        self.0.insert(symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Symbols in `self` that are not in `other`.
    pub fn difference(&self, other: &SymbolSet) -> SymbolSet {
        Self(self.0.difference(&other.0).copied().collect())
    }

    /// Add every symbol of `other` to `self`.
    pub fn extend_from(&mut self, other: &SymbolSet) {
        self.0.extend(other.iter());
    }

    /// Split a comma-joined symbol list into its trimmed, non-empty pieces.
    ///
    /// The pieces are not validated; that is the automaton variant's job.
    ///
    /// ```
    /// use dfa_studio::core::SymbolSet;
    ///
    /// assert_eq!(SymbolSet::split_joined("a, b,,c "), vec!["a", "b", "c"]);
    /// ```
    pub fn split_joined(joined: &str) -> Vec<&str> {
        joined
            .split(SYMBOL_SEPARATOR)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    /// Comma-joined form, e.g. `a,b,c`.
    pub fn to_joined(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<char> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for symbol in self.iter() {
            if !first {
                write!(f, "{SYMBOL_SEPARATOR}")?;
            }
            write!(f, "{symbol}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_form_is_sorted_and_deduplicated() {
        let set: SymbolSet = "cabca".chars().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_joined(), "a,b,c");
    }

    #[test]
    fn empty_set_joins_to_empty_string() {
        assert_eq!(SymbolSet::new().to_joined(), "");
    }

    #[test]
    fn split_keeps_multi_character_pieces_for_validation() {
        assert_eq!(SymbolSet::split_joined("ab, c"), vec!["ab", "c"]);
        assert!(SymbolSet::split_joined(" , ").is_empty());
    }

    #[test]
    fn difference_and_extend() {
        let mut left: SymbolSet = "ab".chars().collect();
        let right: SymbolSet = "bc".chars().collect();

        assert_eq!(left.difference(&right), "a".chars().collect());
        left.extend_from(&right);
        assert_eq!(left.to_joined(), "a,b,c");
    }
}
