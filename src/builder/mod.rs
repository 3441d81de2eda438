//! Builder API for ergonomic automaton construction.
//!
//! Interactive editors call the model operations directly; the builder is
//! for code that knows the whole automaton up front, such as tests and
//! bundled samples.

pub mod automaton;
pub mod error;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;

use crate::core::AutomatonModel;

/// Build a single-state automaton that accepts every word over `alphabet`,
/// given as a comma-joined symbol list.
///
/// # Example
///
/// ```
/// use dfa_studio::builder::universal;
///
/// let model = universal("a,b").unwrap();
/// assert!(model.accepts(""));
/// assert!(model.accepts("abab"));
/// assert!(!model.accepts("c"));
/// ```
pub fn universal(alphabet: &str) -> Result<AutomatonModel, BuildError> {
    AutomatonBuilder::new()
        .final_state("q0")
        .transition("q0", "q0", alphabet)
        .build()
}

/// Build a chain automaton accepting exactly `word`.
///
/// # Example
///
/// ```
/// use dfa_studio::builder::exact_word;
///
/// let model = exact_word("ab").unwrap();
/// assert!(model.accepts("ab"));
/// assert!(!model.accepts("a"));
/// assert!(!model.accepts("abb"));
/// ```
pub fn exact_word(word: &str) -> Result<AutomatonModel, BuildError> {
    let length = word.chars().count();
    let mut builder = AutomatonBuilder::new();
    for index in 0..length {
        builder = builder.state(format!("q{index}"));
    }
    builder = builder.final_state(format!("q{length}"));

    for (index, symbol) in word.chars().enumerate() {
        builder = builder.transition(
            format!("q{index}"),
            format!("q{}", index + 1),
            symbol.to_string(),
        );
    }
    builder.build()
}
