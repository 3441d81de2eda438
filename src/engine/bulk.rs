//! Batch accept/reject testing.

use crate::core::AutomatonModel;
use crate::variant::AutomatonVariant;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One input with its expected and actual verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkCase {
    pub input: String,
    pub expected: bool,
    pub actual: bool,
}

impl BulkCase {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Results of a [`bulk_test`] run, accept cases first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    cases: Vec<BulkCase>,
}

impl BulkReport {
    pub fn cases(&self) -> &[BulkCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|case| case.passed()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &BulkCase> + '_ {
        self.cases.iter().filter(|case| !case.passed())
    }

    /// True for an empty report as well.
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(BulkCase::passed)
    }
}

/// Run every input in `should_accept` and `should_reject` and compare the
/// verdict with the expectation.
pub fn bulk_test<V, A, R>(
    model: &AutomatonModel<V>,
    should_accept: A,
    should_reject: R,
) -> BulkReport
where
    V: AutomatonVariant,
    A: IntoIterator,
    A::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let expected_accept = should_accept
        .into_iter()
        .map(|input| (input.as_ref().to_string(), true));
    let expected_reject = should_reject
        .into_iter()
        .map(|input| (input.as_ref().to_string(), false));

    let cases: Vec<BulkCase> = expected_accept
        .chain(expected_reject)
        .map(|(input, expected)| {
            let actual = model.accepts(&input);
            BulkCase {
                input,
                expected,
                actual,
            }
        })
        .collect();

    let report = BulkReport { cases };
    debug!(
        cases = report.len(),
        passed = report.passed_count(),
        "bulk test finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SymbolSet;
    use crate::variant::{Checked, Dfa, TransitionRequest};

    /// Dfa editing rules, but every input is rejected.
    #[derive(Clone, Copy, Debug)]
    struct RejectAll;

    impl AutomatonVariant for RejectAll {
        fn name(&self) -> &str {
            "reject-all"
        }

        fn validate_transition(&self, request: &TransitionRequest<'_>) -> Checked<SymbolSet> {
            Dfa.validate_transition(request)
        }

        fn accepts(&self, _model: &AutomatonModel<Self>, _input: &str) -> bool {
            false
        }
    }

    fn ends_with_a() -> AutomatonModel {
        let mut model = AutomatonModel::new();
        let q0 = model.add_state(0.0, 0.0).id();
        let q1 = model.add_state(1.0, 0.0).id();
        model.toggle_final(q1).unwrap();
        model.add_or_merge_transition(q0, q1, ["a"]).unwrap();
        model.add_or_merge_transition(q0, q0, ["b"]).unwrap();
        model.add_or_merge_transition(q1, q1, ["a"]).unwrap();
        model.add_or_merge_transition(q1, q0, ["b"]).unwrap();
        model
    }

    #[test]
    fn all_expectations_met() {
        let model = ends_with_a();
        let report = bulk_test(&model, ["a", "ba", "bba"], ["", "b", "ab"]);

        assert_eq!(report.len(), 6);
        assert!(report.all_passed());
        assert_eq!(report.passed_count(), 6);
    }

    #[test]
    fn mismatches_are_reported() {
        let model = ends_with_a();
        let report = bulk_test(&model, ["ab", "a"], vec!["aa".to_string()]);

        let failed: Vec<&str> = report.failed().map(|case| case.input.as_str()).collect();
        assert_eq!(failed, vec!["ab", "aa"]);
        assert!(!report.all_passed());
        assert_eq!(report.passed_count(), 1);
    }

    #[test]
    fn empty_lists_pass_trivially() {
        let model = ends_with_a();
        let none: [&str; 0] = [];
        let report = bulk_test(&model, none, none);
        assert!(report.is_empty());
        assert!(report.all_passed());
    }

    #[test]
    fn verdicts_come_from_the_variant() {
        let mut model = AutomatonModel::with_variant(RejectAll);
        let q0 = model.add_state(0.0, 0.0).id();
        model.toggle_final(q0).unwrap();

        let report = bulk_test(&model, [""], ["a"]);

        assert_eq!(report.passed_count(), 1);
        let failed: Vec<_> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].input, "");
        assert!(!failed[0].actual);
    }
}
