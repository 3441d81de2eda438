//! Bulk Testing
//!
//! This example checks an automaton against lists of words it should
//! accept and reject, then saves and reloads it.
//!
//! Key concepts:
//! - Batch accept/reject testing
//! - Fixing a failing automaton by editing transitions
//! - Saving to the editor's JSON shape and loading it back
//!
//! Run with: cargo run --example bulk_testing

use dfa_studio::builder::AutomatonBuilder;
use dfa_studio::engine::bulk_test;
use dfa_studio::persist::{from_json, to_json, PersistLimits};

fn main() {
    println!("=== Bulk Testing ===\n");

    let accept = ["ab", "aab", "abab"];
    let reject = ["", "a", "b", "ba"];

    // Words over {a, b} ending in "ab", missing the edge back from q2
    let mut model = AutomatonBuilder::new()
        .state("q0")
        .state("q1")
        .final_state("q2")
        .transition("q0", "q1", "a")
        .transition("q0", "q0", "b")
        .transition("q1", "q1", "a")
        .transition("q1", "q2", "b")
        .build()
        .unwrap();

    let report = bulk_test(&model, accept, reject);
    println!("First attempt: {}/{} passed", report.passed_count(), report.len());
    for case in report.failed() {
        println!(
            "  {:?}: expected {}, got {}",
            case.input, case.expected, case.actual
        );
    }

    let ids: Vec<_> = model.states().map(|s| s.id()).collect();
    model.add_or_merge_transition(ids[2], ids[1], ["a"]).unwrap();
    model.add_or_merge_transition(ids[2], ids[0], ["b"]).unwrap();

    let report = bulk_test(&model, accept, reject);
    println!("\nAfter fix: {}/{} passed", report.passed_count(), report.len());

    let limits = PersistLimits::default();
    let json = to_json(&model, &limits).unwrap();
    println!("\nSaved form ({} bytes):\n{json}", json.len());

    let restored = from_json(&json, &limits).unwrap();
    let report = bulk_test(&restored, accept, reject);
    println!("\nAfter reload: all passed = {}", report.all_passed());

    println!("\n=== Example Complete ===");
}
