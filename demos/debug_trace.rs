//! Debug Trace
//!
//! This example steps through the evaluation of an input the way the
//! editor's debugger panel does.
//!
//! Key concepts:
//! - Building a DFA by state label
//! - Producing a trace and walking it with a cursor
//! - Rejection on a missing transition (no implicit trap state)
//!
//! Run with: cargo run --example debug_trace

use dfa_studio::builder::AutomatonBuilder;
use dfa_studio::engine::{trace, TraceCursor};

fn main() {
    println!("=== Debug Trace ===\n");

    // Binary strings ending in "01"
    let model = AutomatonBuilder::new()
        .state("start")
        .state("saw0")
        .final_state("saw01")
        .transition("start", "start", "1")
        .transition("start", "saw0", "0")
        .transition("saw0", "saw0", "0")
        .transition("saw0", "saw01", "1")
        .transition("saw01", "saw0", "0")
        .transition("saw01", "start", "1")
        .build()
        .unwrap();

    for input in ["1101", "0110", "01x1"] {
        println!("Input {input:?}:");
        let run = trace(&model, input).unwrap();
        let mut cursor = TraceCursor::new(&run);

        loop {
            if let Some(step) = cursor.current() {
                println!(
                    "  [{}] remaining {:<6?} {}",
                    step.index, step.remaining, step.message
                );
            }
            if cursor.is_at_end() {
                break;
            }
            cursor.forward();
        }
        println!("  => {}\n", if run.accepted() { "ACCEPT" } else { "REJECT" });
    }

    println!("=== Example Complete ===");
}
