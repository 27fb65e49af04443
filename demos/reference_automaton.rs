//! Reference Automaton Example
//!
//! Two states over {a, b}: `q1` is reached by reading `a`, `q0` by reading
//! `b`. The automaton accepts exactly the inputs that end in `a`.
//!
//! Run with: cargo run --example reference_automaton [input]

use dfa_engine::core::Outcome;
use dfa_engine::definition::AutomatonDefinition;

const DEFINITION: &str = r#"{
    "version": 1,
    "states": ["q0", "q1"],
    "alphabet": ["a", "b"],
    "transitions": [
        { "from": "q0", "symbol": "a", "to": "q1" },
        { "from": "q0", "symbol": "b", "to": "q0" },
        { "from": "q1", "symbol": "a", "to": "q1" },
        { "from": "q1", "symbol": "b", "to": "q0" }
    ],
    "initial_state": "q0",
    "accepting_states": ["q1"]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = std::env::args().nth(1).unwrap_or_else(|| "aabaa".to_string());

    let dfa = AutomatonDefinition::<String, char>::from_json(DEFINITION)?.build()?;
    let run = dfa.run_str(&input);

    println!("=== Input {:?} ===", input);
    for record in run.trace.records() {
        println!("{}", record);
    }

    match &run.outcome {
        Outcome::Accepted { state } => println!("Accepted in {}", state),
        Outcome::Rejected { state } => println!("Rejected: {} is not accepting", state),
        Outcome::Undefined {
            state,
            symbol,
            position,
        } => println!(
            "Rejected: no transition from {} on {:?} at position {}",
            state, symbol, position
        ),
    }

    Ok(())
}
