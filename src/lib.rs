//! dfa-engine: a pure deterministic finite automaton engine
//!
//! An automaton is built once from a finite state set, an input alphabet,
//! a (possibly partial) transition function, an initial state and a set of
//! accepting states. Running it over an input is a pure function: no I/O,
//! no shared mutable state, and an optional structured trace of every
//! transition taken.
//!
//! # Core Concepts
//!
//! - **Automaton**: validated, immutable DFA definition and its engine
//! - **Run**: how a walk ended, plus its transition trace
//! - **Definition**: serializable data form of an automaton
//!
//! A `(state, symbol)` pair with no transition is not an error: the input
//! is rejected on the spot. Only malformed definitions fail, and they fail
//! at construction.
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::builder::AutomatonBuilder;
//! use dfa_engine::core::Outcome;
//!
//! let dfa = AutomatonBuilder::new()
//!     .states(["q0", "q1"])
//!     .alphabet(['a', 'b'])
//!     .transition("q0", 'a', "q1")
//!     .transition("q0", 'b', "q0")
//!     .transition("q1", 'a', "q1")
//!     .transition("q1", 'b', "q0")
//!     .initial("q0")
//!     .accepting("q1")
//!     .build()
//!     .unwrap();
//!
//! assert!(dfa.accepts_str("aabaa"));
//!
//! let run = dfa.run_str("ac");
//! assert!(!run.accepted());
//! assert_eq!(run.trace.len(), 1);
//! assert!(matches!(run.outcome, Outcome::Undefined { position: 1, .. }));
//! ```

pub mod builder;
pub mod core;
pub mod definition;

// Re-export commonly used types
pub use self::builder::{AutomatonBuilder, BuildError};
pub use self::core::{Automaton, Label, Outcome, Run, Trace, TransitionRecord, TransitionTable};
pub use self::definition::{AutomatonDefinition, DefinitionError};
