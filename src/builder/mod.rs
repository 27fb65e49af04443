//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a `transitions!` macro for creating
//! automata with minimal boilerplate. Every path ends in
//! [`Automaton::new`](crate::core::Automaton::new), so all of them are
//! validated the same way.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
