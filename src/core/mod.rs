//! Core automaton types and logic.
//!
//! This module contains the pure core of the engine:
//! - The `Label` bound for states and symbols
//! - The partial transition function
//! - Structured transition traces
//! - The `Automaton` itself and its runs
//!
//! Nothing in this module performs I/O. A run is a pure function of the
//! automaton and the input.

mod automaton;
mod label;
mod table;
mod trace;

pub use automaton::{Automaton, Outcome, Run};
pub use label::Label;
pub use table::TransitionTable;
pub use trace::{Trace, TransitionRecord};
