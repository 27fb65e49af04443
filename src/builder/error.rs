//! Build errors for automaton construction.

use thiserror::Error;

/// Errors that can occur when constructing an automaton.
///
/// Labels are rendered with their `Debug` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state {0} is not in the state set")]
    UnknownInitialState(String),

    #[error("Accepting state {0} is not in the state set")]
    UnknownAcceptingState(String),

    #[error("Transition ({state}, {symbol}) starts from a state outside the state set")]
    UnknownSourceState { state: String, symbol: String },

    #[error("Transition ({state}, {symbol}) leads to {target}, which is not in the state set")]
    UnknownTargetState {
        state: String,
        symbol: String,
        target: String,
    },

    #[error("Transition ({state}, {symbol}) reads a symbol outside the alphabet")]
    UnknownSymbol { state: String, symbol: String },

    #[error("Conflicting transitions for ({state}, {symbol}): {first} and {second}")]
    ConflictingTransition {
        state: String,
        symbol: String,
        first: String,
        second: String,
    },
}
