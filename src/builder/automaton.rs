//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, Label};

/// Builder for constructing automata with a fluent API.
pub struct AutomatonBuilder<Q: Label, A: Label> {
    states: Vec<Q>,
    alphabet: Vec<A>,
    transitions: Vec<((Q, A), Q)>,
    initial: Option<Q>,
    accepting: Vec<Q>,
}

impl<Q: Label, A: Label> AutomatonBuilder<Q, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            accepting: Vec::new(),
        }
    }

    /// Add a state.
    pub fn state(mut self, state: Q) -> Self {
        self.states.push(state);
        self
    }

    /// Add several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = Q>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add an input symbol.
    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Add several input symbols at once.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Define `(from, symbol) -> to`.
    pub fn transition(mut self, from: Q, symbol: A, to: Q) -> Self {
        self.transitions.push(((from, symbol), to));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = ((Q, A), Q)>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: Q) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, state: Q) -> Self {
        self.accepting.push(state);
        self
    }

    pub fn accepting_states(mut self, states: impl IntoIterator<Item = Q>) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing or the definition
    /// is malformed.
    pub fn build(self) -> Result<Automaton<Q, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Automaton::new(
            self.states,
            self.alphabet,
            self.transitions,
            initial,
            self.accepting,
        )
    }
}

impl<Q: Label, A: Label> Default for AutomatonBuilder<Q, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transitions;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Parity {
        Even,
        Odd,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = AutomatonBuilder::<Parity, u8>::new()
            .state(Parity::Even)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_propagates_construction_errors() {
        let result = AutomatonBuilder::new()
            .state(Parity::Even)
            .symbol(1u8)
            .initial(Parity::Odd)
            .build();

        assert!(matches!(result, Err(BuildError::UnknownInitialState(_))));
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let dfa = AutomatonBuilder::new()
            .state(Parity::Even)
            .state(Parity::Odd)
            .alphabet([0u8, 1])
            .transition(Parity::Even, 0, Parity::Even)
            .transition(Parity::Even, 1, Parity::Odd)
            .transition(Parity::Odd, 0, Parity::Odd)
            .transition(Parity::Odd, 1, Parity::Even)
            .initial(Parity::Even)
            .accepting(Parity::Even)
            .build()
            .unwrap();

        assert!(dfa.execute([1u8, 0, 1]));
        assert!(!dfa.execute([1u8, 1, 1]));
        assert!(dfa.execute(Vec::<u8>::new()));
    }

    #[test]
    fn accepts_transitions_from_macro() {
        let dfa = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .alphabet(['a', 'b'])
            .transitions(transitions! {
                ("q0", 'a') => "q1",
                ("q0", 'b') => "q0",
                ("q1", 'a') => "q1",
                ("q1", 'b') => "q0",
            })
            .initial("q0")
            .accepting_states(["q1"])
            .build()
            .unwrap();

        assert!(dfa.accepts_str("aabaa"));
        assert!(dfa.accepts_str("ba"));
        assert!(!dfa.accepts_str("b"));
    }

    #[test]
    fn builder_rejects_conflicting_transitions() {
        let result = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .alphabet(['a'])
            .transitions(transitions! {
                ("q0", 'a') => "q1",
            })
            .transition("q0", 'a', "q0")
            .initial("q0")
            .build();

        assert!(matches!(
            result,
            Err(BuildError::ConflictingTransition { .. })
        ));
    }
}
