//! Deterministic finite automaton and its execution engine.

use super::label::Label;
use super::table::TransitionTable;
use super::trace::{Trace, TransitionRecord};
use crate::builder::BuildError;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::Debug;

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<Q, A> {
    /// All input consumed, ending in an accepting state
    Accepted { state: Q },

    /// All input consumed, ending in a non-accepting state
    Rejected { state: Q },

    /// No transition defined for `symbol` from `state`. `position` is the
    /// zero-based index of `symbol` in the input; nothing after it was read.
    Undefined { state: Q, symbol: A, position: usize },
}

impl<Q, A> Outcome<Q, A> {
    /// The state the run stopped in.
    pub fn state(&self) -> &Q {
        match self {
            Self::Accepted { state } | Self::Rejected { state } | Self::Undefined { state, .. } => {
                state
            }
        }
    }
}

/// Result of a traced run: the outcome plus every transition taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<Q, A> {
    pub outcome: Outcome<Q, A>,
    pub trace: Trace<Q, A>,
}

impl<Q, A> Run<Q, A> {
    /// Whether the input was accepted.
    pub fn accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted { .. })
    }
}

/// Deterministic finite automaton.
///
/// Built once and never mutated. Every operation reads only this value's
/// own fields, so a shared automaton can run any number of inputs
/// concurrently.
///
/// Construction checks that the initial state, every accepting state and
/// every transition endpoint belong to the state set, and that every
/// transition symbol belongs to the alphabet. The transition function may
/// be partial: an undefined `(state, symbol)` pair rejects the input.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Automaton;
///
/// let dfa = Automaton::new(
///     ["q0", "q1"],
///     ['a', 'b'],
///     [
///         (("q0", 'a'), "q1"),
///         (("q0", 'b'), "q0"),
///         (("q1", 'a'), "q1"),
///         (("q1", 'b'), "q0"),
///     ],
///     "q0",
///     ["q1"],
/// )
/// .unwrap();
///
/// assert!(dfa.accepts_str("aabaa"));
/// assert!(!dfa.accepts_str("ab"));
/// assert!(!dfa.accepts_str("ac"));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<Q: Label, A: Label> {
    states: Vec<Q>,
    alphabet: Vec<A>,
    transitions: TransitionTable<Q, A>,
    initial: Q,
    accepting: HashSet<Q>,
}

fn dedup<L: Label>(labels: impl IntoIterator<Item = L>) -> (Vec<L>, HashSet<L>) {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for label in labels {
        if seen.insert(label.clone()) {
            ordered.push(label);
        }
    }
    (ordered, seen)
}

fn describe<L: Debug>(label: &L) -> String {
    format!("{:?}", label)
}

impl<Q: Label, A: Label> Automaton<Q, A> {
    /// Construct and validate an automaton.
    ///
    /// Repeated states, symbols and accepting states are collapsed,
    /// keeping first-occurrence order. Declaring the same transition twice
    /// is allowed; mapping one `(state, symbol)` pair to two different
    /// targets is a [`BuildError::ConflictingTransition`].
    pub fn new<S, Sigma, T, F>(
        states: S,
        alphabet: Sigma,
        transitions: T,
        initial: Q,
        accepting: F,
    ) -> Result<Self, BuildError>
    where
        S: IntoIterator<Item = Q>,
        Sigma: IntoIterator<Item = A>,
        T: IntoIterator<Item = ((Q, A), Q)>,
        F: IntoIterator<Item = Q>,
    {
        let (states, state_set) = dedup(states);
        let (alphabet, symbol_set) = dedup(alphabet);

        if !state_set.contains(&initial) {
            return Err(BuildError::UnknownInitialState(describe(&initial)));
        }

        let mut accepting_set = HashSet::new();
        for state in accepting {
            if !state_set.contains(&state) {
                return Err(BuildError::UnknownAcceptingState(describe(&state)));
            }
            accepting_set.insert(state);
        }

        let mut table = TransitionTable::new();
        for ((from, symbol), to) in transitions {
            if !state_set.contains(&from) {
                return Err(BuildError::UnknownSourceState {
                    state: describe(&from),
                    symbol: describe(&symbol),
                });
            }
            if !symbol_set.contains(&symbol) {
                return Err(BuildError::UnknownSymbol {
                    state: describe(&from),
                    symbol: describe(&symbol),
                });
            }
            if !state_set.contains(&to) {
                return Err(BuildError::UnknownTargetState {
                    state: describe(&from),
                    symbol: describe(&symbol),
                    target: describe(&to),
                });
            }
            if let Some(existing) = table.get(&from, &symbol) {
                if *existing != to {
                    return Err(BuildError::ConflictingTransition {
                        state: describe(&from),
                        symbol: describe(&symbol),
                        first: describe(existing),
                        second: describe(&to),
                    });
                }
                continue;
            }
            table.insert(from, symbol, to);
        }

        Ok(Self {
            states,
            alphabet,
            transitions: table,
            initial,
            accepting: accepting_set,
        })
    }

    /// All states, in declaration order.
    pub fn states(&self) -> &[Q] {
        &self.states
    }

    /// All symbols, in declaration order.
    pub fn alphabet(&self) -> &[A] {
        &self.alphabet
    }

    /// The partial transition function.
    pub fn transitions(&self) -> &TransitionTable<Q, A> {
        &self.transitions
    }

    /// State every run starts from.
    pub fn initial_state(&self) -> &Q {
        &self.initial
    }

    /// Set of accepting states.
    pub fn accepting_states(&self) -> &HashSet<Q> {
        &self.accepting
    }

    /// Whether `state` is accepting.
    pub fn is_accepting(&self, state: &Q) -> bool {
        self.accepting.contains(state)
    }

    /// Apply the transition function once.
    ///
    /// `None` means no transition is defined for the pair.
    pub fn step(&self, state: &Q, symbol: &A) -> Option<&Q> {
        self.transitions.get(state, symbol)
    }

    /// Decide whether `input` is accepted.
    ///
    /// Walks from the initial state one symbol at a time. The first symbol
    /// with no defined transition (including symbols outside the alphabet)
    /// rejects immediately; otherwise the input is accepted iff the walk
    /// ends in an accepting state. No trace is kept.
    pub fn execute<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut current = &self.initial;
        for item in input {
            match self.step(current, item.borrow()) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.is_accepting(current)
    }

    /// Same walk as [`execute`](Self::execute), returning the outcome and
    /// the transition trace.
    pub fn run<I>(&self, input: I) -> Run<Q, A>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        self.run_from(&self.initial, input)
    }

    /// Walk `input` starting from `start` instead of the initial state.
    ///
    /// Used to resume a run after a prefix. A `start` outside the state set
    /// has no outgoing transitions, so any non-empty input is undefined.
    pub fn run_from<'a, I>(&'a self, start: &'a Q, input: I) -> Run<Q, A>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut current = start;
        let mut trace = Trace::new();

        for (position, item) in input.into_iter().enumerate() {
            let symbol: &A = item.borrow();
            let Some(next) = self.step(current, symbol) else {
                return Run {
                    outcome: Outcome::Undefined {
                        state: current.clone(),
                        symbol: symbol.clone(),
                        position,
                    },
                    trace,
                };
            };
            trace.push(TransitionRecord {
                from: current.clone(),
                symbol: symbol.clone(),
                to: next.clone(),
            });
            current = next;
        }

        let state = current.clone();
        let outcome = if self.is_accepting(current) {
            Outcome::Accepted { state }
        } else {
            Outcome::Rejected { state }
        };
        Run { outcome, trace }
    }
}

impl<Q: Label> Automaton<Q, char> {
    /// Execute over the characters of `input`, one symbol per `char`.
    pub fn accepts_str(&self, input: &str) -> bool {
        self.execute(input.chars())
    }

    /// Traced run over the characters of `input`.
    pub fn run_str(&self, input: &str) -> Run<Q, char> {
        self.run(input.chars())
    }
}
