//! Serializable automaton definitions.
//!
//! A definition is the data form of an automaton: the same five
//! components `Automaton::new` takes, plus a format version. Definitions
//! can be stored as JSON or in a compact binary form, and are validated
//! when turned back into an `Automaton`.

use crate::core::{Automaton, Label};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::DefinitionError;

/// Version identifier for definition format
pub const DEFINITION_VERSION: u32 = 1;

/// One entry of the transition function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry<Q, A> {
    pub from: Q,
    pub symbol: A,
    pub to: Q,
}

/// Serializable definition of an automaton.
///
/// Transitions are stored as a list of entries rather than a map, so
/// labels of any serializable type work in JSON.
///
/// # Example
///
/// ```rust
/// use dfa_engine::definition::AutomatonDefinition;
///
/// let json = r#"{
///     "version": 1,
///     "states": ["q0", "q1"],
///     "alphabet": ["a", "b"],
///     "transitions": [
///         { "from": "q0", "symbol": "a", "to": "q1" },
///         { "from": "q0", "symbol": "b", "to": "q0" },
///         { "from": "q1", "symbol": "a", "to": "q1" },
///         { "from": "q1", "symbol": "b", "to": "q0" }
///     ],
///     "initial_state": "q0",
///     "accepting_states": ["q1"]
/// }"#;
///
/// let definition: AutomatonDefinition<String, char> =
///     AutomatonDefinition::from_json(json).unwrap();
/// let dfa = definition.build().unwrap();
///
/// assert!(dfa.accepts_str("aabaa"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition<Q, A> {
    /// Definition format version
    pub version: u32,

    /// State set, in declaration order
    pub states: Vec<Q>,

    /// Input alphabet, in declaration order
    pub alphabet: Vec<A>,

    /// Partial transition function
    pub transitions: Vec<TransitionEntry<Q, A>>,

    pub initial_state: Q,

    pub accepting_states: Vec<Q>,
}

fn check_version(found: u32) -> Result<(), DefinitionError> {
    if found != DEFINITION_VERSION {
        return Err(DefinitionError::UnsupportedVersion {
            found,
            supported: DEFINITION_VERSION,
        });
    }
    Ok(())
}

impl<Q: Label, A: Label> AutomatonDefinition<Q, A> {
    /// Validate the definition and build the automaton it describes.
    pub fn build(self) -> Result<Automaton<Q, A>, DefinitionError> {
        check_version(self.version)?;

        let transitions = self
            .transitions
            .into_iter()
            .map(|entry| ((entry.from, entry.symbol), entry.to));

        let automaton = Automaton::new(
            self.states,
            self.alphabet,
            transitions,
            self.initial_state,
            self.accepting_states,
        )?;
        Ok(automaton)
    }
}

impl<Q, A> AutomatonDefinition<Q, A>
where
    Q: Serialize + DeserializeOwned,
    A: Serialize + DeserializeOwned,
{
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Decode a definition from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        check_version(definition.version)?;
        Ok(definition)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, DefinitionError> {
        bincode::serialize(self).map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Decode a definition from its binary form, rejecting unknown format
    /// versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DefinitionError> {
        let definition: Self = bincode::deserialize(bytes)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        check_version(definition.version)?;
        Ok(definition)
    }
}

impl<Q: Label, A: Label> Automaton<Q, A> {
    /// Data form of this automaton.
    ///
    /// Transitions are listed by state order, then alphabet order, so the
    /// same automaton always yields the same definition.
    pub fn to_definition(&self) -> AutomatonDefinition<Q, A> {
        let mut transitions = Vec::with_capacity(self.transitions().len());
        for from in self.states() {
            for symbol in self.alphabet() {
                if let Some(to) = self.step(from, symbol) {
                    transitions.push(TransitionEntry {
                        from: from.clone(),
                        symbol: symbol.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        let accepting_states = self
            .states()
            .iter()
            .filter(|state| self.is_accepting(state))
            .cloned()
            .collect();

        AutomatonDefinition {
            version: DEFINITION_VERSION,
            states: self.states().to_vec(),
            alphabet: self.alphabet().to_vec(),
            transitions,
            initial_state: self.initial_state().clone(),
            accepting_states,
        }
    }
}
