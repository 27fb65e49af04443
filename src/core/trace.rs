//! Transition trace of a single run.
//!
//! A run records every transition it takes, in order, as plain data.
//! Traces are values: tests can compare them, callers can print or
//! persist them, and nothing is written to the console while running.

use super::label::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single consumed symbol.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::TransitionRecord;
///
/// let record = TransitionRecord {
///     from: "q0",
///     symbol: 'a',
///     to: "q1",
/// };
///
/// assert_eq!(record.to_string(), "(q0, a) |- q1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRecord<Q, A> {
    /// The state before consuming the symbol
    pub from: Q,
    /// The consumed symbol
    pub symbol: A,
    /// The state after consuming the symbol
    pub to: Q,
}

impl<Q: fmt::Display, A: fmt::Display> fmt::Display for TransitionRecord<Q, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) |- {}", self.from, self.symbol, self.to)
    }
}

/// Ordered sequence of transitions taken by a run.
///
/// `record` is pure and returns a new trace. The engine itself appends
/// in place while walking.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{Trace, TransitionRecord};
///
/// let trace = Trace::new()
///     .record(TransitionRecord { from: "q0", symbol: 'a', to: "q1" })
///     .record(TransitionRecord { from: "q1", symbol: 'b', to: "q0" });
///
/// assert_eq!(trace.path(), vec![&"q0", &"q1", &"q0"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace<Q, A> {
    records: Vec<TransitionRecord<Q, A>>,
}

impl<Q: Label, A: Label> Default for Trace<Q, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Label, A: Label> Trace<Q, A> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new trace.
    ///
    /// The existing trace is left unchanged.
    ///
    /// ```rust
    /// use dfa_engine::core::{Trace, TransitionRecord};
    ///
    /// let empty: Trace<&str, char> = Trace::new();
    /// let one = empty.record(TransitionRecord { from: "q0", symbol: 'b', to: "q0" });
    ///
    /// assert_eq!(empty.len(), 0);
    /// assert_eq!(one.len(), 1);
    /// ```
    pub fn record(&self, transition: TransitionRecord<Q, A>) -> Self {
        let mut records = self.records.clone();
        records.push(transition);
        Self { records }
    }

    pub(crate) fn push(&mut self, transition: TransitionRecord<Q, A>) {
        self.records.push(transition);
    }

    /// All records, in the order they were taken.
    pub fn records(&self) -> &[TransitionRecord<Q, A>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// States visited: the first source state, then the target of each
    /// record. Empty when no transition was taken.
    pub fn path(&self) -> Vec<&Q> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Symbols consumed, in order.
    pub fn symbols(&self) -> Vec<&A> {
        self.records.iter().map(|record| &record.symbol).collect()
    }

    /// Target of the last record, if any.
    pub fn last_state(&self) -> Option<&Q> {
        self.records.last().map(|record| &record.to)
    }

    /// This trace followed by `other`.
    pub fn concat(&self, other: &Trace<Q, A>) -> Self {
        let mut records = self.records.clone();
        records.extend(other.records.iter().cloned());
        Self { records }
    }
}

impl<Q: fmt::Display, A: fmt::Display> fmt::Display for Trace<Q, A> {
    /// One record per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &'static str, symbol: char, to: &'static str) -> TransitionRecord<&'static str, char> {
        TransitionRecord { from, symbol, to }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace: Trace<&str, char> = Trace::new();
        assert!(trace.is_empty());
        assert!(trace.path().is_empty());
        assert!(trace.symbols().is_empty());
        assert_eq!(trace.last_state(), None);
    }

    #[test]
    fn record_is_immutable() {
        let trace = Trace::new();
        let new_trace = trace.record(record("q0", 'a', "q1"));

        assert_eq!(trace.len(), 0);
        assert_eq!(new_trace.len(), 1);
    }

    #[test]
    fn path_returns_state_sequence() {
        let trace = Trace::new()
            .record(record("q0", 'a', "q1"))
            .record(record("q1", 'b', "q0"))
            .record(record("q0", 'a', "q1"));

        assert_eq!(trace.path(), vec![&"q0", &"q1", &"q0", &"q1"]);
        assert_eq!(trace.symbols(), vec![&'a', &'b', &'a']);
        assert_eq!(trace.last_state(), Some(&"q1"));
    }

    #[test]
    fn concat_preserves_order() {
        let head = Trace::new().record(record("q0", 'a', "q1"));
        let tail = Trace::new().record(record("q1", 'a', "q1"));

        let joined = head.concat(&tail);
        assert_eq!(joined.records(), &[record("q0", 'a', "q1"), record("q1", 'a', "q1")]);
        assert_eq!(head.len(), 1);
    }

    #[test]
    fn displays_one_record_per_line() {
        let trace = Trace::new()
            .record(record("q0", 'a', "q1"))
            .record(record("q1", 'b', "q0"));

        assert_eq!(trace.to_string(), "(q0, a) |- q1\n(q1, b) |- q0");
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace: Trace<String, char> = Trace::new().record(TransitionRecord {
            from: "q0".to_string(),
            symbol: 'a',
            to: "q1".to_string(),
        });

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace<String, char> = serde_json::from_str(&json).unwrap();

        assert_eq!(trace, deserialized);
    }
}
