//! Partial transition function of an automaton.

use super::label::Label;
use std::collections::HashMap;

/// Partial mapping `(state, symbol) -> state`.
///
/// Rows are keyed by source state, then by symbol, so a lookup only
/// borrows its key. A missing entry means "no transition defined".
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::TransitionTable;
///
/// let mut table = TransitionTable::new();
/// table.insert("q0", 'a', "q1");
///
/// assert_eq!(table.get(&"q0", &'a'), Some(&"q1"));
/// assert_eq!(table.get(&"q0", &'b'), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<Q: Label, A: Label> {
    rows: HashMap<Q, HashMap<A, Q>>,
    len: usize,
}

impl<Q: Label, A: Label> Default for TransitionTable<Q, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Label, A: Label> TransitionTable<Q, A> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            len: 0,
        }
    }

    /// Define `(from, symbol) -> to`, returning the previous target if
    /// the pair was already defined.
    pub fn insert(&mut self, from: Q, symbol: A, to: Q) -> Option<Q> {
        let previous = self.rows.entry(from).or_default().insert(symbol, to);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Look up the target of `(from, symbol)`.
    pub fn get(&self, from: &Q, symbol: &A) -> Option<&Q> {
        self.rows.get(from)?.get(symbol)
    }

    /// Number of defined `(state, symbol)` pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over every defined transition as `(from, symbol, to)`.
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&Q, &A, &Q)> + '_ {
        self.rows
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(symbol, to)| (from, symbol, to)))
    }
}

impl<Q: Label, A: Label> IntoIterator for TransitionTable<Q, A> {
    type Item = ((Q, A), Q);
    type IntoIter = std::vec::IntoIter<((Q, A), Q)>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows
            .into_iter()
            .flat_map(|(from, row)| {
                row.into_iter()
                    .map(move |(symbol, to)| ((from.clone(), symbol), to))
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_empty() {
        let table: TransitionTable<&str, char> = TransitionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.get(&"q0", &'a'), None);
    }

    #[test]
    fn insert_defines_transition() {
        let mut table = TransitionTable::new();
        assert_eq!(table.insert("q0", 'a', "q1"), None);

        assert_eq!(table.get(&"q0", &'a'), Some(&"q1"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn insert_returns_previous_target() {
        let mut table = TransitionTable::new();
        table.insert("q0", 'a', "q1");

        assert_eq!(table.insert("q0", 'a', "q0"), Some("q1"));
        assert_eq!(table.get(&"q0", &'a'), Some(&"q0"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_miss_is_none() {
        let mut table = TransitionTable::new();
        table.insert("q0", 'a', "q1");

        assert_eq!(table.get(&"q0", &'b'), None);
        assert_eq!(table.get(&"q1", &'a'), None);
    }

    #[test]
    fn iter_visits_every_transition() {
        let mut table = TransitionTable::new();
        table.insert("q0", 'a', "q1");
        table.insert("q0", 'b', "q0");
        table.insert("q1", 'a', "q1");

        assert_eq!(table.len(), 3);
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort();
        assert_eq!(
            entries,
            vec![(&"q0", &'a', &"q1"), (&"q0", &'b', &"q0"), (&"q1", &'a', &"q1")]
        );
    }

    #[test]
    fn into_iter_yields_owned_pairs() {
        let mut table = TransitionTable::new();
        table.insert("q0", 'a', "q1");
        table.insert("q1", 'a', "q1");

        let mut pairs: Vec<_> = table.into_iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![(("q0", 'a'), "q1"), (("q1", 'a'), "q1")]);
    }
}
