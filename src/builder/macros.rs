//! Macros for ergonomic automaton construction.

/// Build a list of `((state, symbol), state)` transitions from literal
/// `(state, symbol) => state` entries.
///
/// Entries are kept as written, duplicates included, so the constructor
/// sees every one of them and reports conflicting targets.
///
/// # Example
///
/// ```
/// use dfa_engine::core::Automaton;
/// use dfa_engine::transitions;
///
/// let dfa = Automaton::new(
///     ["q0", "q1"],
///     ['a', 'b'],
///     transitions! {
///         ("q0", 'a') => "q1",
///         ("q0", 'b') => "q0",
///         ("q1", 'a') => "q1",
///         ("q1", 'b') => "q0",
///     },
///     "q0",
///     ["q1"],
/// )
/// .unwrap();
///
/// assert_eq!(dfa.transitions().len(), 4);
/// assert!(dfa.accepts_str("ba"));
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            ($from:expr, $symbol:expr) => $to:expr
        ),* $(,)?
    ) => {
        ::std::vec![
            $(
                (($from, $symbol), $to)
            ),*
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;
    use crate::core::Automaton;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    #[test]
    fn transitions_macro_keeps_entries_in_order() {
        let entries = transitions! {
            (Light::Red, "tick") => Light::Green,
            (Light::Green, "tick") => Light::Yellow,
            (Light::Yellow, "tick") => Light::Red,
        };

        assert_eq!(
            entries,
            vec![
                ((Light::Red, "tick"), Light::Green),
                ((Light::Green, "tick"), Light::Yellow),
                ((Light::Yellow, "tick"), Light::Red),
            ]
        );
    }

    #[test]
    fn transitions_macro_allows_empty_list() {
        let entries: Vec<((Light, &str), Light)> = transitions! {};
        assert!(entries.is_empty());
    }

    #[test]
    fn macro_entries_feed_constructor() {
        let dfa = Automaton::new(
            [Light::Red, Light::Green, Light::Yellow],
            ["tick"],
            transitions! {
                (Light::Red, "tick") => Light::Green,
                (Light::Green, "tick") => Light::Yellow,
                (Light::Yellow, "tick") => Light::Red,
            },
            Light::Red,
            [Light::Yellow],
        )
        .unwrap();

        assert!(dfa.execute(["tick", "tick"]));
        assert!(!dfa.execute(["tick", "tick", "tick"]));
    }

    #[test]
    fn conflicting_macro_entries_fail_to_build() {
        let result = Automaton::new(
            ["q0", "q1"],
            ['a'],
            transitions! {
                ("q0", 'a') => "q0",
                ("q0", 'a') => "q1",
            },
            "q0",
            ["q1"],
        );

        assert!(matches!(
            result,
            Err(BuildError::ConflictingTransition { .. })
        ));
    }

    #[test]
    fn repeated_macro_entry_builds_once() {
        let dfa = Automaton::new(
            ["q0", "q1"],
            ['a'],
            transitions! {
                ("q0", 'a') => "q1",
                ("q0", 'a') => "q1",
            },
            "q0",
            ["q1"],
        )
        .unwrap();

        assert_eq!(dfa.transitions().len(), 1);
        assert!(dfa.accepts_str("a"));
    }
}
