//! Label bound shared by automaton states and input symbols.
//!
//! States and symbols are opaque identifiers. The engine only ever
//! compares and hashes them, so any type with value equality works.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and symbol labels.
///
/// Implemented for every type that is cloneable, hashable, comparable
/// and thread-safe, so there is nothing to implement by hand.
///
/// # Required Traits
///
/// - `Clone`: labels are copied into transition traces
/// - `Eq` + `Hash`: labels key the transition table and the accepting set
/// - `Debug`: labels appear in construction errors
/// - `Send` + `Sync`: a built automaton can be shared across threads
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Label;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_label<L: Label>() {}
///
/// assert_label::<Door>();
/// assert_label::<char>();
/// assert_label::<String>();
/// assert_label::<&'static str>();
/// ```
pub trait Label: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug + Send + Sync {}
