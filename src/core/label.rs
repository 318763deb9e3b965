//! Identifier bound for states and symbols.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for anything used as a state (Q-element) or symbol (Σ-element).
///
/// Labels are opaque to the automaton. The only requirements are stable
/// equality and hashing for membership checks, `Clone` so states can be
/// returned by value, and `Debug` so errors can name the offending value.
/// Thread safety is not required: an automaton over `Send + Sync` labels is
/// itself `Send + Sync`, while `Rc<str>` interned labels work single-threaded.
///
/// The trait is blanket-implemented, so small integers, `char`, `&str`,
/// `String` and plain enums all qualify without any ceremony:
///
/// ```rust
/// use dfa_core::core::Label;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// fn assert_label<T: Label>() {}
///
/// assert_label::<Light>();
/// assert_label::<u8>();
/// assert_label::<&'static str>();
/// ```
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug {}
