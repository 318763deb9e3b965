//! Execution of validated automata.
//!
//! Every operation here is a pure function of an immutable `Dfa` and its
//! input. Failures are returned as values and never invalidate the
//! automaton.

pub mod error;
pub mod machine;

pub use error::{RunError, TransitionError};
pub use machine::Dfa;
