//! Builder API for validated automaton construction.
//!
//! This module owns every structural check on the 5-tuple. `Dfa::new` and
//! `DfaBuilder::build` both route through the same validation, so an
//! automaton that exists has already passed it.

pub mod error;
pub mod machine;
pub mod macros;
pub mod validate;

pub use error::{BuildError, ValidationError};
pub use machine::DfaBuilder;
pub use validate::Violations;

use std::fmt::Display;

/// Unwrap a construction result or abort with its message.
///
/// Meant for tests, demos and fixed built-in tables whose validity is known
/// up front. Library code paths that build from caller input must handle the
/// error instead.
///
/// # Example
///
/// ```
/// use dfa_core::{must, DfaBuilder};
///
/// let dfa = must(
///     DfaBuilder::new()
///         .state(0u8)
///         .symbol('a')
///         .initial(0)
///         .transition(0, 'a', 0)
///         .build(),
/// );
/// assert_eq!(dfa.run(['a', 'a']).unwrap(), 0);
/// ```
///
/// # Panics
///
/// Panics if `result` is an error.
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("automaton construction failed: {err}"),
    }
}
