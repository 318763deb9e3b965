//! Execution errors.

use crate::core::Label;
use thiserror::Error;

/// Failure of a single transition lookup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError<Q: Label, S: Label> {
    /// δ is not defined for this pair. The engine does not distinguish an
    /// incomplete automaton from a state or symbol it has never heard of.
    #[error("no transition defined for ({state:?}, {symbol:?})")]
    UndefinedTransition { state: Q, symbol: S },
}

impl<Q: Label, S: Label> TransitionError<Q, S> {
    /// The `(state, symbol)` pair that had no transition.
    pub fn pair(&self) -> (&Q, &S) {
        match self {
            TransitionError::UndefinedTransition { state, symbol } => (state, symbol),
        }
    }
}

/// A run that stopped part way through its input.
///
/// Carries the best state reached so far: `last_state` is the state the
/// automaton was in when the symbol at `position` could not be consumed.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("run stopped at input position {position} in state {last_state:?}: {source}")]
pub struct RunError<Q: Label, S: Label> {
    #[source]
    pub source: TransitionError<Q, S>,
    pub last_state: Q,
    pub position: usize,
}

impl<Q: Label, S: Label> RunError<Q, S> {
    /// The state reached immediately before the failing step.
    pub fn last_state(&self) -> &Q {
        &self.last_state
    }

    /// Zero-based index of the symbol that could not be consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The underlying transition failure.
    pub fn transition_error(&self) -> &TransitionError<Q, S> {
        &self.source
    }
}
