//! Construction errors for automata.

use crate::core::Label;
use thiserror::Error;

/// Structural problems found while validating an automaton definition.
///
/// Every variant carries the offending values so callers can report or
/// match on them without parsing messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError<Q: Label, S: Label> {
    #[error("initial state {state:?} is not in the state set")]
    UnknownInitialState { state: Q },

    #[error("final state {state:?} is not in the state set")]
    UnknownFinalState { state: Q },

    #[error("transition from unknown state {state:?} on {symbol:?}")]
    UnknownSourceState { state: Q, symbol: S },

    #[error("transition from {state:?} on {symbol:?}: symbol is not in the alphabet")]
    UnknownSymbol { state: Q, symbol: S },

    #[error("transition ({from:?}, {symbol:?}) targets unknown state {target:?}")]
    UnknownTargetState { from: Q, symbol: S, target: Q },

    #[error("transition function is incomplete: no transition for ({state:?}, {symbol:?}) ({missing} pair(s) missing)")]
    IncompleteTransitionFunction { state: Q, symbol: S, missing: usize },
}

/// Errors returned by `DfaBuilder::build`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError<Q: Label, S: Label> {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(transparent)]
    Invalid(#[from] ValidationError<Q, S>),
}
