//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::builder::validate::{Parts, Violations};
use crate::core::{Label, OrderedSet, TransitionTable};
use crate::engine::Dfa;

/// Builder for constructing a `Dfa` with a fluent API.
///
/// Every setter accumulates; nothing is checked until `build` (or
/// `validate_all`) is called.
///
/// # Example
///
/// ```rust
/// use dfa_core::DfaBuilder;
///
/// let dfa = DfaBuilder::new()
///     .states(["locked", "unlocked"])
///     .alphabet(["coin", "push"])
///     .initial("locked")
///     .final_state("unlocked")
///     .transition("locked", "coin", "unlocked")
///     .transition("locked", "push", "locked")
///     .transition("unlocked", "coin", "unlocked")
///     .transition("unlocked", "push", "locked")
///     .require_complete(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.run(["coin"]).unwrap(), "unlocked");
/// ```
#[derive(Clone, Debug)]
pub struct DfaBuilder<Q: Label, S: Label> {
    states: OrderedSet<Q>,
    alphabet: OrderedSet<S>,
    initial: Option<Q>,
    finals: OrderedSet<Q>,
    transitions: TransitionTable<Q, S>,
    require_complete: bool,
}

impl<Q: Label, S: Label> DfaBuilder<Q, S> {
    /// Create a new builder. Completeness is not required by default.
    pub fn new() -> Self {
        Self {
            states: OrderedSet::new(),
            alphabet: OrderedSet::new(),
            initial: None,
            finals: OrderedSet::new(),
            transitions: TransitionTable::new(),
            require_complete: false,
        }
    }

    /// Add a single state to Q.
    pub fn state(mut self, state: Q) -> Self {
        self.states.insert(state);
        self
    }

    /// Add several states to Q. Duplicates are coalesced.
    pub fn states<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a single symbol to Σ.
    pub fn symbol(mut self, symbol: S) -> Self {
        self.alphabet.insert(symbol);
        self
    }

    /// Add several symbols to Σ. Duplicates are coalesced.
    pub fn alphabet<I: IntoIterator<Item = S>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: Q) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn final_state(mut self, state: Q) -> Self {
        self.finals.insert(state);
        self
    }

    /// Mark several states as accepting.
    pub fn finals<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.finals.extend(states);
        self
    }

    /// Define δ(from, on) = to. A later definition of the same pair wins.
    pub fn transition(mut self, from: Q, on: S, to: Q) -> Self {
        self.transitions.insert(from, on, to);
        self
    }

    /// Merge a prepared table into δ.
    pub fn transitions(mut self, table: TransitionTable<Q, S>) -> Self {
        for (from, on, to) in table.iter() {
            self.transitions.insert(from.clone(), on.clone(), to.clone());
        }
        self
    }

    /// Require δ to be total over Q × Σ.
    pub fn require_complete(mut self, require: bool) -> Self {
        self.require_complete = require;
        self
    }

    /// Validate and build the automaton, stopping at the first violation.
    pub fn build(self) -> Result<Dfa<Q, S>, BuildError<Q, S>> {
        let require_complete = self.require_complete;
        let parts = self.into_parts()?;
        Ok(Dfa::from_parts(parts, require_complete)?)
    }

    /// Run every validation check and report ALL violations at once.
    ///
    /// Useful for definitions assembled from user input, where fixing one
    /// error at a time is tedious.
    pub fn validate_all(&self) -> Result<Violations<Q, S>, BuildError<Q, S>> {
        let parts = self.clone().into_parts()?;
        Ok(parts.check_all(self.require_complete))
    }

    fn into_parts(self) -> Result<Parts<Q, S>, BuildError<Q, S>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Parts {
            states: self.states,
            alphabet: self.alphabet,
            initial,
            finals: self.finals,
            transitions: self.transitions,
        })
    }
}

impl<Q: Label, S: Label> Default for DfaBuilder<Q, S> {
    fn default() -> Self {
        Self::new()
    }
}
