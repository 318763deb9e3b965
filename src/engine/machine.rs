//! The validated, immutable automaton and its execution semantics.

use crate::builder::error::ValidationError;
use crate::builder::validate::Parts;
use crate::builder::DfaBuilder;
use crate::core::{Label, OrderedSet, RunTrace, TraceStep, TransitionTable};
use crate::engine::error::{RunError, TransitionError};
use std::borrow::Borrow;

/// A deterministic finite automaton (Q, Σ, q0, F, δ).
///
/// A `Dfa` only exists once its definition has passed validation: q0 ∈ Q,
/// F ⊆ Q, and every δ entry references Q and Σ only. It is never mutated
/// afterwards, so it can be shared between threads and run concurrently
/// without coordination.
///
/// # Example
///
/// ```rust
/// use dfa_core::engine::{Dfa, RunError};
/// use dfa_core::TransitionTable;
///
/// // Recognizes "ab" and nothing else; δ is deliberately partial.
/// let dfa = Dfa::new(
///     [0, 1, 2],
///     ['a', 'b'],
///     0,
///     [2],
///     TransitionTable::new().with(0, 'a', 1).with(1, 'b', 2),
///     false,
/// )
/// .unwrap();
///
/// assert_eq!(dfa.accepts(&['a', 'b']).unwrap(), (true, 2));
/// assert!(!dfa.recognizes(&['a', 'a']));
///
/// let err: RunError<i32, char> = dfa.run(&['a', 'a']).unwrap_err();
/// assert_eq!(err.last_state(), &1);
/// assert_eq!(err.position(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Dfa<Q: Label, S: Label> {
    parts: Parts<Q, S>,
}

impl<Q: Label, S: Label> Dfa<Q, S> {
    /// Validate the 5-tuple and build an automaton.
    ///
    /// Duplicate states, symbols and finals are coalesced. Checks run in
    /// order and the first violation is returned:
    ///
    /// 1. `initial` must be in `states`
    /// 2. every final must be in `states`
    /// 3. every δ entry's source, symbol and target must be known
    /// 4. with `require_complete`, δ must be defined on all of Q × Σ
    pub fn new<QI, SI, FI>(
        states: QI,
        alphabet: SI,
        initial: Q,
        finals: FI,
        transitions: TransitionTable<Q, S>,
        require_complete: bool,
    ) -> Result<Self, ValidationError<Q, S>>
    where
        QI: IntoIterator<Item = Q>,
        SI: IntoIterator<Item = S>,
        FI: IntoIterator<Item = Q>,
    {
        let parts = Parts {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            initial,
            finals: finals.into_iter().collect(),
            transitions,
        };
        Self::from_parts(parts, require_complete)
    }

    /// Start a fluent builder.
    pub fn builder() -> DfaBuilder<Q, S> {
        DfaBuilder::new()
    }

    pub(crate) fn from_parts(
        parts: Parts<Q, S>,
        require_complete: bool,
    ) -> Result<Self, ValidationError<Q, S>> {
        if let Err(err) = parts.check(require_complete) {
            tracing::debug!("Rejected automaton definition: {}", err);
            return Err(err);
        }

        tracing::debug!(
            "Built automaton: {} states, {} symbols, {} finals, {} transitions",
            parts.states.len(),
            parts.alphabet.len(),
            parts.finals.len(),
            parts.transitions.len()
        );

        Ok(Self { parts })
    }

    /// Q, in first-insertion order.
    pub fn states(&self) -> &OrderedSet<Q> {
        &self.parts.states
    }

    /// Σ, in first-insertion order.
    pub fn alphabet(&self) -> &OrderedSet<S> {
        &self.parts.alphabet
    }

    /// q0.
    pub fn initial(&self) -> &Q {
        &self.parts.initial
    }

    /// F.
    pub fn finals(&self) -> &OrderedSet<Q> {
        &self.parts.finals
    }

    /// δ.
    pub fn transitions(&self) -> &TransitionTable<Q, S> {
        &self.parts.transitions
    }

    /// Check whether `state` is accepting.
    pub fn is_final(&self, state: &Q) -> bool {
        self.parts.finals.contains(state)
    }

    /// Check whether δ is total over Q × Σ.
    pub fn is_complete(&self) -> bool {
        self.parts.missing_transitions().is_empty()
    }

    /// Pairs in Q × Σ without a transition, in state order then alphabet
    /// order. Empty for a complete automaton.
    pub fn missing_transitions(&self) -> Vec<(&Q, &S)> {
        self.parts.missing_transitions()
    }

    /// Apply a single transition: δ(state, symbol).
    ///
    /// Exposed on its own so callers can drive long inputs incrementally and
    /// stop whenever they like.
    pub fn step(&self, state: &Q, symbol: &S) -> Result<Q, TransitionError<Q, S>> {
        self.parts
            .transitions
            .get(state, symbol)
            .cloned()
            .ok_or_else(|| TransitionError::UndefinedTransition {
                state: state.clone(),
                symbol: symbol.clone(),
            })
    }

    /// Consume `input` left to right from q0 and return the final state.
    ///
    /// Empty input yields q0. On the first undefined transition the run stops
    /// and the error carries the state reached just before it.
    pub fn run<I>(&self, input: I) -> Result<Q, RunError<Q, S>>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        self.fold(input, |_, _, _| {})
    }

    /// Run `input` and report whether the final state is accepting, along
    /// with the final state itself.
    pub fn accepts<I>(&self, input: I) -> Result<(bool, Q), RunError<Q, S>>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let state = self.run(input)?;
        Ok((self.is_final(&state), state))
    }

    /// Like `accepts`, but an undefined transition counts as rejection.
    ///
    /// This is the usual reading of a partial automaton as a recognizer.
    pub fn recognizes<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        matches!(self.accepts(input), Ok((true, _)))
    }

    /// Run `input` while recording every step taken.
    pub fn trace<I>(&self, input: I) -> Result<RunTrace<Q, S>, RunError<Q, S>>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut trace = RunTrace::new(self.parts.initial.clone());
        self.fold(input, |from, symbol, to| {
            trace.push(TraceStep {
                from: from.clone(),
                symbol: symbol.clone(),
                to: to.clone(),
            })
        })?;
        Ok(trace)
    }

    /// Left fold of `step` over `input`, calling `observe` after each
    /// successful step.
    fn fold<I, F>(&self, input: I, mut observe: F) -> Result<Q, RunError<Q, S>>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
        F: FnMut(&Q, &S, &Q),
    {
        let mut state = self.parts.initial.clone();
        for (position, symbol) in input.into_iter().enumerate() {
            let symbol: &S = symbol.borrow();
            match self.step(&state, symbol) {
                Ok(next) => {
                    observe(&state, symbol, &next);
                    state = next;
                }
                Err(source) => {
                    tracing::debug!("Run stopped at position {}: {}", position, source);
                    return Err(RunError {
                        source,
                        last_state: state,
                        position,
                    });
                }
            }
        }

        tracing::trace!("Run finished in state {:?}", state);
        Ok(state)
    }
}
