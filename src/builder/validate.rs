//! Structural validation of the 5-tuple.
//!
//! Two entry points share the same checks: `check` stops at the first
//! violation, `check_all` accumulates every violation with stillwater's
//! `Validation`.

use crate::builder::error::ValidationError;
use crate::core::{Label, OrderedSet, TransitionTable};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of an accumulating validation pass.
pub type Violations<Q, S> = Validation<(), NonEmptyVec<ValidationError<Q, S>>>;

/// The coalesced 5-tuple, before or after validation.
#[derive(Clone, Debug)]
pub(crate) struct Parts<Q: Label, S: Label> {
    pub(crate) states: OrderedSet<Q>,
    pub(crate) alphabet: OrderedSet<S>,
    pub(crate) initial: Q,
    pub(crate) finals: OrderedSet<Q>,
    pub(crate) transitions: TransitionTable<Q, S>,
}

impl<Q: Label, S: Label> Parts<Q, S> {
    /// Pairs in Q × Σ with no transition, in state order then alphabet order.
    pub(crate) fn missing_transitions(&self) -> Vec<(&Q, &S)> {
        self.states
            .iter()
            .flat_map(|q| self.alphabet.iter().map(move |a| (q, a)))
            .filter(|(q, a)| !self.transitions.contains(q, a))
            .collect()
    }

    /// Run every check, stopping at the first violation.
    pub(crate) fn check(&self, require_complete: bool) -> Result<(), ValidationError<Q, S>> {
        self.check_initial()?;
        for state in &self.finals {
            self.check_final(state)?;
        }
        for (from, on, to) in self.transitions.iter() {
            self.check_transition(from, on, to)?;
        }
        if require_complete {
            self.check_complete()?;
        }
        Ok(())
    }

    /// Run every check, accumulating ALL violations.
    pub(crate) fn check_all(&self, require_complete: bool) -> Violations<Q, S> {
        let mut checks: Vec<Violations<Q, S>> = Vec::new();

        checks.push(into_validation(self.check_initial()));
        for state in &self.finals {
            checks.push(into_validation(self.check_final(state)));
        }
        for (from, on, to) in self.transitions.iter() {
            checks.extend(
                self.transition_violations(from, on, to)
                    .into_iter()
                    .map(|e| into_validation(Err(e))),
            );
        }
        if require_complete {
            checks.push(into_validation(self.check_complete()));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn check_initial(&self) -> Result<(), ValidationError<Q, S>> {
        if self.states.contains(&self.initial) {
            Ok(())
        } else {
            Err(ValidationError::UnknownInitialState {
                state: self.initial.clone(),
            })
        }
    }

    fn check_final(&self, state: &Q) -> Result<(), ValidationError<Q, S>> {
        if self.states.contains(state) {
            Ok(())
        } else {
            Err(ValidationError::UnknownFinalState {
                state: state.clone(),
            })
        }
    }

    fn check_transition(&self, from: &Q, on: &S, to: &Q) -> Result<(), ValidationError<Q, S>> {
        match self.transition_violations(from, on, to).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Violations of one δ entry, in check order: source, symbol, target.
    fn transition_violations(&self, from: &Q, on: &S, to: &Q) -> Vec<ValidationError<Q, S>> {
        let mut errors = Vec::new();
        if !self.states.contains(from) {
            errors.push(ValidationError::UnknownSourceState {
                state: from.clone(),
                symbol: on.clone(),
            });
        }
        if !self.alphabet.contains(on) {
            errors.push(ValidationError::UnknownSymbol {
                state: from.clone(),
                symbol: on.clone(),
            });
        }
        if !self.states.contains(to) {
            errors.push(ValidationError::UnknownTargetState {
                from: from.clone(),
                symbol: on.clone(),
                target: to.clone(),
            });
        }
        errors
    }

    fn check_complete(&self) -> Result<(), ValidationError<Q, S>> {
        let missing = self.missing_transitions();
        match missing.first() {
            None => Ok(()),
            Some((state, symbol)) => Err(ValidationError::IncompleteTransitionFunction {
                state: (*state).clone(),
                symbol: (*symbol).clone(),
                missing: missing.len(),
            }),
        }
    }
}

fn into_validation<Q: Label, S: Label>(result: Result<(), ValidationError<Q, S>>) -> Violations<Q, S> {
    match result {
        Ok(()) => Validation::success(()),
        Err(err) => Validation::fail(err),
    }
}
