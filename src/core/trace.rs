//! Run traces.
//!
//! A trace records every transition taken while an input was consumed,
//! which is useful for explaining why an input ended where it did.

use super::label::Label;
use serde::{Deserialize, Serialize};

/// One applied transition: δ(from, symbol) = to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceStep<Q: Label, S: Label> {
    /// State before the symbol was consumed
    pub from: Q,
    /// The consumed symbol
    pub symbol: S,
    /// State after the symbol was consumed
    pub to: Q,
}

/// Ordered record of a run, starting from the automaton's initial state.
///
/// `record` is pure: it returns a new trace and leaves the original alone.
///
/// # Example
///
/// ```rust
/// use dfa_core::core::{RunTrace, TraceStep};
///
/// let trace = RunTrace::new("a")
///     .record(TraceStep { from: "a", symbol: 1, to: "b" })
///     .record(TraceStep { from: "b", symbol: 0, to: "a" });
///
/// assert_eq!(trace.path(), vec![&"a", &"b", &"a"]);
/// assert_eq!(trace.final_state(), &"a");
/// assert_eq!(trace.symbols(), vec![&1, &0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunTrace<Q: Label, S: Label> {
    initial: Q,
    steps: Vec<TraceStep<Q, S>>,
}

impl<Q: Label, S: Label> RunTrace<Q, S> {
    /// Create an empty trace that starts at `initial`.
    pub fn new(initial: Q) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Record a step, returning a new trace.
    pub fn record(&self, step: TraceStep<Q, S>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            initial: self.initial.clone(),
            steps,
        }
    }

    pub(crate) fn push(&mut self, step: TraceStep<Q, S>) {
        self.steps.push(step);
    }

    /// The state the run started from.
    pub fn initial(&self) -> &Q {
        &self.initial
    }

    /// All recorded steps, in order.
    pub fn steps(&self) -> &[TraceStep<Q, S>] {
        &self.steps
    }

    /// States visited: the initial state, then the target of each step.
    pub fn path(&self) -> Vec<&Q> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|s| &s.to))
            .collect()
    }

    /// Symbols consumed, in order.
    pub fn symbols(&self) -> Vec<&S> {
        self.steps.iter().map(|s| &s.symbol).collect()
    }

    /// The state the run ended in. Equals `initial` for an empty trace.
    pub fn final_state(&self) -> &Q {
        self.steps.last().map(|s| &s.to).unwrap_or(&self.initial)
    }

    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
