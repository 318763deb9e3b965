//! The transition function δ as a lookup table.

use super::label::Label;
use indexmap::IndexMap;

/// Transition function δ: Q × Σ → Q, stored as nested maps.
///
/// The outer map is keyed by source state and the inner map by symbol, so a
/// lookup borrows both keys without cloning. Both levels keep insertion
/// order: entries are walked row by row, source states in the order they
/// first appeared, symbols in the order they were added to that row.
///
/// Inserting a `(state, symbol)` pair that already exists replaces its target.
///
/// # Example
///
/// ```rust
/// use dfa_core::core::TransitionTable;
///
/// let table = TransitionTable::new()
///     .with("locked", "coin", "unlocked")
///     .with("unlocked", "push", "locked");
///
/// assert_eq!(table.get(&"locked", &"coin"), Some(&"unlocked"));
/// assert_eq!(table.get(&"locked", &"push"), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<Q: Label, S: Label> {
    rows: IndexMap<Q, IndexMap<S, Q>>,
}

impl<Q: Label, S: Label> TransitionTable<Q, S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }

    /// Build a table from nested rows: one entry per source state, each
    /// carrying its `(symbol, target)` pairs.
    ///
    /// ```rust
    /// use dfa_core::core::TransitionTable;
    ///
    /// let table = TransitionTable::from_rows([
    ///     (0, vec![('a', 1), ('b', 0)]),
    ///     (1, vec![('a', 1)]),
    /// ]);
    ///
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.get(&0, &'b'), Some(&0));
    /// ```
    pub fn from_rows<R, E>(rows: R) -> Self
    where
        R: IntoIterator<Item = (Q, E)>,
        E: IntoIterator<Item = (S, Q)>,
    {
        let mut table = Self::new();
        for (from, edges) in rows {
            table = table.row(from, edges);
        }
        table
    }

    /// Insert δ(from, on) = to, returning the previous target if any.
    pub fn insert(&mut self, from: Q, on: S, to: Q) -> Option<Q> {
        self.rows.entry(from).or_default().insert(on, to)
    }

    /// Fluent form of `insert`.
    pub fn with(mut self, from: Q, on: S, to: Q) -> Self {
        self.insert(from, on, to);
        self
    }

    /// Add every `(symbol, target)` edge leaving `from`.
    pub fn row<E>(mut self, from: Q, edges: E) -> Self
    where
        E: IntoIterator<Item = (S, Q)>,
    {
        for (on, to) in edges {
            self.insert(from.clone(), on, to);
        }
        self
    }

    /// Look up δ(state, symbol).
    pub fn get(&self, state: &Q, symbol: &S) -> Option<&Q> {
        self.rows.get(state).and_then(|row| row.get(symbol))
    }

    /// Check whether δ(state, symbol) is defined.
    pub fn contains(&self, state: &Q, symbol: &S) -> bool {
        self.get(state, symbol).is_some()
    }

    /// Number of defined `(state, symbol)` pairs.
    pub fn len(&self) -> usize {
        self.rows.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(from, symbol, to)` entries row by row.
    pub fn iter(&self) -> impl Iterator<Item = (&Q, &S, &Q)> + '_ {
        self.rows
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(on, to)| (from, on, to)))
    }
}

impl<Q: Label, S: Label> Default for TransitionTable<Q, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Label, S: Label> FromIterator<((Q, S), Q)> for TransitionTable<Q, S> {
    fn from_iter<I: IntoIterator<Item = ((Q, S), Q)>>(iter: I) -> Self {
        let mut table = Self::new();
        for ((from, on), to) in iter {
            table.insert(from, on, to);
        }
        table
    }
}
