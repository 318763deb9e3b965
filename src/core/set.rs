//! Insertion-ordered set used for Q, Σ and F.

use super::label::Label;
use indexmap::IndexSet;

/// A set that coalesces duplicates and remembers first-insertion order.
///
/// A thin wrapper over `IndexSet`: membership is a hash lookup and iteration
/// follows the order in which values were first inserted, which keeps
/// validation diagnostics deterministic.
///
/// # Example
///
/// ```rust
/// use dfa_core::core::OrderedSet;
///
/// let set: OrderedSet<u8> = [2, 0, 2, 1].into_iter().collect();
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&1));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![2, 0, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct OrderedSet<T: Label> {
    items: IndexSet<T>,
}

impl<T: Label> OrderedSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    /// Insert a value. Returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Check membership.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in first-insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Label> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Label> PartialEq for OrderedSet<T> {
    /// Sets are equal when they hold the same values, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Label> Eq for OrderedSet<T> {}

impl<T: Label> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Label> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Label> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
