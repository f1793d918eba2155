//! Pairwise preference weights.

use std::collections::HashMap;

use crate::codec::{Person, RoomPair};

/// Integer cost of a room or an assignment. Lower is better.
pub type Cost = i64;

/// Weights for pairs of people, keyed by the canonical `(min, max)` pair.
///
/// Pairs absent from the table weigh 0. Zero weights are never stored.
///
/// # Examples
///
/// ```
/// use roommate_search::cost::PreferenceTable;
///
/// let table = PreferenceTable::new()
///     .with_weight(0, 1, -1)
///     .with_weight(3, 2, 1);
/// assert_eq!(table.weight(2, 3), 1);
/// assert_eq!(table.weight(1, 0), -1);
/// assert_eq!(table.weight(0, 2), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceTable {
    weights: HashMap<(Person, Person), Cost>,
}

impl PreferenceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table for `people` people from a weight rule evaluated on
    /// every `a < b`.
    pub fn from_fn<F>(people: usize, mut rule: F) -> Self
    where
        F: FnMut(Person, Person) -> Cost,
    {
        let mut table = Self::new();
        for a in 0..people {
            for b in (a + 1)..people {
                table.set(a, b, rule(a, b));
            }
        }
        table
    }

    /// Sets the weight of `{a, b}`; a weight of 0 removes the entry.
    pub fn set(&mut self, a: Person, b: Person, weight: Cost) {
        let key = RoomPair { a, b }.key();
        if weight == 0 {
            self.weights.remove(&key);
        } else {
            self.weights.insert(key, weight);
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with_weight(mut self, a: Person, b: Person, weight: Cost) -> Self {
        self.set(a, b, weight);
        self
    }

    /// Weight of `{a, b}`, in either order.
    #[inline]
    pub fn weight(&self, a: Person, b: Person) -> Cost {
        self.weights
            .get(&RoomPair { a, b }.key())
            .copied()
            .unwrap_or(0)
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over the stored `(pair, weight)` entries in canonical form.
    pub fn iter(&self) -> impl Iterator<Item = (RoomPair, Cost)> + '_ {
        self.weights
            .iter()
            .map(|(&(a, b), &w)| (RoomPair { a, b }, w))
    }
}

impl FromIterator<((Person, Person), Cost)> for PreferenceTable {
    fn from_iter<T: IntoIterator<Item = ((Person, Person), Cost)>>(iter: T) -> Self {
        let mut table = Self::new();
        for ((a, b), weight) in iter {
            table.set(a, b, weight);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pair_is_zero() {
        let table = PreferenceTable::new();
        assert_eq!(table.weight(4, 9), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_lookup_is_order_independent() {
        let table = PreferenceTable::new().with_weight(5, 7, -1);
        assert_eq!(table.weight(5, 7), -1);
        assert_eq!(table.weight(7, 5), -1);
    }

    #[test]
    fn test_set_zero_removes() {
        let mut table = PreferenceTable::new().with_weight(1, 2, 3);
        table.set(2, 1, 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_fn_stores_only_nonzero() {
        let table = PreferenceTable::from_fn(10, |a, b| if (a + b) % 10 == 8 { -100 } else { 0 });
        // pairs summing to 8 with a < b: (0,8) (1,7) (2,6) (3,5)
        assert_eq!(table.len(), 4);
        assert_eq!(table.weight(6, 2), -100);
        assert_eq!(table.weight(4, 4), 0);
    }

    #[test]
    fn test_from_iterator() {
        let table: PreferenceTable = [((3, 1), 2), ((0, 1), -1)].into_iter().collect();
        assert_eq!(table.weight(1, 3), 2);
        assert_eq!(table.len(), 2);
        let mut entries: Vec<_> = table.iter().map(|(p, w)| (p.key(), w)).collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![((0, 1), -1), ((1, 3), 2)]);
    }
}
