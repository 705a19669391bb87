//! Stable sorting builders.
//!
//! [`Sort`] returns a sorted copy; [`SortInPlace`] reorders the structure
//! it borrows. Both are configured with a direction and finished by one
//! terminal call:
//!
//! ```text
//! list.sort().descending().by_values()          -> new list
//! list.sort_in_place().by(|a, b| a.len().cmp(&b.len()))  -> &mut list
//! ```
//!
//! Sorting is always stable: items that compare equal keep their relative
//! order, in both directions. Index-keyed variants renumber afterwards;
//! associative variants keep each key with its value.

use crate::storage::Storage;
use crate::structure::Structure;
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Reorder `storage` by `compare`, honoring `direction`, stably.
fn order<K, V, F>(storage: &mut Storage<K, V>, direction: Direction, mut compare: F)
where
    K: Clone + Eq + std::hash::Hash,
    F: FnMut((&K, &V), (&K, &V)) -> Ordering,
{
    storage.sort_by(|a, b| direction.apply(compare(a, b)));
}

/// Pure sort builder.
pub struct Sort<'a, S: Structure> {
    target: &'a S,
    direction: Direction,
}

impl<'a, S: Structure> Sort<'a, S> {
    pub fn new(target: &'a S) -> Self {
        Self {
            target,
            direction: Direction::Ascending,
        }
    }

    pub fn ascending(mut self) -> Self {
        self.direction = Direction::Ascending;
        self
    }

    pub fn descending(mut self) -> Self {
        self.direction = Direction::Descending;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// General form: compare whole `(key, value)` entries.
    pub fn by_entries<F>(self, compare: F) -> S
    where
        F: FnMut((&S::Key, &S::Value), (&S::Key, &S::Value)) -> Ordering,
    {
        let mut storage = self.target.storage().clone();
        order(&mut storage, self.direction, compare);
        S::from_storage(storage)
    }

    pub fn by_values(self) -> S
    where
        S::Value: Ord,
    {
        self.by_entries(|(_, a), (_, b)| a.cmp(b))
    }

    pub fn by_keys(self) -> S
    where
        S::Key: Ord,
    {
        self.by_entries(|(a, _), (b, _)| a.cmp(b))
    }

    /// Custom comparator over values.
    pub fn by<F>(self, mut compare: F) -> S
    where
        F: FnMut(&S::Value, &S::Value) -> Ordering,
    {
        self.by_entries(|(_, a), (_, b)| compare(a, b))
    }

    /// Order by a value derived from each item.
    pub fn by_projection<T, F>(self, mut project: F) -> S
    where
        T: Ord,
        F: FnMut(&S::Value) -> T,
    {
        self.by_entries(|(_, a), (_, b)| project(a).cmp(&project(b)))
    }
}

/// In-place sort builder.
pub struct SortInPlace<'a, S: Structure> {
    target: &'a mut S,
    direction: Direction,
}

impl<'a, S: Structure> SortInPlace<'a, S> {
    pub fn new(target: &'a mut S) -> Self {
        Self {
            target,
            direction: Direction::Ascending,
        }
    }

    pub fn ascending(mut self) -> Self {
        self.direction = Direction::Ascending;
        self
    }

    pub fn descending(mut self) -> Self {
        self.direction = Direction::Descending;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn by_entries<F>(self, compare: F) -> &'a mut S
    where
        F: FnMut((&S::Key, &S::Value), (&S::Key, &S::Value)) -> Ordering,
    {
        let Self { target, direction } = self;
        target.rebuild(|mut storage| {
            order(&mut storage, direction, compare);
            storage
        })
    }

    pub fn by_values(self) -> &'a mut S
    where
        S::Value: Ord,
    {
        self.by_entries(|(_, a), (_, b)| a.cmp(b))
    }

    pub fn by_keys(self) -> &'a mut S
    where
        S::Key: Ord,
    {
        self.by_entries(|(a, _), (b, _)| a.cmp(b))
    }

    pub fn by<F>(self, mut compare: F) -> &'a mut S
    where
        F: FnMut(&S::Value, &S::Value) -> Ordering,
    {
        self.by_entries(|(_, a), (_, b)| compare(a, b))
    }

    pub fn by_projection<T, F>(self, mut project: F) -> &'a mut S
    where
        T: Ord,
        F: FnMut(&S::Value) -> T,
    {
        self.by_entries(|(_, a), (_, b)| project(a).cmp(&project(b)))
    }
}

#[cfg(test)]
mod tests {
    use crate::contract::Sortable;
    use crate::{Dictionary, Sequence, Structure};

    #[test]
    fn ascending_and_descending_are_stable() {
        let words = Sequence::from(["bb", "a", "cc", "d", "ee"]);

        let ascending = words.sort().by_projection(|w| w.len());
        assert_eq!(ascending.to_vec(), ["a", "d", "bb", "cc", "ee"]);

        let descending = words.sort().descending().by_projection(|w| w.len());
        assert_eq!(descending.to_vec(), ["bb", "cc", "ee", "a", "d"]);
    }

    #[test]
    fn dictionary_keeps_associations() {
        let dict = Dictionary::from([("b", 1), ("c", 3), ("a", 2)]);

        let by_value = dict.sort().descending().by_values();
        assert_eq!(by_value.keys().to_vec(), ["c", "a", "b"]);

        let by_key = dict.sort().by_keys();
        assert_eq!(by_key.keys().to_vec(), ["a", "b", "c"]);
        assert_eq!(by_key.values().to_vec(), [2, 1, 3]);
    }

    #[test]
    fn in_place_renumbers_sequences() {
        let mut seq = Sequence::from([3, 1, 2]);
        seq.sort_in_place().by(|a, b| a.cmp(b));
        assert_eq!(seq.to_vec(), [1, 2, 3]);
        assert_eq!(seq.keys().to_vec(), [0, 1, 2]);
    }
}
