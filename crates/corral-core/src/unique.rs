//! Set-like list: ordered, index-keyed, no repeated values.

use crate::contract::{
    Chunkable, Filterable, Mergeable, Reversible, Selectable, SequentialAccess,
    ShuffleableInPlace, Sortable,
};
use crate::error::{CollectionError, Result};
use crate::sequence::Values;
use crate::storage::Storage;
use crate::structure::Structure;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered list that holds each value at most once.
///
/// Keys are positions, as in [`Sequence`](crate::Sequence). Inserting a
/// value already present is a no-op, so `union` deduplicates and the first
/// occurrence of a value decides its position. Membership checks compare
/// with `PartialEq` and are linear in the length.
#[derive(Clone, PartialEq, Eq)]
pub struct UniqueList<V> {
    storage: Storage<usize, V>,
}

impl<V> Default for UniqueList<V> {
    fn default() -> Self {
        Self {
            storage: Storage::default(),
        }
    }
}

impl<V: PartialEq> UniqueList<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.storage.get(&index)
    }

    /// The value at `index`, or `OutOfRange`.
    pub fn at(&self, index: usize) -> Result<&V> {
        self.get(index)
            .ok_or_else(|| CollectionError::out_of_range(index, self.len()))
    }

    pub fn contains(&self, value: &V) -> bool {
        self.storage.values().any(|held| held == value)
    }

    /// Append `value` unless it is already held. Returns whether it was added.
    pub fn insert(&mut self, value: V) -> bool {
        if self.contains(&value) {
            return false;
        }
        let index = self.storage.len();
        self.storage.insert(index, value);
        true
    }

    pub fn iter(&self) -> Values<'_, V> {
        Values::new(&self.storage)
    }

    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<V> {
        self.storage.into_values().collect()
    }
}

impl<V: Clone + PartialEq> Structure for UniqueList<V> {
    type Key = usize;
    type Value = V;

    fn storage(&self) -> &Storage<usize, V> {
        &self.storage
    }

    fn into_storage(self) -> Storage<usize, V> {
        self.storage
    }

    fn from_storage(storage: Storage<usize, V>) -> Self {
        storage.into_values().collect()
    }
}

impl<V: Clone + PartialEq> SequentialAccess for UniqueList<V> {
    /// Values already held stay where they are and are skipped; among the
    /// new ones the first occurrence wins.
    fn prepend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut fresh: Vec<V> = Vec::new();
        for value in values {
            if !self.contains(&value) && !fresh.contains(&value) {
                fresh.push(value);
            }
        }
        if fresh.is_empty() {
            return self;
        }
        self.rebuild(|storage| {
            fresh
                .into_iter()
                .chain(storage.into_values())
                .enumerate()
                .collect()
        })
    }

    fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        for value in values {
            self.insert(value);
        }
        self
    }
}

impl<V: Clone + PartialEq> Mergeable for UniqueList<V> {
    fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut out = self.clone();
        for other in others {
            out.append(other.iter().cloned());
        }
        out
    }
}

impl<V: Clone + PartialEq> Filterable for UniqueList<V> {}
impl<V: Clone + PartialEq> Sortable for UniqueList<V> {}
impl<V: Clone + PartialEq> Chunkable for UniqueList<V> {}
impl<V: Clone + PartialEq> Reversible for UniqueList<V> {}
impl<V: Clone + PartialEq> Selectable for UniqueList<V> {}
impl<V: Clone + PartialEq> ShuffleableInPlace for UniqueList<V> {}

impl<V: PartialEq> FromIterator<V> for UniqueList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

impl<V: PartialEq> Extend<V> for UniqueList<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<V: PartialEq> From<Vec<V>> for UniqueList<V> {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V: PartialEq, const N: usize> From<[V; N]> for UniqueList<V> {
    fn from(values: [V; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, V> IntoIterator for &'a UniqueList<V> {
    type Item = &'a V;
    type IntoIter = Values<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Values::new(&self.storage)
    }
}

impl<V> IntoIterator for UniqueList<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage
            .into_values()
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for UniqueList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.storage.values()).finish()
    }
}

impl<V: Serialize> Serialize for UniqueList<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.storage.values())
    }
}

/// Repeated values in the input are dropped.
impl<'de, V: Deserialize<'de> + PartialEq> Deserialize<'de> for UniqueList<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<V>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn union_deduplicates() {
        let left = UniqueList::from([1, 2]);
        let right = UniqueList::from([2, 3]);
        assert_eq!(left.union([&right]).to_vec(), [1, 2, 3]);

        let as_sequences = Sequence::from([1, 2]).union([&Sequence::from([2, 3])]);
        assert_eq!(as_sequences.to_vec(), [1, 2, 2, 3]);
    }

    #[test]
    fn sequential_access_skips_held_values() {
        let mut list = UniqueList::from(["b", "c"]);
        list.append(["c", "d"]).prepend(["a", "d"]);
        assert_eq!(list.to_vec(), ["a", "b", "c", "d"]);
        assert_eq!(list.keys().to_vec(), [0, 1, 2, 3]);
        assert_eq!(list.shift(1), ["a"]);
        assert_eq!(list.tail().found(), Some(&"d"));
    }

    #[test]
    fn prepend_leaves_held_values_in_place() {
        let mut list = UniqueList::from(["b", "c", "d"]);
        list.prepend(["a", "d"]);
        assert_eq!(list.to_vec(), ["a", "b", "c", "d"]);

        list.prepend(["x", "b", "x", "y"]);
        assert_eq!(list.to_vec(), ["x", "y", "a", "b", "c", "d"]);
        assert_eq!(list.keys().to_vec(), [0, 1, 2, 3, 4, 5]);

        let before = list.clone();
        list.prepend(["c", "a"]);
        assert_eq!(list, before);
    }

    #[test]
    fn positional_access_is_bounded() {
        let list = UniqueList::from([10, 20, 10, 30]);
        assert_eq!(list.get(2), Some(&30));
        assert_eq!(list.at(1), Ok(&20));
        assert_eq!(
            list.at(5),
            Err(CollectionError::OutOfRange { index: 5, len: 3 })
        );
    }

    #[test]
    fn seeded_shuffle_keeps_values_and_renumbers() {
        let mut list: UniqueList<u32> = (0..20).collect();
        list.shuffle_in_place_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(list.keys().to_vec(), (0..20).collect::<Vec<usize>>());
        assert_eq!(list.len(), 20);

        let mut values = list.to_vec();
        values.sort_unstable();
        assert_eq!(values, (0..20).collect::<Vec<u32>>());

        let mut again: UniqueList<u32> = (0..20).collect();
        again.shuffle_in_place_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(again, list);
    }

    #[test]
    fn seeded_storage_is_normalized() {
        let storage: Storage<usize, i32> = [(5, 1), (9, 1), (2, 4)].into_iter().collect();
        let list = UniqueList::from_storage(storage);
        assert_eq!(list.to_vec(), [1, 4]);
        assert_eq!(list.keys().to_vec(), [0, 1]);
    }

    #[test]
    fn debug_renders_as_set() {
        insta::assert_snapshot!(format!("{:?}", UniqueList::from([3, 1, 3])), @"{3, 1}");
    }
}
