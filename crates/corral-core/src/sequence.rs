//! Index-ordered list.

use crate::contract::{
    Chunkable, Filterable, Mergeable, Reversible, Selectable, SequentialAccess,
    ShuffleableInPlace, Sortable,
};
use crate::error::{CollectionError, Result};
use crate::storage::{self, Storage};
use crate::structure::Structure;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A list keyed by position.
///
/// Keys are always `0..len` in storage order. Every operation that drops,
/// inserts or reorders items renumbers the rest, so a `Sequence` never has
/// gaps. `union` concatenates.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence<V> {
    storage: Storage<usize, V>,
}

impl<V> Default for Sequence<V> {
    fn default() -> Self {
        Self {
            storage: Storage::default(),
        }
    }
}

impl<V> Sequence<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Append one value.
    pub fn push(&mut self, value: V) -> &mut Self {
        let index = self.storage.len();
        self.storage.insert(index, value);
        self
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.storage.get(&index)
    }

    /// The value at `index`, or `OutOfRange`.
    pub fn at(&self, index: usize) -> Result<&V> {
        self.get(index)
            .ok_or_else(|| CollectionError::out_of_range(index, self.len()))
    }

    /// Values in order.
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

impl<V: Clone> Structure for Sequence<V> {
    type Key = usize;
    type Value = V;

    fn storage(&self) -> &Storage<usize, V> {
        &self.storage
    }

    fn into_storage(self) -> Storage<usize, V> {
        self.storage
    }

    fn from_storage(storage: Storage<usize, V>) -> Self {
        let contiguous = storage.keys().enumerate().all(|(pos, key)| pos == *key);
        if contiguous {
            return Self { storage };
        }
        storage.into_values().collect()
    }
}

impl<V: Clone> SequentialAccess for Sequence<V> {
    fn prepend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        self.rebuild(|storage| {
            values
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
            self.push(value);
        }
        self
    }
}

impl<V: Clone> Mergeable for Sequence<V> {
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

impl<V: Clone> Filterable for Sequence<V> {}
impl<V: Clone> Sortable for Sequence<V> {}
impl<V: Clone> Chunkable for Sequence<V> {}
impl<V: Clone> Reversible for Sequence<V> {}
impl<V: Clone> Selectable for Sequence<V> {}
impl<V: Clone> ShuffleableInPlace for Sequence<V> {}

/// Borrowing iterator over the values of an index-keyed structure.
#[derive(Clone)]
pub struct Values<'a, V> {
    inner: storage::Iter<'a, usize, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(storage: &'a Storage<usize, V>) -> Self {
        Self {
            inner: storage.iter(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<'a, V> IntoIterator for &'a Sequence<V> {
    type Item = &'a V;
    type IntoIter = Values<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Sequence<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<V> FromIterator<V> for Sequence<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().enumerate().collect(),
        }
    }
}

impl<V> Extend<V> for Sequence<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V> From<Vec<V>> for Sequence<V> {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V, const N: usize> From<[V; N]> for Sequence<V> {
    fn from(values: [V; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<V: fmt::Debug> fmt::Debug for Sequence<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V: Serialize> Serialize for Sequence<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Sequence<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<V>::deserialize(deserializer).map(Self::from)
    }
}
