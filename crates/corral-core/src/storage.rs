//! Ordered key/value storage backing every structure.
//!
//! Entries live in a `Vec` in storage order; a hash index maps each key to
//! its position. Every operation that moves entries rebuilds the index, so
//! `index[key] == position` holds between calls.
//!
//! ```text
//! entries: [(k0, v0), (k1, v1), (k2, v2)]
//! index:   {k0: 0, k1: 1, k2: 2}
//! ```

use rand::Rng;
use rand::seq::SliceRandom;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Upper bound on entries reserved up front from a deserializer's size hint.
pub(crate) const PREALLOCATE_LIMIT: usize = 4096;

/// Insertion-ordered mapping with unique keys.
#[derive(Clone)]
pub struct Storage<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Storage<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Storage<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Entry at a storage position.
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get(position).map(|(key, value)| (key, value))
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.get_index(0)
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(key, value)| (key, value))
    }

    /// Entries in storage order.
    pub fn as_entries(&self) -> &[(K, V)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }

    pub fn into_values(self) -> impl DoubleEndedIterator<Item = V> + ExactSizeIterator {
        self.entries.into_iter().map(|(_, value)| value)
    }
}

impl<K, V> Storage<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Storage position of `key`.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|pos| &self.entries[pos].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let pos = self.position(key)?;
        Some(&mut self.entries[pos].1)
    }

    /// Upsert. An existing key keeps its position and the previous value is
    /// returned; a new key is appended.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Value under `key`, appending `default()` first if the key is new.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, default()));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for (moved, _) in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(moved) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Remove the head entry.
    pub fn shift(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = self.entries.remove(0);
        self.reindex();
        Some(entry)
    }

    /// Remove the tail entry.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let (key, value) = self.entries.pop()?;
        self.index.remove(&key);
        Some((key, value))
    }

    /// Split at a storage position; `self` keeps `[0, at)`.
    pub fn split_off(&mut self, at: usize) -> Self {
        let at = at.min(self.entries.len());
        let tail = self.entries.split_off(at);
        for (key, _) in &tail {
            self.index.remove(key);
        }
        Self::from_unique(tail)
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|(key, value)| keep(key, value));
        self.reindex();
    }

    pub fn reverse(&mut self) {
        self.entries.reverse();
        self.reindex();
    }

    /// Stable sort over whole entries.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut((&K, &V), (&K, &V)) -> Ordering,
    {
        self.entries
            .sort_by(|(ka, va), (kb, vb)| compare((ka, va), (kb, vb)));
        self.reindex();
    }

    /// Uniform random permutation of the entries.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.entries.shuffle(rng);
        self.reindex();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Build from entries already known to have distinct keys.
    fn from_unique(entries: Vec<(K, V)>) -> Self {
        let mut storage = Self {
            entries,
            index: HashMap::new(),
        };
        storage.reindex();
        storage
    }

    fn reindex(&mut self) {
        self.index.clear();
        self.index.reserve(self.entries.len());
        for (pos, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), pos);
        }
    }
}

/// Borrowing iterator over `(key, value)` pairs in storage order.
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a Storage<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for Storage<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Seeding: a repeated key overwrites the earlier value in place.
impl<K, V> FromIterator<(K, V)> for Storage<K, V>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut storage = Self::new();
        storage.extend(iter);
        storage
    }
}

impl<K, V> Extend<(K, V)> for Storage<K, V>
where
    K: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Order-sensitive: equal storages hold the same pairs in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for Storage<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Storage<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Storage<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Serialized as a sequence of `[key, value]` pairs so that order and
/// non-string keys survive formats whose maps do not.
impl<K: Serialize, V: Serialize> Serialize for Storage<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            seq.serialize_element(&(key, value))?;
        }
        seq.end()
    }
}

impl<'de, K, V> Deserialize<'de> for Storage<K, V>
where
    K: Deserialize<'de> + Clone + Eq + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PairsVisitor(PhantomData))
    }
}

struct PairsVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for PairsVisitor<K, V>
where
    K: Deserialize<'de> + Clone + Eq + Hash,
    V: Deserialize<'de>,
{
    type Value = Storage<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let capacity = seq.size_hint().unwrap_or(0).min(PREALLOCATE_LIMIT);
        let mut storage = Storage::with_capacity(capacity);
        while let Some((key, value)) = seq.next_element::<(K, V)>()? {
            storage.insert(key, value);
        }
        Ok(storage)
    }
}
