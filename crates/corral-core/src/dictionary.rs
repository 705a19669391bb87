//! Ordered associative map.

use crate::contract::{
    Chunkable, Filterable, KeyMappable, Mergeable, RandomAccess, Reversible, Selectable,
    ShuffleableInPlace, Sortable,
};
use crate::storage::{self, Storage};
use crate::structure::Structure;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A map that remembers insertion order.
///
/// Keys are never renumbered: filtering, sorting, reversing, chunking and
/// selection all keep each key with its value. `union` lets later
/// structures overwrite duplicate keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Dictionary<K, V> {
    storage: Storage<K, V>,
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self {
            storage: Storage::default(),
        }
    }
}

impl<K, V> Dictionary<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.storage.get_mut(key)
    }

    /// Value under `key`, inserting `V::default()` first if it is new.
    pub fn entry_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.storage.get_or_insert_with(key, V::default)
    }
}

impl<K, V> Structure for Dictionary<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn storage(&self) -> &Storage<K, V> {
        &self.storage
    }

    fn into_storage(self) -> Storage<K, V> {
        self.storage
    }

    fn from_storage(storage: Storage<K, V>) -> Self {
        Self { storage }
    }
}

impl<K, V> RandomAccess for Dictionary<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    fn set(&mut self, value: V, key: K) -> &mut Self {
        self.storage.insert(key, value);
        self
    }

    fn evict(&mut self, key: &K) -> Option<V> {
        self.storage.remove(key)
    }
}

impl<K, V> Mergeable for Dictionary<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut storage = self.storage.clone();
        for other in others {
            storage.extend(
                other
                    .storage
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
        }
        Self { storage }
    }

    fn union_keep_first<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut storage = self.storage.clone();
        for other in others {
            for (key, value) in other.storage.iter() {
                if storage.contains_key(key) {
                    tracing::trace!(key = ?key, "union kept the earlier value");
                    continue;
                }
                storage.insert(key.clone(), value.clone());
            }
        }
        Self { storage }
    }
}

macro_rules! opt_in {
    ($($contract:ident),* $(,)?) => {
        $(
            impl<K, V> $contract for Dictionary<K, V>
            where
                K: Clone + Eq + Hash + fmt::Debug,
                V: Clone,
            {
            }
        )*
    };
}

opt_in!(
    Filterable,
    Sortable,
    Chunkable,
    Reversible,
    Selectable,
    ShuffleableInPlace,
    KeyMappable,
);

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = storage::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary<K, V>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Dictionary<K, V>
where
    K: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Dictionary<K, V>
where
    K: Clone + Eq + Hash,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Dictionary<K, V>
where
    K: Clone + Eq + Hash,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Storage<K, V>> for Dictionary<K, V> {
    fn from(storage: Storage<K, V>) -> Self {
        Self { storage }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.storage, f)
    }
}

/// Serialized as a map, in insertion order.
impl<K: Serialize, V: Serialize> Serialize for Dictionary<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.storage.iter())
    }
}

impl<'de, K, V> Deserialize<'de> for Dictionary<K, V>
where
    K: Deserialize<'de> + Clone + Eq + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

struct MapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for MapVisitor<K, V>
where
    K: Deserialize<'de> + Clone + Eq + Hash,
    V: Deserialize<'de>,
{
    type Value = Dictionary<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let capacity = map.size_hint().unwrap_or(0).min(storage::PREALLOCATE_LIMIT);
        let mut storage = Storage::with_capacity(capacity);
        while let Some((key, value)) = map.next_entry::<K, V>()? {
            storage.insert(key, value);
        }
        Ok(Dictionary { storage })
    }
}
