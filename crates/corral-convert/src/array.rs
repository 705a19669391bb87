//! Plain `Vec` snapshots of a structure.

use corral_core::{Dictionary, Enumerable, Sequence, UniqueList};
use std::fmt::Debug;
use std::hash::Hash;

/// Copy a structure's contents out into a `Vec`, in order.
///
/// Index-keyed structures drop their positions and yield values; keyed
/// structures yield `(key, value)` pairs.
pub trait ArrayConvertable {
    type Item;

    fn to_array(&self) -> Vec<Self::Item>;
}

impl<V: Clone> ArrayConvertable for Sequence<V> {
    type Item = V;

    fn to_array(&self) -> Vec<V> {
        self.to_vec()
    }
}

impl<V: Clone + PartialEq> ArrayConvertable for UniqueList<V> {
    type Item = V;

    fn to_array(&self) -> Vec<V> {
        self.to_vec()
    }
}

impl<K, V> ArrayConvertable for Dictionary<K, V>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone,
{
    type Item = (K, V);

    fn to_array(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
