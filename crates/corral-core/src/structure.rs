//! The base data structure contract.
//!
//! Every concrete structure owns one [`Storage`] and knows how to rebuild
//! itself from one. Everything else in the contract is written in terms of
//! those three hooks:
//!
//! ```text
//! storage()       ← read-only view of the backing store
//! into_storage()  ← give the store up (in-place operations)
//! from_storage()  ← normalize a store into this variant
//! ```
//!
//! `from_storage` is where variants differ: index-keyed variants renumber
//! keys to `0..len`, set-like variants drop repeated values, associative
//! variants keep keys as given. Operations produce a store that preserves
//! keys and let the variant normalize it.

use crate::flow::Flow;
use crate::ops::CountBy;
use crate::sequence::Sequence;
use crate::storage::Storage;
use std::fmt::Debug;
use std::hash::Hash;

/// A collection backed by a [`Storage`] container.
pub trait Structure: Default + Sized {
    /// Key type: `usize` for index variants, anything hashable otherwise.
    type Key: Clone + Eq + Hash + Debug;

    type Value: Clone;

    /// The backing store.
    fn storage(&self) -> &Storage<Self::Key, Self::Value>;

    /// Consume the structure, yielding its store.
    fn into_storage(self) -> Storage<Self::Key, Self::Value>;

    /// Build a structure of this variant from a store.
    ///
    /// Must normalize the store to the variant's invariants.
    fn from_storage(storage: Storage<Self::Key, Self::Value>) -> Self;

    /// Replace the contents with `f(current store)`, normalized.
    fn rebuild<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(Storage<Self::Key, Self::Value>) -> Storage<Self::Key, Self::Value>,
    {
        let storage = std::mem::take(self).into_storage();
        *self = Self::from_storage(f(storage));
        self
    }

    /// Grouping counts by a classifier.
    fn count_by(&self) -> CountBy<'_, Self> {
        CountBy::new(self)
    }

    /// Visit at most `limit` items in order (all of them if `None`).
    ///
    /// Stops early when the callback returns [`Flow::Stop`]; `Keep` and
    /// `Drop` both continue.
    fn each<F, R>(&self, mut callback: F, limit: Option<usize>) -> &Self
    where
        F: FnMut(&Self::Value, &Self::Key) -> R,
        R: Into<Flow>,
    {
        let limit = limit.unwrap_or(usize::MAX);
        for (key, value) in self.storage().iter().take(limit) {
            let flow: Flow = callback(value, key).into();
            if flow.is_stop() {
                break;
            }
        }
        self
    }

    /// `then(self)` if `condition` holds, otherwise `self` unchanged.
    fn when<F>(self, condition: bool, then: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { then(self) } else { self }
    }

    /// `then(self)` if `condition` holds, otherwise `otherwise(self)`.
    fn when_else<F, G>(self, condition: bool, then: F, otherwise: G) -> Self
    where
        F: FnOnce(Self) -> Self,
        G: FnOnce(Self) -> Self,
    {
        if condition { then(self) } else { otherwise(self) }
    }

    /// `then(self)` unless `condition` holds.
    fn unless<F>(self, condition: bool, then: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.when(!condition, then)
    }

    fn unless_else<F, G>(self, condition: bool, then: F, otherwise: G) -> Self
    where
        F: FnOnce(Self) -> Self,
        G: FnOnce(Self) -> Self,
    {
        self.when_else(!condition, then, otherwise)
    }

    /// All keys, in order.
    fn keys(&self) -> Sequence<Self::Key> {
        self.storage().keys().cloned().collect()
    }

    /// Keys of the items matching `predicate(value, key)`.
    fn keys_where<P>(&self, mut predicate: P) -> Sequence<Self::Key>
    where
        P: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        self.storage()
            .iter()
            .filter(|&(key, value)| predicate(value, key))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// All values, in order.
    fn values(&self) -> Sequence<Self::Value> {
        self.storage().values().cloned().collect()
    }

    fn values_where<P>(&self, mut predicate: P) -> Sequence<Self::Value>
    where
        P: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        self.storage()
            .iter()
            .filter(|&(key, value)| predicate(value, key))
            .map(|(_, value)| value.clone())
            .collect()
    }
}
