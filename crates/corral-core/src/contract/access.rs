//! Keyed and positional access contracts.

use crate::error::{CollectionError, Result};
use crate::status::Lookup;
use crate::structure::Structure;

/// Arbitrary-key access: lookups, upserts, guarded inserts and removals.
///
/// Implementors provide [`set`](Self::set) and [`evict`](Self::evict); the
/// guarded variants are built on top of them and never modify the structure
/// when they fail.
pub trait RandomAccess: Structure {
    /// Upsert `value` under `key`.
    fn set(&mut self, value: Self::Value, key: Self::Key) -> &mut Self;

    /// Remove `key` and hand back its value, if present.
    fn evict(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn exist(&self, key: &Self::Key) -> bool {
        self.storage().contains_key(key)
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.storage().get(key)
    }

    /// Like [`get`](Self::get), reporting a missing key as [`Status::None`](crate::Status::None).
    fn lookup(&self, key: &Self::Key) -> Lookup<&Self::Value> {
        Lookup::from_option(self.get(key))
    }

    /// The value under `key`, or `KeyNotFound`.
    fn take(&self, key: &Self::Key) -> Result<&Self::Value> {
        self.get(key)
            .ok_or_else(|| CollectionError::key_not_found(key))
    }

    /// Insert a new key; `KeyAlreadyExists` if it is present.
    fn add(&mut self, value: Self::Value, key: Self::Key) -> Result<&mut Self> {
        if self.exist(&key) {
            return Err(CollectionError::key_already_exists(&key));
        }
        Ok(self.set(value, key))
    }

    /// Overwrite an existing key; `KeyNotFound` if it is absent.
    fn replace(&mut self, value: Self::Value, key: Self::Key) -> Result<&mut Self> {
        if !self.exist(&key) {
            return Err(CollectionError::key_not_found(&key));
        }
        Ok(self.set(value, key))
    }

    /// Remove `key` if present. Missing keys are not an error.
    fn remove(&mut self, key: &Self::Key) -> &mut Self {
        self.evict(key);
        self
    }

    /// Remove `key`; `KeyNotFound` if it is absent.
    fn delete(&mut self, key: &Self::Key) -> Result<&mut Self> {
        match self.evict(key) {
            Some(_) => Ok(self),
            None => Err(CollectionError::key_not_found(key)),
        }
    }

    /// Remove `key` and return its value; `KeyNotFound` if it is absent.
    fn pull(&mut self, key: &Self::Key) -> Result<Self::Value> {
        self.evict(key)
            .ok_or_else(|| CollectionError::key_not_found(key))
    }
}

/// Head/tail access for ordered, index-keyed structures.
///
/// Implementors provide [`prepend`](Self::prepend) and
/// [`append`](Self::append), since only the variant knows how new values are
/// keyed.
pub trait SequentialAccess: Structure {
    /// Insert `values` at the head, keeping their argument order.
    fn prepend<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Value>;

    /// Insert `values` at the tail, keeping their argument order.
    fn append<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Value>;

    /// Remove up to `n` items from the head, returned in order.
    fn shift(&mut self, n: usize) -> Vec<Self::Value> {
        let mut removed = Vec::new();
        self.rebuild(|mut storage| {
            let rest = storage.split_off(n);
            removed = storage.into_values().collect();
            rest
        });
        removed
    }

    /// Remove up to `n` items from the tail, returned in order.
    fn pop(&mut self, n: usize) -> Vec<Self::Value> {
        let mut removed = Vec::new();
        self.rebuild(|mut storage| {
            let at = storage.len().saturating_sub(n);
            removed = storage.split_off(at).into_values().collect();
            storage
        });
        removed
    }

    fn head(&self) -> Lookup<&Self::Value> {
        Lookup::from_option(self.storage().first().map(|(_, value)| value))
    }

    fn tail(&self) -> Lookup<&Self::Value> {
        Lookup::from_option(self.storage().last().map(|(_, value)| value))
    }
}
