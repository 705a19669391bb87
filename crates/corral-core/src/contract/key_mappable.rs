//! Key rewriting.

use crate::error::{CollectionError, Result};
use crate::policy::KeyCollision;
use crate::storage::Storage;
use crate::structure::Structure;

/// Rewrite every key with `f(key, value)`.
///
/// Only meaningful for variants whose keys are not positional.
pub trait KeyMappable: Structure {
    /// Rewritten copy. Colliding keys: last write wins, the later value
    /// taking the slot of the first entry mapped to that key.
    fn apply_to_keys<F>(&self, f: F) -> Self
    where
        F: FnMut(&Self::Key, &Self::Value) -> Self::Key,
    {
        Self::from_storage(remap(self.storage().iter(), f))
    }

    /// Rewrite keys in place; collisions as in [`apply_to_keys`](Self::apply_to_keys).
    fn transform_keys<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&Self::Key, &Self::Value) -> Self::Key,
    {
        let remapped = remap(self.storage().iter(), f);
        self.rebuild(|_| remapped)
    }

    /// Rewritten copy under an explicit collision policy.
    fn try_apply_to_keys<F>(&self, mut f: F, policy: KeyCollision) -> Result<Self>
    where
        F: FnMut(&Self::Key, &Self::Value) -> Self::Key,
    {
        match policy {
            KeyCollision::Overwrite => Ok(self.apply_to_keys(f)),
            KeyCollision::Reject => {
                let mut out = Storage::with_capacity(self.storage().len());
                for (key, value) in self.storage() {
                    let mapped = f(key, value);
                    if out.contains_key(&mapped) {
                        return Err(CollectionError::key_already_exists(&mapped));
                    }
                    out.insert(mapped, value.clone());
                }
                Ok(Self::from_storage(out))
            }
        }
    }
}

fn remap<'a, K, V, I, F>(entries: I, mut f: F) -> Storage<K, V>
where
    K: Clone + Eq + std::hash::Hash + std::fmt::Debug + 'a,
    V: Clone + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
    F: FnMut(&K, &V) -> K,
{
    let mut out = Storage::new();
    for (key, value) in entries {
        let mapped = f(key, value);
        if out.insert(mapped.clone(), value.clone()).is_some() {
            tracing::debug!(from = ?key, to = ?mapped, "key collision, last write wins");
        }
    }
    out
}
