//! Counting and iteration shared by every structure.

use crate::storage::{Iter, Storage};
use crate::structure::Structure;

/// Counting and traversal over a structure's storage.
///
/// Blanket-implemented for every [`Structure`].
pub trait Enumerable {
    type Key;
    type Value;

    fn entries(&self) -> &Storage<Self::Key, Self::Value>;

    fn count(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// `(key, value)` pairs in order.
    fn iter(&self) -> Iter<'_, Self::Key, Self::Value> {
        self.entries().iter()
    }

    fn first(&self) -> Option<(&Self::Key, &Self::Value)> {
        self.entries().first()
    }

    fn last(&self) -> Option<(&Self::Key, &Self::Value)> {
        self.entries().last()
    }

    fn contains_value(&self, needle: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.entries().values().any(|value| value == needle)
    }

    /// Key of the first item equal to `needle`.
    fn search(&self, needle: &Self::Value) -> Option<&Self::Key>
    where
        Self::Value: PartialEq,
    {
        self.iter()
            .find(|(_, value)| *value == needle)
            .map(|(key, _)| key)
    }
}

impl<S: Structure> Enumerable for S {
    type Key = S::Key;
    type Value = S::Value;

    fn entries(&self) -> &Storage<S::Key, S::Value> {
        self.storage()
    }
}

/// Number of items any iterable yields.
pub fn count_items<I: IntoIterator>(items: I) -> usize {
    items.into_iter().count()
}
