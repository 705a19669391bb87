//! Grouping counts.

use crate::dictionary::Dictionary;
use crate::structure::Structure;
use std::fmt::Debug;
use std::hash::Hash;

/// Counting builder bound to one structure.
///
/// Groups appear in the order their first member was seen.
pub struct CountBy<'a, S: Structure> {
    target: &'a S,
}

impl<'a, S: Structure> CountBy<'a, S> {
    pub fn new(target: &'a S) -> Self {
        Self { target }
    }

    /// Occurrences of each distinct value.
    pub fn values(self) -> Dictionary<S::Value, usize>
    where
        S::Value: Eq + Hash + Debug,
    {
        self.with(|value, _| value.clone())
    }

    /// Size of each group produced by `classifier(value, key)`.
    pub fn with<G, F>(self, mut classifier: F) -> Dictionary<G, usize>
    where
        F: FnMut(&S::Value, &S::Key) -> G,
        G: Clone + Eq + Hash + Debug,
    {
        let mut counts = Dictionary::new();
        for (key, value) in self.target.storage() {
            *counts.entry_or_default(classifier(value, key)) += 1;
        }
        counts
    }

    /// Number of items matching `predicate(value, key)`.
    pub fn matching<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(&S::Value, &S::Key) -> bool,
    {
        self.target
            .storage()
            .iter()
            .filter(|&(key, value)| predicate(value, key))
            .count()
    }
}
