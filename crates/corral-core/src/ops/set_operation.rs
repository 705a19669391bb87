//! Intersections and differences between two structures.
//!
//! Results are drawn from the primary structure, in its order, and
//! normalized by its variant. "Key" operations compare keys, "value"
//! operations compare values, the bare operations compare whole pairs:
//!
//! ```text
//! primary {a:1, b:2, c:3}   compare {b:2, c:4, d:1}
//!
//! intersect_keys    {b:2, c:3}
//! intersect_values  {a:1, b:2}
//! intersect         {b:2}
//! diff_keys         {a:1}
//! diff_values       {c:3}
//! diff              {a:1, c:3}
//! ```
//!
//! Value comparisons use `PartialEq` and scan `compare` for each item.

use crate::contract::Mergeable;
use crate::structure::Structure;

/// Set-operation builder bound to a primary and a comparison structure.
pub struct SetOperation<'a, S: Structure> {
    primary: &'a S,
    compare: &'a S,
}

impl<'a, S: Structure> SetOperation<'a, S> {
    pub fn new(primary: &'a S, compare: &'a S) -> Self {
        Self { primary, compare }
    }

    /// Items whose key appears in `compare`.
    pub fn intersect_keys(self) -> S {
        let compare = self.compare.storage();
        self.keep(|key, _| compare.contains_key(key))
    }

    /// Items whose key does not appear in `compare`.
    pub fn diff_keys(self) -> S {
        let compare = self.compare.storage();
        self.keep(|key, _| !compare.contains_key(key))
    }

    /// Items whose value appears anywhere in `compare`.
    pub fn intersect_values(self) -> S
    where
        S::Value: PartialEq,
    {
        let compare = self.compare.storage();
        self.keep(|_, value| compare.values().any(|other| other == value))
    }

    /// Items whose value appears nowhere in `compare`.
    pub fn diff_values(self) -> S
    where
        S::Value: PartialEq,
    {
        let compare = self.compare.storage();
        self.keep(|_, value| !compare.values().any(|other| other == value))
    }

    /// Items present in `compare` under the same key with an equal value.
    pub fn intersect(self) -> S
    where
        S::Value: PartialEq,
    {
        let compare = self.compare.storage();
        self.keep(|key, value| compare.get(key) == Some(value))
    }

    /// Items not present in `compare` as the same key/value pair.
    pub fn diff(self) -> S
    where
        S::Value: PartialEq,
    {
        let compare = self.compare.storage();
        self.keep(|key, value| compare.get(key) != Some(value))
    }

    /// Values found in exactly one of the two structures: the primary's
    /// first, then the comparison's.
    ///
    /// Every primary-only item is kept. A comparison-only item whose key is
    /// already taken by one of them is dropped.
    pub fn symmetric_diff_values(self) -> S
    where
        S: Mergeable,
        S::Value: PartialEq,
    {
        let primary_only = SetOperation::new(self.primary, self.compare).diff_values();
        let compare_only = SetOperation::new(self.compare, self.primary).diff_values();
        primary_only.union_keep_first([&compare_only])
    }

    fn keep<F>(self, mut predicate: F) -> S
    where
        F: FnMut(&S::Key, &S::Value) -> bool,
    {
        S::from_storage(
            self.primary
                .storage()
                .iter()
                .filter(|&(key, value)| predicate(key, value))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::contract::Mergeable;
    use crate::{Dictionary, Sequence, Structure};

    fn primary() -> Dictionary<&'static str, i32> {
        Dictionary::from([("a", 1), ("b", 2), ("c", 3)])
    }

    fn compare() -> Dictionary<&'static str, i32> {
        Dictionary::from([("b", 2), ("c", 4), ("d", 1)])
    }

    #[test]
    fn dictionary_algebra() {
        let (p, c) = (primary(), compare());
        let keys = |d: Dictionary<&'static str, i32>| d.keys().to_vec();

        assert_eq!(keys(p.set_operation(&c).intersect_keys()), ["b", "c"]);
        assert_eq!(keys(p.set_operation(&c).intersect_values()), ["a", "b"]);
        assert_eq!(keys(p.set_operation(&c).intersect()), ["b"]);
        assert_eq!(keys(p.set_operation(&c).diff_keys()), ["a"]);
        assert_eq!(keys(p.set_operation(&c).diff_values()), ["c"]);
        assert_eq!(keys(p.set_operation(&c).diff()), ["a", "c"]);
    }

    #[test]
    fn dictionary_symmetric_difference_keeps_primary_items() {
        let (p, c) = (primary(), compare());
        assert_eq!(
            p.set_operation(&c).symmetric_diff_values(),
            Dictionary::from([("c", 3)])
        );

        let left = Dictionary::from([("a", 1)]);
        let right = Dictionary::from([("a", 2)]);
        assert_eq!(
            left.set_operation(&right).symmetric_diff_values(),
            Dictionary::from([("a", 1)])
        );

        let left = Dictionary::from([("a", 1), ("b", 5)]);
        let right = Dictionary::from([("c", 7), ("d", 1)]);
        let both = left.set_operation(&right).symmetric_diff_values();
        assert_eq!(both.keys().to_vec(), ["b", "c"]);
        assert_eq!(both.values().to_vec(), [5, 7]);
    }

    #[test]
    fn sequence_values_renumber() {
        let left = Sequence::from([1, 2, 3, 4]);
        let right = Sequence::from([4, 2, 9]);

        assert_eq!(left.set_operation(&right).intersect_values().to_vec(), [2, 4]);
        assert_eq!(left.set_operation(&right).diff_values().to_vec(), [1, 3]);
        assert_eq!(
            left.set_operation(&right).symmetric_diff_values().to_vec(),
            [1, 3, 9]
        );
        // positions 0..3 exist on both sides
        assert_eq!(left.set_operation(&right).diff_keys().to_vec(), [4]);
    }
}
