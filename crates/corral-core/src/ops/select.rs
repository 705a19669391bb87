//! Positional selection.
//!
//! [`Select`] keeps the items a rule picks; [`Skip`] keeps the rest. Both
//! work on storage positions, not keys, so they behave the same on every
//! variant. Requests reaching past the end are clamped rather than
//! rejected; only single-position access and random picks report
//! `OutOfRange`.

use crate::error::{CollectionError, Result};
use crate::structure::Structure;
use rand::Rng;
use std::ops::{Bound, RangeBounds};

/// Resolve `range` against `len` into a clamped half-open `[start, end)`.
fn clamp_range<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&n) => n.saturating_add(1),
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    (start.min(end), end)
}

fn check_step(step: usize) -> Result<()> {
    if step == 0 {
        return Err(CollectionError::invalid_argument(
            "step",
            "step must be a positive integer",
        ));
    }
    Ok(())
}

/// Keep the items at positions where `keep(position, len)` holds.
fn by_position<S, F>(target: &S, mut keep: F) -> S
where
    S: Structure,
    F: FnMut(usize, usize) -> bool,
{
    let storage = target.storage();
    let len = storage.len();
    S::from_storage(
        storage
            .iter()
            .enumerate()
            .filter(|&(position, _)| keep(position, len))
            .map(|(_, (key, value))| (key.clone(), value.clone()))
            .collect(),
    )
}

/// Selection builder bound to one structure.
pub struct Select<'a, S: Structure> {
    target: &'a S,
}

impl<'a, S: Structure> Select<'a, S> {
    pub fn new(target: &'a S) -> Self {
        Self { target }
    }

    /// The first `n` items.
    pub fn first(self, n: usize) -> S {
        by_position(self.target, |pos, _| pos < n)
    }

    /// The last `n` items.
    pub fn last(self, n: usize) -> S {
        by_position(self.target, |pos, len| pos >= len.saturating_sub(n))
    }

    /// Items at the positions in `range`.
    pub fn range<R: RangeBounds<usize>>(self, range: R) -> S {
        let (start, end) = clamp_range(&range, self.target.storage().len());
        by_position(self.target, |pos, _| start <= pos && pos < end)
    }

    /// Every `step`-th item, starting with the first.
    pub fn every(self, step: usize) -> Result<S> {
        check_step(step)?;
        Ok(by_position(self.target, |pos, _| pos % step == 0))
    }

    /// The item at `position`.
    pub fn at(self, position: usize) -> Result<(&'a S::Key, &'a S::Value)> {
        let storage = self.target.storage();
        storage
            .get_index(position)
            .ok_or_else(|| CollectionError::out_of_range(position, storage.len()))
    }

    /// `count` distinct items picked uniformly at random, in their original
    /// order.
    pub fn random(self, count: usize) -> Result<S> {
        self.random_with(count, &mut rand::thread_rng())
    }

    pub fn random_with<R>(self, count: usize, rng: &mut R) -> Result<S>
    where
        R: Rng + ?Sized,
    {
        let len = self.target.storage().len();
        if len == 0 || count > len {
            return Err(CollectionError::out_of_range(count, len));
        }
        let mut picked = rand::seq::index::sample(rng, len, count).into_vec();
        picked.sort_unstable();
        let storage = self.target.storage();
        Ok(S::from_storage(
            picked
                .into_iter()
                .filter_map(|pos| storage.get_index(pos))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ))
    }
}

/// Skipping builder bound to one structure.
pub struct Skip<'a, S: Structure> {
    target: &'a S,
}

impl<'a, S: Structure> Skip<'a, S> {
    pub fn new(target: &'a S) -> Self {
        Self { target }
    }

    /// Everything but the first `n` items.
    pub fn first(self, n: usize) -> S {
        by_position(self.target, |pos, _| pos >= n)
    }

    /// Everything but the last `n` items.
    pub fn last(self, n: usize) -> S {
        by_position(self.target, |pos, len| pos < len.saturating_sub(n))
    }

    /// Everything outside the positions in `range`.
    pub fn range<R: RangeBounds<usize>>(self, range: R) -> S {
        let (start, end) = clamp_range(&range, self.target.storage().len());
        by_position(self.target, |pos, _| pos < start || pos >= end)
    }

    /// Everything but every `step`-th item, starting with the first.
    pub fn every(self, step: usize) -> Result<S> {
        check_step(step)?;
        Ok(by_position(self.target, |pos, _| pos % step != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_range;
    use crate::contract::Selectable;
    use crate::{CollectionError, Dictionary, Sequence, Structure};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn digits() -> Sequence<u32> {
        (0..10).collect()
    }

    #[test]
    fn select_rules() {
        let seq = digits();
        assert_eq!(seq.select().first(3).to_vec(), [0, 1, 2]);
        assert_eq!(seq.select().last(2).to_vec(), [8, 9]);
        assert_eq!(seq.select().range(4..=6).to_vec(), [4, 5, 6]);
        assert_eq!(seq.select().every(4).unwrap().to_vec(), [0, 4, 8]);
    }

    #[test]
    fn skip_rules() {
        let seq = digits();
        assert_eq!(seq.skip().first(8).to_vec(), [8, 9]);
        assert_eq!(seq.skip().last(8).to_vec(), [0, 1]);
        assert_eq!(seq.skip().range(1..9).to_vec(), [0, 9]);
        assert_eq!(seq.skip().every(2).unwrap().to_vec(), [1, 3, 5, 7, 9]);
    }

    #[test]
    fn out_of_range_requests_clamp() {
        let seq = digits();
        assert_eq!(seq.select().first(50).to_vec().len(), 10);
        assert!(seq.select().range(20..30).to_vec().is_empty());
        assert!(seq.skip().first(11).to_vec().is_empty());
        assert_eq!(clamp_range(&(7..3), 10), (3, 3));
    }

    #[test]
    fn single_position_access() {
        let dict = Dictionary::from([("a", 1), ("b", 2)]);
        assert_eq!(dict.select().at(1).unwrap(), (&"b", &2));
        assert_eq!(
            dict.select().at(2),
            Err(CollectionError::OutOfRange { index: 2, len: 2 })
        );
        assert!(dict.select().every(0).is_err());
    }

    #[test]
    fn random_pick_keeps_order_and_bounds() {
        let seq = digits();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = seq.select().random_with(4, &mut rng).unwrap().to_vec();
        assert_eq!(picked.len(), 4);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));

        assert!(seq.select().random(11).is_err());
        assert!(Sequence::<u8>::new().select().random(0).is_err());
        assert_eq!(seq.select().random(10).unwrap().keys().to_vec().len(), 10);
    }
}
