//! Reordering contracts: sorting, reversal, shuffling.

use crate::ops::{Sort, SortInPlace};
use crate::structure::Structure;
use rand::Rng;

/// Stable sorting through the [`Sort`] and [`SortInPlace`] builders.
pub trait Sortable: Structure {
    fn sort(&self) -> Sort<'_, Self> {
        Sort::new(self)
    }

    fn sort_in_place(&mut self) -> SortInPlace<'_, Self> {
        SortInPlace::new(self)
    }
}

/// Order reversal.
///
/// Associative variants move each key together with its value; index
/// variants renumber, so position 0 holds the former last value.
pub trait Reversible: Structure {
    fn reverse(&self) -> Self {
        let mut storage = self.storage().clone();
        storage.reverse();
        Self::from_storage(storage)
    }

    fn reverse_in_place(&mut self) -> &mut Self {
        self.rebuild(|mut storage| {
            storage.reverse();
            storage
        })
    }
}

/// Uniform random permutation, in place.
pub trait ShuffleableInPlace: Structure {
    /// Shuffle with the thread-local generator. Not reproducible.
    fn shuffle_in_place(&mut self) -> &mut Self {
        self.shuffle_in_place_with(&mut rand::thread_rng())
    }

    /// Shuffle with a caller-supplied generator.
    fn shuffle_in_place_with<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized,
    {
        tracing::trace!(items = self.storage().len(), "shuffling");
        self.rebuild(|mut storage| {
            storage.shuffle(rng);
            storage
        })
    }
}
