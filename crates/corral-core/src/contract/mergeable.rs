//! Union and set operations.

use crate::ops::SetOperation;
use crate::structure::Structure;

/// Combining structures of the same variant.
///
/// Duplicate handling is a property of the variant:
///
/// | variant      | `union` on a duplicate                      |
/// |--------------|---------------------------------------------|
/// | `Sequence`   | kept (plain concatenation)                  |
/// | `UniqueList` | dropped (first occurrence wins)             |
/// | `Dictionary` | later value overwrites, key keeps its slot  |
///
/// [`union_keep_first`](Mergeable::union_keep_first) is the non-overwriting
/// form, used by the symmetric difference.
pub trait Mergeable: Structure {
    /// `self` followed by every structure in `others`.
    fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;

    /// Like [`union`](Self::union), but an item whose key is already present
    /// is dropped instead of replacing the held one.
    ///
    /// Index-keyed variants renumber on every merge, so their keys never
    /// collide and this is the same as `union`.
    fn union_keep_first<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        self.union(others)
    }

    /// Intersections and differences against `compare`.
    fn set_operation<'a>(&'a self, compare: &'a Self) -> SetOperation<'a, Self> {
        SetOperation::new(self, compare)
    }
}
