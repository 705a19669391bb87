//! Predicate filtering with early exit.

use crate::flow::Flow;
use crate::storage::Storage;
use crate::structure::Structure;

/// Pure filtering.
pub trait Filterable: Structure {
    /// Items for which `predicate(value, key)` keeps, in order.
    ///
    /// A [`Flow::Stop`] ends the scan: the result holds what was kept
    /// before it, and neither the stopping item nor anything after it.
    fn filter<F, R>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Self::Value, &Self::Key) -> R,
        R: Into<Flow>,
    {
        let mut kept = Storage::new();
        for (position, (key, value)) in self.storage().iter().enumerate() {
            let flow: Flow = predicate(value, key).into();
            match flow {
                Flow::Keep => {
                    kept.insert(key.clone(), value.clone());
                }
                Flow::Drop => {}
                Flow::Stop => {
                    tracing::trace!(position, kept = kept.len(), "filter stopped early");
                    break;
                }
            }
        }
        Self::from_storage(kept)
    }
}
