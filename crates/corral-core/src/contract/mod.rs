//! Capability contracts.
//!
//! Each contract is a trait over [`Structure`](crate::Structure) whose
//! methods are written against the structure's storage. A concrete
//! structure opts into the subset its semantics support; most opt-ins are
//! empty `impl` blocks.

mod access;
mod filterable;
mod key_mappable;
mod mergeable;
mod ordering;
mod partition;

pub use access::{RandomAccess, SequentialAccess};
pub use filterable::Filterable;
pub use key_mappable::KeyMappable;
pub use mergeable::Mergeable;
pub use ordering::{Reversible, ShuffleableInPlace, Sortable};
pub use partition::{Chunkable, Selectable};
