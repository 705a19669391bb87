//! # Corral Core
//!
//! A small algebra of ordered collections: one backing store, a set of
//! capability contracts over it, and a few concrete structures that opt
//! into the contracts their semantics support.
//!
//! This crate is **structure-agnostic**: it does not prescribe what a
//! collection means. It only prescribes how keys and values move through
//! each operation and which invariants a structure re-establishes after.
//!
//! ## Architecture
//!
//! ```text
//! Storage<K, V>        ← Ordered entries + key index
//!     │
//! Structure            ← storage / into_storage / from_storage (normalize)
//!     │
//! contracts            ← RandomAccess, SequentialAccess, Filterable, ...
//!     │
//! ops                  ← CountBy, Chunk, Sort, Select/Skip, SetOperation
//!     │
//! Sequence | Dictionary | UniqueList
//! ```
//!
//! | structure      | keys            | union                     |
//! |----------------|-----------------|---------------------------|
//! | `Sequence`     | `0..len`        | concatenation             |
//! | `Dictionary`   | preserved       | later values overwrite    |
//! | `UniqueList`   | `0..len`        | first occurrence wins     |

pub mod contract;
pub mod dictionary;
pub mod enumerable;
pub mod error;
pub mod flow;
pub mod ops;
pub mod policy;
pub mod sequence;
pub mod status;
pub mod storage;
pub mod structure;
pub mod unique;

pub use contract::{
    Chunkable, Filterable, KeyMappable, Mergeable, RandomAccess, Reversible, Selectable,
    SequentialAccess, ShuffleableInPlace, Sortable,
};
pub use dictionary::Dictionary;
pub use enumerable::{Enumerable, count_items};
pub use error::{CollectionError, Result};
pub use flow::Flow;
pub use ops::{Chunk, CountBy, Direction, Select, SetOperation, Skip, Sort, SortInPlace};
pub use policy::KeyCollision;
pub use sequence::Sequence;
pub use status::{Lookup, Status};
pub use storage::Storage;
pub use structure::Structure;
pub use unique::UniqueList;
