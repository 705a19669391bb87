//! Partitioning contracts: chunking and positional selection.

use crate::ops::{Chunk, Select, Skip};
use crate::structure::Structure;

/// Splitting into fixed-size sub-structures.
pub trait Chunkable: Structure {
    fn chunk(&self) -> Chunk<'_, Self> {
        Chunk::new(self)
    }
}

/// First/last/range/every-nth sub-selection.
pub trait Selectable: Structure {
    fn select(&self) -> Select<'_, Self> {
        Select::new(self)
    }

    fn skip(&self) -> Skip<'_, Self> {
        Skip::new(self)
    }
}
