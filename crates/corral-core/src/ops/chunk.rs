//! Splitting a structure into consecutive sub-structures.

use crate::error::{CollectionError, Result};
use crate::structure::Structure;

/// Chunking builder bound to one structure.
pub struct Chunk<'a, S: Structure> {
    target: &'a S,
}

impl<'a, S: Structure> Chunk<'a, S> {
    pub fn new(target: &'a S) -> Self {
        Self { target }
    }

    /// Chunks of `size` items; the last one may be shorter.
    ///
    /// A structure of `m` items yields `ceil(m / size)` chunks.
    pub fn by(self, size: usize) -> Result<Vec<S>> {
        if size == 0 {
            return Err(CollectionError::invalid_argument(
                "size",
                "chunk size must be a positive integer",
            ));
        }
        let storage = self.target.storage();
        let chunks = storage
            .as_entries()
            .chunks(size)
            .map(|chunk| S::from_storage(chunk.iter().cloned().collect()))
            .collect::<Vec<_>>();
        tracing::trace!(items = storage.len(), size, chunks = chunks.len(), "chunked");
        Ok(chunks)
    }

    /// At most `parts` chunks of balanced size.
    ///
    /// Uses a chunk size of `ceil(m / parts)`, so fewer than `parts` chunks
    /// come back when the items do not spread evenly.
    pub fn into_parts(self, parts: usize) -> Result<Vec<S>> {
        if parts == 0 {
            return Err(CollectionError::invalid_argument(
                "parts",
                "part count must be a positive integer",
            ));
        }
        let len = self.target.storage().len();
        if len == 0 {
            return Ok(Vec::new());
        }
        self.by(len.div_ceil(parts))
    }
}

#[cfg(test)]
mod tests {
    use crate::contract::Chunkable;
    use crate::{CollectionError, Dictionary, Sequence, Structure};

    #[test]
    fn fixed_size_with_short_tail() {
        let seq = Sequence::from([1, 2, 3, 4, 5]);
        let chunks = seq.chunk().by(2).unwrap();
        let parts: Vec<_> = chunks.iter().map(Sequence::to_vec).collect();
        assert_eq!(parts, [vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(chunks[1].keys().to_vec(), [0, 1]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let seq = Sequence::from([1]);
        assert!(matches!(
            seq.chunk().by(0),
            Err(CollectionError::InvalidArgument { name: "size", .. })
        ));
        assert!(seq.chunk().into_parts(0).is_err());
    }

    #[test]
    fn dictionary_chunks_keep_keys() {
        let dict = Dictionary::from([("a", 1), ("b", 2), ("c", 3)]);
        let chunks = dict.chunk().into_parts(2).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].keys().to_vec(), ["c"]);
    }

    #[test]
    fn empty_structure_has_no_chunks() {
        let seq = Sequence::<i32>::new();
        assert!(seq.chunk().by(3).unwrap().is_empty());
        assert!(seq.chunk().into_parts(3).unwrap().is_empty());
    }
}
