//! Error types for Corral collection operations.

/// Errors raised by capability contracts and operation objects.
///
/// Every variant is recoverable. Fields are filled in where the failure is
/// detected; nothing mutates an error after construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// The requested key is not present (`take`, `replace`, `delete`, `pull`).
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// The key is already present (`add`, rejected key collisions).
    #[error("key already exists: {key}")]
    KeyAlreadyExists { key: String },

    /// A positional access or random pick exceeded the structure bounds.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// An operation parameter is malformed (zero chunk size, zero step).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl CollectionError {
    pub fn key_not_found(key: &impl std::fmt::Debug) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    pub fn key_already_exists(key: &impl std::fmt::Debug) -> Self {
        Self::KeyAlreadyExists {
            key: format!("{key:?}"),
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Shorthand result type for collection operations.
pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_fields() {
        assert_eq!(
            CollectionError::key_not_found(&"a").to_string(),
            "key not found: \"a\""
        );
        assert_eq!(
            CollectionError::out_of_range(5, 3).to_string(),
            "index 5 out of range for length 3"
        );
        assert_eq!(
            CollectionError::invalid_argument("size", "must be positive").to_string(),
            "invalid argument `size`: must be positive"
        );
    }
}
