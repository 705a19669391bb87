//! Error types for conversions and option loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid json: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {origin}: {source}")]
    ParseToml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("document nests {depth} levels deep, limit is {max}")]
    DepthExceeded { depth: usize, max: usize },

    #[error("expected a serialized {expected}, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: String,
    },
}

impl From<serde_json::Error> for ConvertError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_limit_and_kinds() {
        let depth = ConvertError::DepthExceeded { depth: 9, max: 4 };
        assert_eq!(depth.to_string(), "document nests 9 levels deep, limit is 4");

        let kind = ConvertError::KindMismatch {
            expected: "sequence",
            found: "dictionary".to_string(),
        };
        assert_eq!(
            kind.to_string(),
            "expected a serialized sequence, found dictionary"
        );
    }

    #[test]
    fn json_errors_keep_their_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConvertError::from(source);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid json: "));
    }
}
