//! Conversion options, loadable from TOML.
//!
//! ```toml
//! pretty = true
//! max_depth = 16
//! ```
//!
//! Every field is optional; missing ones take their defaults. Unknown
//! fields are rejected so that typos surface as errors.

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Indent rendered JSON.
    pub pretty: bool,
    /// Deepest nesting accepted when reading a serialized structure.
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConvertOptions {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        parse_toml(text, "<string>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConvertError::ReadFile {
            path: display_path(path),
            source,
        })?;
        parse_toml(&text, &display_path(path))
    }
}

fn parse_toml(text: &str, origin: &str) -> Result<ConvertOptions> {
    toml::from_str(text).map_err(|source| ConvertError::ParseToml {
        origin: origin.to_string(),
        source,
    })
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
