//! # Corral Convert
//!
//! Conversions out of (and back into) Corral structures:
//!
//! ```text
//! ArrayConvertable         ← Vec of values, or of (key, value) pairs
//! JsonConvertable          ← JSON array / object, compact or pretty
//! SerializableConvertable  ← tagged envelope that round-trips kind and keys
//! ConvertOptions           ← TOML-loadable rendering and reading limits
//! ```

pub mod array;
pub mod envelope;
pub mod error;
pub mod json;
pub mod options;

pub use array::ArrayConvertable;
pub use envelope::{SerializableConvertable, depth};
pub use error::{ConvertError, Result};
pub use json::JsonConvertable;
pub use options::{ConvertOptions, DEFAULT_MAX_DEPTH};
