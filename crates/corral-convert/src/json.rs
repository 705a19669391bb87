//! JSON rendering.

use crate::error::Result;
use crate::options::ConvertOptions;
use corral_core::{Dictionary, Sequence, UniqueList};
use serde::Serialize;

/// Render a structure as JSON.
///
/// Index-keyed structures become arrays and keyed structures become
/// objects, both in storage order. Object keys must serialize as strings
/// or integers.
pub trait JsonConvertable: Serialize {
    fn to_json(&self) -> Result<String> {
        self.to_json_with(&ConvertOptions::default())
    }

    fn to_json_with(&self, options: &ConvertOptions) -> Result<String> {
        let text = if options.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}

impl<V: Serialize> JsonConvertable for Sequence<V> {}
impl<V: Serialize> JsonConvertable for UniqueList<V> {}
impl<K: Serialize, V: Serialize> JsonConvertable for Dictionary<K, V> {}
