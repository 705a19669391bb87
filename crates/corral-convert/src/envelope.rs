//! Tagged, round-trippable serialization.
//!
//! A structure is written as an envelope naming its kind and listing its
//! entries as `[key, value]` pairs:
//!
//! ```text
//! {"kind":"dictionary","entries":[["a",1],["b",2]]}
//! ```
//!
//! Reading checks, in order: nesting depth, then kind, then the entries
//! themselves. The entries are handed to the structure's own normalization,
//! so a sequence read from non-contiguous keys comes back renumbered and a
//! unique list drops repeated values.

use crate::error::{ConvertError, Result};
use crate::options::ConvertOptions;
use corral_core::{Dictionary, Sequence, Storage, Structure, UniqueList};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Serialize)]
struct EnvelopeRef<'a, K, V> {
    kind: &'static str,
    entries: &'a Storage<K, V>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "K: Deserialize<'de> + Clone + Eq + Hash, V: Deserialize<'de>"))]
struct Envelope<K, V> {
    entries: Storage<K, V>,
}

/// Nesting depth of a JSON document. Scalars are depth 0; each array or
/// object adds one level above its deepest child.
pub fn depth(value: &Value) -> usize {
    let children = match value {
        Value::Array(items) => items.iter().map(depth).max(),
        Value::Object(map) => map.values().map(depth).max(),
        _ => return 0,
    };
    1 + children.unwrap_or(0)
}

pub trait SerializableConvertable: Structure {
    /// Tag written to and expected in the envelope's `kind` field.
    const KIND: &'static str;

    fn to_serialized(&self) -> Result<String>
    where
        Self::Key: Serialize,
        Self::Value: Serialize,
    {
        let envelope = EnvelopeRef {
            kind: Self::KIND,
            entries: self.storage(),
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Read an envelope, rejecting documents nested deeper than `max_depth`.
    fn from_serialized(text: &str, max_depth: usize) -> Result<Self>
    where
        Self::Key: DeserializeOwned,
        Self::Value: DeserializeOwned,
    {
        let document: Value = serde_json::from_str(text)?;

        let found_depth = depth(&document);
        if found_depth > max_depth {
            tracing::debug!(
                kind = Self::KIND,
                depth = found_depth,
                max_depth,
                "rejected serialized input: too deep"
            );
            return Err(ConvertError::DepthExceeded {
                depth: found_depth,
                max: max_depth,
            });
        }

        let found = document.get("kind").and_then(Value::as_str);
        if found != Some(Self::KIND) {
            let found = found.unwrap_or("no kind").to_string();
            tracing::debug!(expected = Self::KIND, %found, "rejected serialized input: kind");
            return Err(ConvertError::KindMismatch {
                expected: Self::KIND,
                found,
            });
        }

        let envelope: Envelope<Self::Key, Self::Value> = serde_json::from_value(document)?;
        Ok(Self::from_storage(envelope.entries))
    }

    /// [`from_serialized`](Self::from_serialized) with the limit taken
    /// from `options`.
    fn from_serialized_with(text: &str, options: &ConvertOptions) -> Result<Self>
    where
        Self::Key: DeserializeOwned,
        Self::Value: DeserializeOwned,
    {
        Self::from_serialized(text, options.max_depth)
    }
}

impl<V: Clone> SerializableConvertable for Sequence<V> {
    const KIND: &'static str = "sequence";
}

impl<V: Clone + PartialEq> SerializableConvertable for UniqueList<V> {
    const KIND: &'static str = "unique_list";
}

impl<K, V> SerializableConvertable for Dictionary<K, V>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone,
{
    const KIND: &'static str = "dictionary";
}

#[cfg(test)]
mod tests {
    use super::*;
    use corral_core::{RandomAccess, SequentialAccess};

    #[test]
    fn envelope_layout() {
        let dict = Dictionary::from([("b", 2), ("a", 1)]);
        insta::assert_snapshot!(
            dict.to_serialized().unwrap(),
            @r#"{"kind":"dictionary","entries":[["b",2],["a",1]]}"#
        );

        let mut seq = Sequence::from([7, 8]);
        seq.prepend([6]);
        insta::assert_snapshot!(
            seq.to_serialized().unwrap(),
            @r#"{"kind":"sequence","entries":[[0,6],[1,7],[2,8]]}"#
        );
    }

    #[test]
    fn dictionary_round_trip_keeps_order_and_keys() {
        let mut dict: Dictionary<u32, String> = Dictionary::new();
        dict.set("ninety".to_string(), 90).set("three".to_string(), 3);
        let text = dict.to_serialized().unwrap();
        let back = Dictionary::<u32, String>::from_serialized(&text, 8).unwrap();
        assert_eq!(back, dict);
        assert_eq!(back.keys().to_vec(), [90, 3]);
    }

    #[test]
    fn reading_normalizes_per_kind() {
        let text = r#"{"kind":"sequence","entries":[[4,"x"],[9,"y"]]}"#;
        let seq = Sequence::<String>::from_serialized(text, 8).unwrap();
        assert_eq!(seq.keys().to_vec(), [0, 1]);
        assert_eq!(seq.to_vec(), ["x", "y"]);

        let text = r#"{"kind":"unique_list","entries":[[0,1],[1,2],[2,1]]}"#;
        let list = UniqueList::<i32>::from_serialized(text, 8).unwrap();
        assert_eq!(list.to_vec(), [1, 2]);
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let text = Sequence::from([1]).to_serialized().unwrap();
        let err = UniqueList::<i32>::from_serialized(&text, 8).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::KindMismatch {
                expected: "unique_list",
                ref found,
            } if found == "sequence"
        ));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let text = Dictionary::from([("a", vec![vec![1]])]).to_serialized().unwrap();
        assert_eq!(depth(&serde_json::from_str(&text).unwrap()), 5);

        let err = Dictionary::<String, Vec<Vec<i32>>>::from_serialized(&text, 4).unwrap_err();
        assert!(matches!(err, ConvertError::DepthExceeded { depth: 5, max: 4 }));

        let options = ConvertOptions {
            max_depth: 5,
            ..ConvertOptions::default()
        };
        let back = Dictionary::<String, Vec<Vec<i32>>>::from_serialized_with(&text, &options)
            .unwrap();
        assert_eq!(back.get(&"a".to_string()), Some(&vec![vec![1]]));
    }

    #[test]
    fn malformed_or_untagged_input_is_rejected() {
        let err = Sequence::<i32>::from_serialized("{\"kind\":", 8).unwrap_err();
        assert!(matches!(err, ConvertError::Json { .. }));

        let err = Sequence::<i32>::from_serialized(r#"{"kind":"sequence"}"#, 8).unwrap_err();
        assert!(matches!(err, ConvertError::Json { .. }));

        let err = Sequence::<i32>::from_serialized(r#"{"entries":[]}"#, 8).unwrap_err();
        assert_eq!(err.to_string(), "expected a serialized sequence, found no kind");
    }
}
