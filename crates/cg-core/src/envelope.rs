//! Response envelope handling.
//!
//! The same logical list shows up as a bare array, under `data`, under
//! `students`, under `data.students`, and so on. `classify_list` names the
//! shape that was found; `extract_array` is the pure extractor built on it.

use crate::{CoreError, CoreResult};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Keys tried for list payloads when a DTO does not declare its own
pub const DEFAULT_LIST_KEYS: &[&str] = &["data", "items", "results"];

/// Keys tried to unwrap single-object payloads
pub const DEFAULT_ITEM_KEYS: &[&str] = &["data"];

/// Where a list was found inside a payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListShape<'v, 'k> {
    /// The payload itself is the array
    Bare(&'v [Value]),
    /// The array sits under a (possibly dotted) key path
    Keyed { key: &'k str, items: &'v [Value] },
    /// None of the candidate keys held an array
    Missing,
}

impl<'v> ListShape<'v, '_> {
    pub fn items(&self) -> &'v [Value] {
        match *self {
            ListShape::Bare(items) | ListShape::Keyed { items, .. } => items,
            ListShape::Missing => &[],
        }
    }
}

/// Follow a dot-separated key path (`data.students`).
pub fn lookup_path<'v>(payload: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .try_fold(payload, |value, segment| value.get(segment))
}

/// Inspect `keys` in priority order and report the first array found.
pub fn classify_list<'v, 'k>(payload: &'v Value, keys: &[&'k str]) -> ListShape<'v, 'k> {
    if let Value::Array(items) = payload {
        return ListShape::Bare(items);
    }

    keys.iter()
        .find_map(|key| match lookup_path(payload, key) {
            Some(Value::Array(items)) => Some(ListShape::Keyed { key: *key, items }),
            _ => None,
        })
        .unwrap_or(ListShape::Missing)
}

/// First array found under `keys`, or an empty vector.
pub fn extract_array(payload: &Value, keys: &[&str]) -> Vec<Value> {
    classify_list(payload, keys).items().to_vec()
}

/// First object found under `keys`, or the payload itself.
pub fn extract_object<'v>(payload: &'v Value, keys: &[&str]) -> &'v Value {
    keys.iter()
        .find_map(|key| lookup_path(payload, key).filter(|value| value.is_object()))
        .unwrap_or(payload)
}

/// Canonical decoding for a DTO from any of the envelopes the backend uses.
pub trait Decode: DeserializeOwned {
    /// Name used in decode errors
    const NAME: &'static str;
    /// Candidate key paths for list payloads, in priority order
    const LIST_KEYS: &'static [&'static str] = DEFAULT_LIST_KEYS;
    /// Candidate key paths wrapping a single object
    const ITEM_KEYS: &'static [&'static str] = DEFAULT_ITEM_KEYS;
    /// `(field, fallback)` pairs. The fallback key is read only when the
    /// field itself is absent or null, and is dropped either way.
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] = &[];

    /// Decode one object, unwrapping an envelope when present.
    #[track_caller]
    fn decode(payload: &Value) -> CoreResult<Self> {
        let inner = extract_object(payload, Self::ITEM_KEYS);
        if !inner.is_object() {
            return Err(CoreError::decode(
                Self::NAME,
                format!("expected an object, got {}", json_kind(inner)),
            ));
        }
        serde_json::from_value(apply_fallbacks(inner, Self::FIELD_FALLBACKS))
            .map_err(|e| CoreError::decode(Self::NAME, e.to_string()))
    }

    /// Decode a list. A payload with no recognized list is an empty list;
    /// an element that is not a valid object is a decode error.
    #[track_caller]
    fn decode_list(payload: &Value) -> CoreResult<Vec<Self>> {
        classify_list(payload, Self::LIST_KEYS)
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(apply_fallbacks(item, Self::FIELD_FALLBACKS))
                    .map_err(|e| CoreError::decode(Self::NAME, format!("item {index}: {e}")))
            })
            .collect()
    }
}

/// Copy of `object` with each fallback key folded into its field.
pub fn apply_fallbacks(object: &Value, fallbacks: &[(&str, &str)]) -> Value {
    let mut object = object.clone();
    if let Value::Object(fields) = &mut object {
        for (field, fallback) in fallbacks {
            let Some(alternate) = fields.remove(*fallback) else {
                continue;
            };
            if fields.get(*field).is_none_or(Value::is_null) {
                fields.insert((*field).to_string(), alternate);
            }
        }
    }
    object
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
