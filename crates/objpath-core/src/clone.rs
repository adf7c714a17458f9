use serde::Serialize;
use serde_json::Value;

use crate::error::{PropError, Result};

/// Structural deep copy. Every nested container in the result is freshly
/// allocated, so mutating the copy never reaches the source.
pub fn clone_deep(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(clone_deep).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), clone_deep(v)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Converts any serializable data into plain JSON data. Kinds that have no
/// plain representation (e.g. maps keyed by non-strings) are rejected.
pub fn to_plain<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(PropError::Serialization)
}
