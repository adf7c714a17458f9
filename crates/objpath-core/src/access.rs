// Path-based access over serde_json::Value.
// - Read: `get_prop`, `get_prop_owned` (missing or null resolves to the default).
// - Write: `set_prop` (in place, creates intermediates), `set_prop_immutable` (on a copy).
// - Browse/edit: `list_children`, `remove_prop`.
// Mapping keys are segments verbatim; sequences take strict decimal indices.
use std::borrow::Cow;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::clone::clone_deep;
use crate::error::{PropError, Result};
use crate::path::{GetOptions, Path, SetOptions, is_numeric_segment, segment_index};

/// Most `null` fillers a single write appends to a sequence. An index further
/// past the end turns the sequence into a mapping, like a non-index key does.
pub const MAX_SEQUENCE_PADDING: usize = 1024;

/// Sets `data` at `path` inside `obj`, creating missing intermediate containers.
///
/// A `null` or absent intermediate becomes an empty sequence when
/// `numeric_path_as_array` is set and the segment is numeric, otherwise an
/// empty mapping. An empty path replaces `obj` entirely.
///
/// Meeting a scalar where a container is needed fails with
/// [`PropError::PathTraversal`]; containers created before that point are kept.
pub fn set_prop(path: &str, data: Value, obj: &mut Value, options: &SetOptions) -> Result<()> {
    let parsed = Path::parse(path, &options.separator);
    let Some((last, parents)) = parsed.split_last() else {
        *obj = data;
        return Ok(());
    };
    let mut cur = obj;
    for segment in parents {
        cur = descend_or_create(cur, segment, path, options)?;
    }
    let slot = slot_mut(cur, last).ok_or_else(|| traversal_error(path, last))?;
    *slot = data;
    Ok(())
}

/// Like [`set_prop`] but works on a deep copy and leaves `obj` untouched.
pub fn set_prop_immutable(
    path: &str,
    data: Value,
    obj: &Value,
    options: &SetOptions,
) -> Result<Value> {
    let mut copy = clone_deep(obj);
    set_prop(path, data, &mut copy, options)?;
    Ok(copy)
}

/// Follows `path` from `obj`. Returns `options.default_value` as soon as a step
/// is missing or `null`, or when the resolved value itself is `null`.
/// Stepping into a scalar counts as missing. An empty path resolves to `obj`.
///
/// Found values are borrowed from `obj`; the default is cloned out of `options`.
pub fn get_prop<'a>(path: &str, obj: &'a Value, options: &GetOptions) -> Option<Cow<'a, Value>> {
    let parsed = Path::parse(path, &options.separator);
    let fallback = || options.default_value.clone().map(Cow::Owned);
    let mut cur = obj;
    for segment in parsed.segments() {
        match child(cur, segment) {
            Some(next) if !next.is_null() => cur = next,
            _ => {
                trace!(path, segment = segment.as_str(), "get_prop: falling back to default");
                return fallback();
            }
        }
    }
    if cur.is_null() {
        fallback()
    } else {
        Some(Cow::Borrowed(cur))
    }
}

pub fn get_prop_owned(path: &str, obj: &Value, options: &GetOptions) -> Option<Value> {
    get_prop(path, obj, options).map(Cow::into_owned)
}

/// Removes and returns the value at `path`. Sequence elements after the removed
/// index shift down.
pub fn remove_prop(path: &str, obj: &mut Value, separator: &str) -> Result<Value> {
    let parsed = Path::parse(path, separator);
    let (last, parents) = parsed.split_last().ok_or(PropError::EmptyPath)?;
    let mut cur = obj;
    for segment in parents {
        cur = child_mut(cur, segment).ok_or_else(|| not_found(path))?;
    }
    let removed = match cur {
        Value::Object(map) => map.remove(last.as_str()),
        Value::Array(items) => match segment_index(last) {
            Some(idx) if idx < items.len() => Some(items.remove(idx)),
            _ => None,
        },
        _ => None,
    };
    let removed = removed.ok_or_else(|| not_found(path))?;
    debug!(path, "removed value");
    Ok(removed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Object,
    Array,
}

impl ValueKind {
    pub fn of(v: &Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildInfo {
    pub key_or_index: String,
    pub kind: ValueKind,
    /// Element count for containers.
    pub len: Option<usize>,
}

impl ChildInfo {
    fn new(key_or_index: String, v: &Value) -> Self {
        let len = match v {
            Value::Array(a) => Some(a.len()),
            Value::Object(m) => Some(m.len()),
            _ => None,
        };
        Self { key_or_index, kind: ValueKind::of(v), len }
    }
}

/// Lists the direct children of the container at `path`. Scalars have none.
pub fn list_children(path: &str, obj: &Value, separator: &str) -> Result<Vec<ChildInfo>> {
    let parsed = Path::parse(path, separator);
    let mut node = obj;
    for segment in parsed.segments() {
        node = child(node, segment).ok_or_else(|| not_found(path))?;
    }
    let out = match node {
        Value::Object(map) => map.iter().map(|(k, v)| ChildInfo::new(k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| ChildInfo::new(i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    };
    Ok(out)
}

fn child<'a>(cur: &'a Value, segment: &str) -> Option<&'a Value> {
    match cur {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment_index(segment)?),
        _ => None,
    }
}

fn child_mut<'a>(cur: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match cur {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => items.get_mut(segment_index(segment)?),
        _ => None,
    }
}

/// Index `segment` addresses in `items`, if it can stay a sequence write.
fn sequence_index(items: &[Value], segment: &str) -> Option<usize> {
    let idx = segment_index(segment)?;
    (idx <= items.len().saturating_add(MAX_SEQUENCE_PADDING)).then_some(idx)
}

/// Returns the writable slot for `segment`, inserting `null` where it is absent.
/// A sequence padded past its end gets `null` fillers; a sequence addressed by
/// a non-index key (or an index beyond `MAX_SEQUENCE_PADDING`) is converted
/// into a mapping keyed by element index.
fn slot_mut<'a>(cur: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    if let Value::Array(items) = cur
        && sequence_index(items, segment).is_none()
    {
        let items = std::mem::take(items);
        debug!(segment, len = items.len(), "converting sequence to mapping");
        *cur = Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect::<Map<String, Value>>(),
        );
    }
    match cur {
        Value::Object(map) => Some(map.entry(segment).or_insert(Value::Null)),
        Value::Array(items) => {
            let idx = sequence_index(items, segment)?;
            if idx >= items.len() {
                items.resize(idx.checked_add(1)?, Value::Null);
            }
            items.get_mut(idx)
        }
        _ => None,
    }
}

fn descend_or_create<'a>(
    cur: &'a mut Value,
    segment: &str,
    path: &str,
    options: &SetOptions,
) -> Result<&'a mut Value> {
    let slot = slot_mut(cur, segment).ok_or_else(|| traversal_error(path, segment))?;
    if slot.is_null() {
        let as_array = options.numeric_path_as_array && is_numeric_segment(segment);
        debug!(path, segment, as_array, "creating intermediate container");
        *slot = if as_array {
            Value::Array(Vec::new())
        } else {
            Value::Object(Map::new())
        };
    }
    if matches!(slot, Value::Object(_) | Value::Array(_)) {
        Ok(slot)
    } else {
        Err(traversal_error(path, segment))
    }
}

fn traversal_error(path: &str, segment: &str) -> PropError {
    PropError::PathTraversal {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

fn not_found(path: &str) -> PropError {
    PropError::NotFound {
        path: path.to_string(),
    }
}
