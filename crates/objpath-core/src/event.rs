// Name/value extraction from form input events.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PropError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTarget {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub target: EventTarget,
}

impl InputEvent {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            target: EventTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }
}

/// `{ target.name: target.value }`
pub fn map_input_event_data(event: &InputEvent) -> Map<String, Value> {
    let mut out = Map::with_capacity(1);
    out.insert(event.target.name.clone(), event.target.value.clone());
    out
}

/// Same as [`map_input_event_data`] for untyped event JSON.
pub fn map_input_event_value(event: &Value) -> Result<Map<String, Value>> {
    let target = event
        .get("target")
        .and_then(Value::as_object)
        .ok_or(PropError::InvalidEventShape { missing: "target" })?;
    let name = target
        .get("name")
        .and_then(Value::as_str)
        .ok_or(PropError::InvalidEventShape { missing: "target.name" })?;
    let value = target
        .get("value")
        .ok_or(PropError::InvalidEventShape { missing: "target.value" })?;
    let mut out = Map::with_capacity(1);
    out.insert(name.to_string(), value.clone());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_typed_event() {
        let ev = InputEvent::new("email", "a@b.com");
        assert_eq!(Value::Object(map_input_event_data(&ev)), json!({"email": "a@b.com"}));
    }

    #[test]
    fn maps_untyped_event() {
        let ev = json!({"target": {"name": "agree", "value": true, "id": "x"}, "type": "change"});
        assert_eq!(Value::Object(map_input_event_value(&ev).unwrap()), json!({"agree": true}));
    }

    #[test]
    fn null_value_is_kept() {
        let ev = json!({"target": {"name": "n", "value": null}});
        assert_eq!(Value::Object(map_input_event_value(&ev).unwrap()), json!({"n": null}));
    }

    #[test]
    fn rejects_malformed_events() {
        let cases = [
            (json!({}), "target"),
            (json!({"target": 1}), "target"),
            (json!({"target": {"value": 1}}), "target.name"),
            (json!({"target": {"name": 5, "value": 1}}), "target.name"),
            (json!({"target": {"name": "a"}}), "target.value"),
        ];
        for (ev, want) in cases {
            match map_input_event_value(&ev) {
                Err(PropError::InvalidEventShape { missing }) => assert_eq!(missing, want),
                other => panic!("unexpected {other:?} for {ev}"),
            }
        }
    }

    #[test]
    fn typed_event_deserializes() {
        let ev: InputEvent =
            serde_json::from_value(json!({"target": {"name": "q", "value": [1]}})).unwrap();
        assert_eq!(ev, InputEvent::new("q", json!([1])));
    }
}
