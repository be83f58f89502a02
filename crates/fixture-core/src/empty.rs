//! Blank documents from a template.

use crate::policy::EmptyScalars;
use serde_json::{Map, Value};

/// Build an "empty" copy of `template` with the same mapping structure.
///
/// - objects keep every key, in order, with each value emptied recursively
/// - arrays become `[]`, whatever they held
/// - strings become `""`
/// - numbers and booleans follow `scalars` (`null`, or `0` / `false`)
/// - `null` stays `null`
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use fixture_core::{empty_like, EmptyScalars};
///
/// let template = json!({"name": "Alice", "age": 30, "tags": ["a"], "vitals": {"ok": true}});
/// let blank = empty_like(&template, EmptyScalars::Null);
/// assert_eq!(blank, json!({"name": "", "age": null, "tags": [], "vitals": {"ok": null}}));
/// ```
pub fn empty_like(template: &Value, scalars: EmptyScalars) -> Value {
    match template {
        Value::Object(map) => {
            let emptied: Map<String, Value> = map
                .iter()
                .map(|(key, child)| (key.clone(), empty_like(child, scalars)))
                .collect();
            Value::Object(emptied)
        }
        Value::Array(_) => Value::Array(Vec::new()),
        Value::String(_) => Value::String(String::new()),
        Value::Number(_) => match scalars {
            EmptyScalars::Null => Value::Null,
            EmptyScalars::Zero => Value::from(0),
        },
        Value::Bool(_) => match scalars {
            EmptyScalars::Null => Value::Null,
            EmptyScalars::Zero => Value::Bool(false),
        },
        Value::Null => Value::Null,
    }
}

