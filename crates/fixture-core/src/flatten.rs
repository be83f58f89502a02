//! Dotted-key flattening for form-style editing.
//!
//! A nested document is flattened into one entry per leaf so a form can show
//! a field per path (`lab_results.hemoglobin`). Lists are not expanded; each
//! list becomes a single entry holding its compact JSON text.
//!
//! Flattening is not a faithful encoding. Going back through [`unflatten`]
//! re-types string leaves by their shape, so `"42"`, `"1.5"`, `"TRUE"` and
//! `"[1]"` come back as a number, a number, a boolean and a list. Empty nested
//! objects produce no entries and vanish. Keys that contain the separator
//! re-nest on the way back.
//!
//! Two keys that flatten to the same path (`{"a.b": 1, "a": {"b": 2}}`) are
//! reported as [`FixtureError::PathConflict`], the same as [`unflatten`] does
//! for its mirror case.

use crate::error::{kind_name, FixtureError, Result};
use serde_json::{Map, Number, Value};

/// Flatten a JSON object into `path -> leaf` entries.
///
/// Keys of nested objects are joined with `separator`. Arrays are emitted as
/// their compact JSON text; other leaves are emitted unchanged.
///
/// # Errors
///
/// - [`FixtureError::NotAnObject`] if `value` is not an object
/// - [`FixtureError::InvalidSeparator`] if `separator` is empty
/// - [`FixtureError::PathConflict`] if two keys flatten to the same path
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use fixture_core::flatten;
///
/// let doc = json!({"id": "P1", "labs": {"hdl": 1.2}, "meds": ["a"]});
/// let flat = flatten(&doc, ".").unwrap();
/// assert_eq!(flat["id"], json!("P1"));
/// assert_eq!(flat["labs.hdl"], json!(1.2));
/// assert_eq!(flat["meds"], json!("[\"a\"]"));
/// ```
pub fn flatten(value: &Value, separator: &str) -> Result<Map<String, Value>> {
    if separator.is_empty() {
        return Err(FixtureError::InvalidSeparator);
    }
    let map = value
        .as_object()
        .ok_or_else(|| FixtureError::NotAnObject(kind_name(value)))?;

    let mut out = Map::new();
    flatten_into(map, None, separator, &mut out)?;
    Ok(out)
}

fn flatten_into(
    map: &Map<String, Value>,
    prefix: Option<&str>,
    separator: &str,
    out: &mut Map<String, Value>,
) -> Result<()> {
    for (key, child) in map {
        // An empty key still counts as a level, so `{"": {"b": 1}}` gives ".b".
        let path = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, separator, key),
            None => key.clone(),
        };
        match child {
            Value::Object(inner) => flatten_into(inner, Some(&path), separator, out)?,
            _ if out.contains_key(&path) => {
                return Err(FixtureError::PathConflict { path });
            }
            Value::Array(_) => {
                let text = serde_json::to_string(child)
                    .map_err(|e| FixtureError::Serialize(e.to_string()))?;
                out.insert(path, Value::String(text));
            }
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
    Ok(())
}

/// Rebuild a nested object from `path -> leaf` entries.
///
/// String leaves are re-typed with [`coerce_scalar`]; other leaves are used
/// as-is. Intermediate objects are created in first-seen order.
///
/// # Errors
///
/// - [`FixtureError::InvalidSeparator`] if `separator` is empty
/// - [`FixtureError::PathConflict`] if one key treats a path as a leaf while
///   another descends through it (`"a" = 1` together with `"a.b" = 2`)
///
/// # Examples
///
/// ```
/// use serde_json::{json, Map};
/// use fixture_core::unflatten;
///
/// let mut flat = Map::new();
/// flat.insert("labs.hdl".into(), json!("1.2"));
/// flat.insert("smoker".into(), json!("False"));
/// assert_eq!(
///     unflatten(&flat, ".").unwrap(),
///     json!({"labs": {"hdl": 1.2}, "smoker": false})
/// );
/// ```
pub fn unflatten(flat: &Map<String, Value>, separator: &str) -> Result<Value> {
    if separator.is_empty() {
        return Err(FixtureError::InvalidSeparator);
    }

    let mut root = Map::new();
    for (key, raw) in flat {
        let leaf = match raw {
            Value::String(s) => coerce_scalar(s),
            other => other.clone(),
        };
        insert_path(&mut root, key, separator, leaf)?;
    }
    Ok(Value::Object(root))
}

/// Parse `value` as a flat map, then [`unflatten`] it.
///
/// # Errors
///
/// [`FixtureError::NotAnObject`] if `value` is not an object, plus anything
/// [`unflatten`] reports.
pub fn unflatten_value(value: &Value, separator: &str) -> Result<Value> {
    let flat = value
        .as_object()
        .ok_or_else(|| FixtureError::NotAnObject(kind_name(value)))?;
    unflatten(flat, separator)
}

fn insert_path(
    root: &mut Map<String, Value>,
    key: &str,
    separator: &str,
    leaf: Value,
) -> Result<()> {
    let parts: Vec<&str> = key.split(separator).collect();
    let Some((last, parents)) = parts.split_last() else {
        return Ok(());
    };

    let mut node = root;
    for (depth, part) in parents.iter().enumerate() {
        node = match node
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
        {
            Value::Object(inner) => inner,
            _ => {
                return Err(FixtureError::PathConflict {
                    path: parts[..=depth].join(separator),
                })
            }
        };
    }

    if let Some(Value::Object(_)) = node.get(*last) {
        return Err(FixtureError::PathConflict {
            path: key.to_string(),
        });
    }
    node.insert(last.to_string(), leaf);
    Ok(())
}

/// Guess the JSON type of a form field's text.
///
/// Checked in order:
///
/// 1. `[...]` is parsed as JSON (left as text if that fails)
/// 2. all ASCII digits becomes an integer
/// 3. digits with exactly one `.` becomes a float
/// 4. `true` / `false` in any case becomes a boolean
/// 5. anything else stays a string
///
/// Negative numbers and exponents are not recognised and stay strings.
pub fn coerce_scalar(text: &str) -> Value {
    if text.starts_with('[') && text.ends_with(']') {
        return serde_json::from_str::<Value>(text)
            .unwrap_or_else(|_| Value::String(text.to_string()));
    }

    if is_ascii_digits(text) {
        return match text.parse::<u64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(text.to_string()),
        };
    }

    if text.matches('.').count() == 1 && is_ascii_digits(&text.replacen('.', "", 1)) {
        if let Some(n) = text.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
        return Value::String(text.to_string());
    }

    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    Value::String(text.to_string())
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
