//! Strip empty values from a fixture before export.
//!
//! Pruning works bottom-up: children are pruned first, and a container that
//! ends up empty is then judged like any other empty value by its parent.
//! What counts as empty is set by [`PrunePolicy`].

use crate::policy::PrunePolicy;
use serde_json::{Map, Value};

/// Return a copy of `value` with empty leaves removed at every depth.
///
/// An object entry is dropped when its pruned value is `null`, `""`, one of
/// the policy's null-like strings, `{}`, or `[]` (unless
/// [`PrunePolicy::keep_empty_lists`] is set). An array item is dropped on the
/// same test, except that empty lists are always dropped from arrays.
/// Top-level scalars come back unchanged; `0` and `false` are never empty.
///
/// Pruning is idempotent: pruning an already-pruned value is a no-op.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use fixture_core::{prune_empty, PrunePolicy};
///
/// let doc = json!({"a": "", "b": [1, null, ""], "c": {"d": null}, "e": []});
/// assert_eq!(
///     prune_empty(&doc, &PrunePolicy::lenient()),
///     json!({"b": [1], "e": []})
/// );
/// assert_eq!(prune_empty(&doc, &PrunePolicy::strict()), json!({"b": [1]}));
/// ```
pub fn prune_empty(value: &Value, policy: &PrunePolicy) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_object(map, policy)),
        Value::Array(items) => Value::Array(prune_array(items, policy)),
        other => other.clone(),
    }
}

fn prune_object(map: &Map<String, Value>, policy: &PrunePolicy) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, child) in map {
        let pruned = prune_empty(child, policy);
        let drop = match &pruned {
            Value::Array(items) => items.is_empty() && !policy.keep_empty_lists,
            other => is_empty_leaf(other, policy),
        };
        if !drop {
            result.insert(key.clone(), pruned);
        }
    }
    result
}

fn prune_array(items: &[Value], policy: &PrunePolicy) -> Vec<Value> {
    items
        .iter()
        .map(|item| prune_empty(item, policy))
        .filter(|pruned| match pruned {
            Value::Array(inner) => !inner.is_empty(),
            other => !is_empty_leaf(other, policy),
        })
        .collect()
}

/// Emptiness test shared by object entries and array items (arrays aside).
fn is_empty_leaf(value: &Value, policy: &PrunePolicy) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty() || policy.is_null_like(s),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// `true` for `null`, `""`, `{}` and `[]`.
///
/// Used to skip documents that carry nothing once pruned.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
