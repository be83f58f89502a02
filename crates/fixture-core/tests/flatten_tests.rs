/// Tests for dotted-key flattening, unflattening and scalar re-typing.
use fixture_core::{coerce_scalar, flatten, unflatten, unflatten_value, FixtureError};
use serde_json::{json, Map, Value};

fn flat(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ============================================================================
// flatten
// ============================================================================

#[test]
fn flatten_joins_nested_keys() {
    let doc = json!({"id": "P1", "lab_results": {"hemoglobin": 13.5, "cbc": {"wbc": 6}}});
    let out = flatten(&doc, ".").unwrap();
    assert_eq!(
        out,
        flat(&[
            ("id", json!("P1")),
            ("lab_results.hemoglobin", json!(13.5)),
            ("lab_results.cbc.wbc", json!(6)),
        ])
    );
}

#[test]
fn flatten_keeps_leaves_unstringified() {
    let doc = json!({"n": 1, "b": true, "z": null, "s": "x"});
    let out = flatten(&doc, ".").unwrap();
    assert_eq!(out["n"], json!(1));
    assert_eq!(out["b"], json!(true));
    assert_eq!(out["z"], json!(null));
    assert_eq!(out["s"], json!("x"));
}

#[test]
fn flatten_serializes_lists_to_json_text() {
    let doc = json!({"meds": ["aspirin", "statin"], "empty": [], "rows": [{"a": 1}]});
    let out = flatten(&doc, ".").unwrap();
    assert_eq!(out["meds"], json!(r#"["aspirin","statin"]"#));
    assert_eq!(out["empty"], json!("[]"));
    assert_eq!(out["rows"], json!(r#"[{"a":1}]"#));
}

#[test]
fn flatten_preserves_key_order() {
    let doc = json!({"z": 1, "m": {"b": 2, "a": 3}, "a": 4});
    let out = flatten(&doc, ".").unwrap();
    let keys: Vec<&String> = out.keys().collect();
    assert_eq!(keys, ["z", "m.b", "m.a", "a"]);
}

#[test]
fn flatten_custom_separator() {
    let doc = json!({"a": {"b": 1}});
    let out = flatten(&doc, "__").unwrap();
    assert_eq!(out, flat(&[("a__b", json!(1))]));
}

#[test]
fn flatten_drops_empty_nested_objects() {
    let doc = json!({"a": {}, "b": 1});
    let out = flatten(&doc, ".").unwrap();
    assert_eq!(out, flat(&[("b", json!(1))]));
}

#[test]
fn flatten_keeps_empty_key_as_a_level() {
    let doc = json!({"": {"b": 1}, "c": {"": 2}});
    let out = flatten(&doc, ".").unwrap();
    assert_eq!(out, flat(&[(".b", json!(1)), ("c.", json!(2))]));
}

#[test]
fn flatten_reports_colliding_paths() {
    for doc in [
        json!({"a.b": 1, "a": {"b": 2}}),
        json!({"a": {"b": 2}, "a.b": 1}),
    ] {
        match flatten(&doc, ".").unwrap_err() {
            FixtureError::PathConflict { path } => assert_eq!(path, "a.b"),
            other => panic!("expected PathConflict for {doc}, got {other}"),
        }
    }
}

#[test]
fn flatten_rejects_non_objects() {
    for value in [json!([1, 2]), json!("x"), json!(null), json!(3)] {
        let err = flatten(&value, ".").unwrap_err();
        assert!(
            matches!(err, FixtureError::NotAnObject(_)),
            "unexpected error for {value}: {err}"
        );
    }
}

#[test]
fn flatten_rejects_empty_separator() {
    let err = flatten(&json!({"a": 1}), "").unwrap_err();
    assert!(matches!(err, FixtureError::InvalidSeparator));
}

// ============================================================================
// unflatten
// ============================================================================

#[test]
fn unflatten_builds_nested_objects() {
    let input = flat(&[
        ("id", json!("P1")),
        ("lab_results.hemoglobin", json!("13.5")),
        ("lab_results.platelets", json!("250")),
    ]);
    assert_eq!(
        unflatten(&input, ".").unwrap(),
        json!({"id": "P1", "lab_results": {"hemoglobin": 13.5, "platelets": 250}})
    );
}

#[test]
fn unflatten_keeps_non_string_leaves() {
    let input = flat(&[("a", json!(1)), ("b.c", json!(false)), ("d", json!(null))]);
    assert_eq!(
        unflatten(&input, ".").unwrap(),
        json!({"a": 1, "b": {"c": false}, "d": null})
    );
}

#[test]
fn unflatten_parses_list_text() {
    let input = flat(&[("meds", json!(r#"["aspirin", "statin"]"#)), ("none", json!("[]"))]);
    assert_eq!(
        unflatten(&input, ".").unwrap(),
        json!({"meds": ["aspirin", "statin"], "none": []})
    );
}

#[test]
fn unflatten_reuses_intermediate_objects() {
    let input = flat(&[("a.b", json!("x")), ("c", json!("y")), ("a.d", json!("z"))]);
    let out = unflatten(&input, ".").unwrap();
    assert_eq!(out, json!({"a": {"b": "x", "d": "z"}, "c": "y"}));
    let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "c"]);
}

#[test]
fn unflatten_leaf_then_descend_conflicts() {
    let input = flat(&[("a", json!(1)), ("a.b", json!(2))]);
    match unflatten(&input, ".").unwrap_err() {
        FixtureError::PathConflict { path } => assert_eq!(path, "a"),
        other => panic!("expected PathConflict, got {other}"),
    }
}

#[test]
fn unflatten_descend_then_leaf_conflicts() {
    let input = flat(&[("a.b.c", json!(1)), ("a.b", json!(2))]);
    match unflatten(&input, ".").unwrap_err() {
        FixtureError::PathConflict { path } => assert_eq!(path, "a.b"),
        other => panic!("expected PathConflict, got {other}"),
    }
}

#[test]
fn unflatten_value_requires_object() {
    let err = unflatten_value(&json!(["a"]), ".").unwrap_err();
    assert!(matches!(err, FixtureError::NotAnObject(_)));
    assert_eq!(
        unflatten_value(&json!({"a.b": "1"}), ".").unwrap(),
        json!({"a": {"b": 1}})
    );
}

#[test]
fn unflatten_rejects_empty_separator() {
    let err = unflatten(&Map::new(), "").unwrap_err();
    assert!(matches!(err, FixtureError::InvalidSeparator));
}

// ============================================================================
// coerce_scalar
// ============================================================================

#[test]
fn coerce_digits_to_integer() {
    assert_eq!(coerce_scalar("42"), json!(42));
    assert_eq!(coerce_scalar("007"), json!(7));
}

#[test]
fn coerce_out_of_range_digits_stay_text() {
    let huge = "99999999999999999999999";
    assert_eq!(coerce_scalar(huge), json!(huge));
}

#[test]
fn coerce_single_dot_to_float() {
    assert_eq!(coerce_scalar("12.34"), json!(12.34));
    assert_eq!(coerce_scalar(".5"), json!(0.5));
    assert_eq!(coerce_scalar("5."), json!(5.0));
}

#[test]
fn coerce_leaves_other_numeric_shapes_as_text() {
    for text in ["-5", "1.2.3", "1e3", "+1", " 4", "."] {
        assert_eq!(coerce_scalar(text), json!(text), "input {text:?}");
    }
}

#[test]
fn coerce_booleans_ignoring_case() {
    assert_eq!(coerce_scalar("true"), json!(true));
    assert_eq!(coerce_scalar("FALSE"), json!(false));
    assert_eq!(coerce_scalar("True"), json!(true));
    assert_eq!(coerce_scalar("yes"), json!("yes"));
}

#[test]
fn coerce_bracketed_text() {
    assert_eq!(coerce_scalar("[1, 2]"), json!([1, 2]));
    assert_eq!(coerce_scalar("[not json]"), json!("[not json]"));
}

#[test]
fn coerce_plain_text_and_empty() {
    assert_eq!(coerce_scalar("hello"), json!("hello"));
    assert_eq!(coerce_scalar(""), json!(""));
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn roundtrip_scalar_document() {
    let doc = json!({
        "patient_id": "P1",
        "age": 42,
        "bmi": 23.4,
        "smoker": false,
        "lab_results": {"hemoglobin": 13.5, "notes": "fasting"}
    });
    let back = unflatten(&flatten(&doc, ".").unwrap(), ".").unwrap();
    assert_eq!(back, doc);
}

#[test]
fn roundtrip_lists_through_text() {
    let doc = json!({"meds": ["a", "b"], "history": []});
    let back = unflatten(&flatten(&doc, ".").unwrap(), ".").unwrap();
    assert_eq!(back, doc);
}

#[test]
fn roundtrip_is_lossy_for_number_like_strings() {
    let doc = json!({"zip": "02139", "code": "1.5", "flag": "true", "tag": "[x]"});
    let back = unflatten(&flatten(&doc, ".").unwrap(), ".").unwrap();
    assert_ne!(back, doc);
    assert_eq!(back, json!({"zip": 2139, "code": 1.5, "flag": true, "tag": "[x]"}));
}

#[test]
fn roundtrip_is_lossy_for_empty_objects_and_separator_keys() {
    let doc = json!({"empty": {}, "a.b": 1});
    let back = unflatten(&flatten(&doc, ".").unwrap(), ".").unwrap();
    assert_eq!(back, json!({"a": {"b": 1}}));
}
