//! WASM bindings for fixture-core.
//!
//! Exposes the shape transformations to a browser-side fixture editor via
//! `wasm-bindgen`. Documents cross the boundary as JSON text and results come
//! back as JSON text indented by two spaces, ready to drop into a textarea.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p fixture-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/fixture-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/fixture_wasm.wasm
//! ```

use fixture_core::{EmptyScalars, FixtureError, PrunePolicy, DEFAULT_SEPARATOR};
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn to_js(err: FixtureError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn render(value: &Value) -> Result<String, JsValue> {
    fixture_core::to_pretty(value).map_err(to_js)
}

fn separator_or_default(separator: Option<String>) -> String {
    separator
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string())
}

/// Blank document shaped like the template in `json`.
///
/// With `zero_scalars`, numbers become `0` and booleans `false` instead of
/// `null`. Throws if `json` is not valid JSON.
#[wasm_bindgen(js_name = "emptyLike")]
pub fn empty_like(json: &str, zero_scalars: bool) -> Result<String, JsValue> {
    let template = fixture_core::parse_document(json).map_err(to_js)?;
    let scalars = if zero_scalars {
        EmptyScalars::Zero
    } else {
        EmptyScalars::Null
    };
    render(&fixture_core::empty_like(&template, scalars))
}

/// The built-in health score template, already blank.
#[wasm_bindgen(js_name = "healthScoreTemplate")]
pub fn health_score_template() -> Result<String, JsValue> {
    render(&fixture_core::health_score_template())
}

/// Strip empty values from the document in `json`.
///
/// `strict` drops empty lists and the strings `"null"` / `"None"` as well.
#[wasm_bindgen]
pub fn prune(json: &str, strict: bool) -> Result<String, JsValue> {
    let document = fixture_core::parse_document(json).map_err(to_js)?;
    let policy = if strict {
        PrunePolicy::strict()
    } else {
        PrunePolicy::lenient()
    };
    render(&fixture_core::prune_empty(&document, &policy))
}

/// Flatten the object in `json` into dotted-key fields.
///
/// `separator` defaults to `"."` when omitted or empty.
#[wasm_bindgen]
pub fn flatten(json: &str, separator: Option<String>) -> Result<String, JsValue> {
    let document = fixture_core::parse_document(json).map_err(to_js)?;
    let flat =
        fixture_core::flatten(&document, &separator_or_default(separator)).map_err(to_js)?;
    render(&Value::Object(flat))
}

/// Rebuild a nested object from the dotted-key fields in `json`.
#[wasm_bindgen]
pub fn unflatten(json: &str, separator: Option<String>) -> Result<String, JsValue> {
    let flat = fixture_core::parse_document(json).map_err(to_js)?;
    let document = fixture_core::unflatten_value(&flat, &separator_or_default(separator))
        .map_err(to_js)?;
    render(&document)
}

/// Prune every document in the JSON array `json` and keep the non-blank ones.
#[wasm_bindgen(js_name = "exportDocuments")]
pub fn export_documents(json: &str, strict: bool) -> Result<String, JsValue> {
    let documents = match fixture_core::parse_document(json).map_err(to_js)? {
        Value::Array(items) => items,
        single => vec![single],
    };
    let mut set = fixture_core::FixtureSet::default();
    for document in documents {
        set.insert(document);
    }
    let policy = if strict {
        PrunePolicy::strict()
    } else {
        PrunePolicy::lenient()
    };
    set.export_json(&policy).map_err(to_js)
}
