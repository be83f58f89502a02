//! Text boundary: user-supplied JSON in, indented JSON out.

use crate::error::{FixtureError, Result};
use serde_json::Value;

/// Decode user-supplied JSON text.
///
/// # Errors
///
/// [`FixtureError::JsonParse`] with the parser's message and 1-based position.
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Render a value as JSON indented by two spaces.
pub fn to_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| FixtureError::Serialize(e.to_string()))
}
