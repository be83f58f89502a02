//! Error types for fixture parsing and shape transformations.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while decoding fixtures or reshaping them.
///
/// The transformations in [`crate::empty`] and [`crate::prune`] are total and
/// never produce one of these; only text decoding, flat-map handling and
/// fixture bookkeeping can fail.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The input text was not valid JSON.
    /// `line` and `column` are 1-based, as reported by `serde_json`; the
    /// message already carries them in its text.
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        line: usize,
        column: usize,
    },

    /// A flatten/unflatten input was not a JSON object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// Two flat keys disagree about whether a path is a leaf or a mapping.
    #[error("conflicting flat key at path '{path}'")]
    PathConflict { path: String },

    #[error("key separator must not be empty")]
    InvalidSeparator,

    #[error("no fixture with id {0}")]
    UnknownFixture(Uuid),

    /// Encoding a value back to text failed.
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return FixtureError::Serialize(err.to_string());
        }
        FixtureError::JsonParse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Convenience alias used throughout fixture-core.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Human-readable name of a JSON value's kind, for error messages.
pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
