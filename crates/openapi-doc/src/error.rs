//! Error types for document loading and lookups

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for document operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Document error types
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unexpected document shape at {pointer}: expected {expected}, found {found}")]
    UnexpectedShape {
        /// JSON pointer (RFC 6901) of the offending value
        pointer: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ParseError {
    /// Shape error for a value that was not a mapping
    pub(crate) fn not_a_mapping(pointer: impl Into<String>, found: &Value) -> Self {
        ParseError::UnexpectedShape {
            pointer: pointer.into(),
            expected: "a mapping",
            found: value_kind(found),
        }
    }
}

/// Human-readable name of a JSON value's kind
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
