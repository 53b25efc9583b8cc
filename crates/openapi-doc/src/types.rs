//! Document model

use crate::error::{ParseError, ParseResult};
use crate::operations::Paths;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// A parsed OpenAPI document.
///
/// The root must be a mapping; everything below it is kept as a generic JSON
/// tree in source key order. Nothing is validated up front: lookups check the
/// shape of the values they touch and report [`ParseError::UnexpectedShape`]
/// when a value is not what they need.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: IndexMap<String, Value>,
}

impl Document {
    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// The declared `openapi` version, if present
    pub fn openapi(&self) -> Option<&Value> {
        self.get("openapi")
    }

    /// The `paths` mapping as an iterator of entries.
    ///
    /// An absent `paths` key yields no entries. A present value that is not a
    /// mapping (including `null`) is a shape error.
    pub fn paths(&self) -> ParseResult<Paths<'_>> {
        match self.get("paths") {
            None => Ok(Paths::empty()),
            Some(Value::Object(map)) => Ok(Paths::new(map)),
            Some(other) => Err(ParseError::not_a_mapping("/paths", other)),
        }
    }
}
