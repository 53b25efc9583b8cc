//! Path and operation views over a document

use crate::error::{ParseError, ParseResult};
use crate::security::SecurityField;
use serde_json::{Map, Value};

/// Iterator over the entries of a document's `paths` mapping, in document order
pub struct Paths<'a> {
    inner: Option<serde_json::map::Iter<'a>>,
}

impl<'a> Paths<'a> {
    pub(crate) fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            inner: Some(map.iter()),
        }
    }

    pub(crate) fn empty() -> Self {
        Self { inner: None }
    }
}

impl<'a> Iterator for Paths<'a> {
    type Item = PathEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, methods) = self.inner.as_mut()?.next()?;
        Some(PathEntry { path, methods })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map(|it| it.size_hint())
            .unwrap_or((0, Some(0)))
    }
}

/// One `paths` entry: a path template and its methods value.
///
/// The methods value is only required to be a mapping once it is inspected.
#[derive(Debug, Clone, Copy)]
pub struct PathEntry<'a> {
    path: &'a str,
    methods: &'a Value,
}

impl<'a> PathEntry<'a> {
    /// The path template, e.g. `/tournaments/{id}`
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// JSON pointer to this entry
    pub fn pointer(&self) -> String {
        format!("/paths/{}", escape_pointer_token(self.path))
    }

    fn methods(&self) -> ParseResult<&'a Map<String, Value>> {
        self.methods
            .as_object()
            .ok_or_else(|| ParseError::not_a_mapping(self.pointer(), self.methods))
    }

    /// The operation declared under `method` (exact, case-sensitive key), if any
    pub fn operation(&self, method: &str) -> ParseResult<Option<Operation<'a>>> {
        let Some(value) = self.methods()?.get(method) else {
            return Ok(None);
        };

        let pointer = format!("{}/{}", self.pointer(), escape_pointer_token(method));
        match value {
            Value::Object(fields) => Ok(Some(Operation { pointer, fields })),
            other => Err(ParseError::not_a_mapping(pointer, other)),
        }
    }
}

/// A single operation mapping, e.g. the `get` entry of a path
#[derive(Debug, Clone)]
pub struct Operation<'a> {
    pointer: String,
    fields: &'a Map<String, Value>,
}

impl<'a> Operation<'a> {
    /// JSON pointer to this operation
    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    /// Look up a field of the operation
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// The operation's `security` field, keeping absent and null apart
    pub fn security(&self) -> SecurityField<'a> {
        SecurityField::from_value(self.get("security"))
    }
}

/// Escape a reference token per RFC 6901 (`~` before `/`)
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
