//! Operation-level security requirement classification

use crate::literal::{PyField, PyStr};
use serde_json::Value;
use std::fmt;

/// The `security` field of an operation.
///
/// OpenAPI gives an absent field "inherit global security" semantics; here
/// absent and null are both treated as public, but they are kept apart so they
/// can be rendered differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SecurityField<'a> {
    /// No `security` key on the operation
    Absent,
    /// `security: null`
    Null,
    /// Any other value, normally a sequence of requirement mappings
    Declared(&'a Value),
}

impl<'a> SecurityField<'a> {
    /// Classify a looked-up `security` value
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            None => SecurityField::Absent,
            Some(Value::Null) => SecurityField::Null,
            Some(value) => SecurityField::Declared(value),
        }
    }

    /// True when no security requirement is declared (absent or null).
    ///
    /// An empty list is a declaration and is not public.
    pub fn is_public(&self) -> bool {
        matches!(self, SecurityField::Absent | SecurityField::Null)
    }

    /// Names of the schemes referenced by the declared requirements, in order
    pub fn scheme_names(&self) -> Vec<&'a str> {
        let SecurityField::Declared(value) = *self else {
            return Vec::new();
        };
        let Some(requirements) = value.as_array() else {
            return Vec::new();
        };

        requirements
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|req| req.keys().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for SecurityField<'_> {
    /// Absent renders as the `None` placeholder; a present value, null
    /// included, renders as parsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SecurityField::Absent => fmt::Display::fmt(&PyField(None), f),
            SecurityField::Null => f.write_str("null"),
            SecurityField::Declared(value) => fmt::Display::fmt(&PyStr(value), f),
        }
    }
}
