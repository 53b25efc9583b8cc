//! # openapi-doc
//!
//! Loads an OpenAPI document as a generic, order-preserving JSON tree and
//! exposes best-effort views over its paths, operations and security fields.

mod types;
mod parser;
mod operations;
mod security;
mod literal;
mod error;

pub use types::Document;
pub use parser::{DocumentFormat, DocumentLoader};
pub use operations::{Operation, PathEntry, Paths};
pub use security::SecurityField;
pub use literal::{PyField, PyLiteral, PyStr};
pub use error::{ParseError, ParseResult};
