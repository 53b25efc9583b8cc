//! # spec-summary
//!
//! Summarizes a local OpenAPI document: its declared version, the GET
//! operations under tournament paths with their security requirements, and
//! every GET operation that declares no security at all.

mod config;
mod error;
mod summarizer;

pub use config::{SummaryConfig, DEFAULT_DOCUMENT_PATH, DEFAULT_METHOD, DEFAULT_PATH_FILTER};
pub use error::{SummaryError, SummaryResult};
pub use summarizer::{SpecSummarizer, PUBLIC_GET_HEADER, TOURNAMENT_HEADER};
