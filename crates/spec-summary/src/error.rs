//! Error types for spec-summary

use openapi_doc::ParseError;
use thiserror::Error;

/// Result type alias for summary operations
pub type SummaryResult<T> = std::result::Result<T, SummaryError>;

/// Summary error types
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The document could not be read, parsed or walked. Reported to the
    /// user on the output stream.
    #[error(transparent)]
    Document(#[from] ParseError),

    /// The output stream itself failed
    #[error("Failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}
