//! Summary configuration

use std::path::PathBuf;

/// Document read when no other path is configured, relative to the working
/// directory
pub const DEFAULT_DOCUMENT_PATH: &str = "api_v1_openapi.json";

/// Substring a path must contain to be listed under tournament paths
pub const DEFAULT_PATH_FILTER: &str = "tournaments";

/// Methods-mapping key both passes inspect
pub const DEFAULT_METHOD: &str = "get";

/// What to summarize and how to select paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Document to load
    pub document_path: PathBuf,
    /// Substring filter for the tournament pass
    pub path_filter: String,
    /// Operation key, matched exactly against the methods mapping
    pub method: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            path_filter: DEFAULT_PATH_FILTER.to_string(),
            method: DEFAULT_METHOD.to_string(),
        }
    }
}

impl SummaryConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document path
    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    /// Set the tournament path filter
    pub fn with_path_filter(mut self, filter: impl Into<String>) -> Self {
        self.path_filter = filter.into();
        self
    }

    /// Set the inspected method key
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }
}
