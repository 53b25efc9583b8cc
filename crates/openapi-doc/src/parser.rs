//! Document loading

use crate::error::{ParseError, ParseResult};
use crate::types::Document;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Serialization format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Guess the format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    /// Guess the format from content: a leading `{` means JSON
    pub fn sniff(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            DocumentFormat::Json
        } else {
            DocumentFormat::Yaml
        }
    }
}

/// Loads OpenAPI documents from files or strings
pub struct DocumentLoader;

impl DocumentLoader {
    /// Read and parse a document file.
    ///
    /// The format follows the file extension; unknown extensions are sniffed
    /// from the content.
    pub fn load(path: impl AsRef<Path>) -> ParseResult<Document> {
        let path = path.as_ref();
        info!("Loading OpenAPI document from {:?}", path);

        let content = Self::read(path)?;
        debug!("Read {} bytes from {:?}", content.len(), path);

        match DocumentFormat::from_path(path) {
            Some(DocumentFormat::Json) => Self::parse_json(&content),
            Some(DocumentFormat::Yaml) => Self::parse_yaml(&content),
            None => Self::parse(&content),
        }
    }

    fn read(path: &Path) -> ParseResult<String> {
        let io_error = |source| ParseError::IoError {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_error)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(io_error)?;
        Ok(content)
    }

    /// Parse a document from a string (auto-detects JSON/YAML)
    pub fn parse(content: &str) -> ParseResult<Document> {
        match DocumentFormat::sniff(content) {
            DocumentFormat::Json => Self::parse_json(content),
            DocumentFormat::Yaml => Self::parse_yaml(content),
        }
    }

    /// Parse a document from JSON
    pub fn parse_json(content: &str) -> ParseResult<Document> {
        let document: Document = serde_json::from_str(content)?;
        Self::log_parsed(&document, DocumentFormat::Json);
        Ok(document)
    }

    /// Parse a document from YAML
    pub fn parse_yaml(content: &str) -> ParseResult<Document> {
        let document: Document = serde_yaml::from_str(content)?;
        Self::log_parsed(&document, DocumentFormat::Yaml);
        Ok(document)
    }

    fn log_parsed(document: &Document, format: DocumentFormat) {
        debug!(
            "Parsed {:?} document with top-level keys {:?}",
            format,
            document.keys().collect::<Vec<_>>()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::ErrorKind;

    const SAMPLE_SPEC: &str = r#"{
  "openapi": "3.0.0",
  "info": {"title": "Stadium API", "version": "1.0.0"},
  "paths": {
    "/tournaments": {
      "get": {"operationId": "listTournaments"}
    },
    "/tournaments/{id}": {
      "get": {"operationId": "getTournament", "security": [{"bearerAuth": []}]}
    }
  }
}"#;

    const SAMPLE_YAML: &str = r#"
openapi: "3.0.0"
info:
  title: Stadium API
  version: "1.0.0"
paths:
  /health:
    get:
      operationId: health
"#;

    #[test]
    fn test_parse_json() {
        let doc = DocumentLoader::parse_json(SAMPLE_SPEC).unwrap();

        assert_eq!(doc.openapi(), Some(&json!("3.0.0")));
        let paths: Vec<&str> = doc.paths().unwrap().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["/tournaments", "/tournaments/{id}"]);
    }

    #[test]
    fn test_parse_yaml() {
        let doc = DocumentLoader::parse_yaml(SAMPLE_YAML).unwrap();

        assert_eq!(doc.openapi(), Some(&json!("3.0.0")));
        let entry = doc.paths().unwrap().next().unwrap();
        assert_eq!(entry.path(), "/health");
        assert!(entry.operation("get").unwrap().is_some());
    }

    #[test]
    fn test_parse_auto_detects_format() {
        assert!(DocumentLoader::parse(SAMPLE_SPEC).is_ok());
        assert!(DocumentLoader::parse(SAMPLE_YAML).is_ok());
        assert_eq!(DocumentFormat::sniff("  \n{}"), DocumentFormat::Json);
        assert_eq!(DocumentFormat::sniff("openapi: 3.0.0"), DocumentFormat::Yaml);
    }

    #[test]
    fn test_malformed_json() {
        let result = DocumentLoader::parse_json(r#"{"openapi": "3.0.0","#);
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_non_mapping_root() {
        let result = DocumentLoader::parse_json("[]");
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("api_v1_openapi.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("spec.YML")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("spec")), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_v1_openapi.json");
        std::fs::write(&path, SAMPLE_SPEC).unwrap();

        let doc = DocumentLoader::load(&path).unwrap();
        assert_eq!(doc.paths().unwrap().count(), 2);
    }

    #[test]
    fn test_json_extension_is_not_sniffed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_v1_openapi.json");
        std::fs::write(&path, SAMPLE_YAML).unwrap();

        let result = DocumentLoader::load(&path);
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_v1_openapi.json");

        match DocumentLoader::load(&path) {
            Err(ParseError::IoError { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("Expected IO error, got {:?}", other),
        }
    }
}
