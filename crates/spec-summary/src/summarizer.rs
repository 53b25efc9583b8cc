//! Summary orchestration

use std::io::{self, Write};

use openapi_doc::{Document, DocumentLoader, PyField};
use tracing::{debug, info};

use crate::config::SummaryConfig;
use crate::error::{SummaryError, SummaryResult};

/// Header of the tournament paths section
pub const TOURNAMENT_HEADER: &str = "--- Tournament Paths ---";

/// Header of the public GET paths section
pub const PUBLIC_GET_HEADER: &str = "--- Public GET Paths ---";

/// Loads a document and prints its summary
#[derive(Debug, Clone, Default)]
pub struct SpecSummarizer {
    config: SummaryConfig,
}

impl SpecSummarizer {
    /// Create a summarizer reading `api_v1_openapi.json` from the working
    /// directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Print the summary to `out`.
    ///
    /// Document failures (missing file, bad JSON, unexpected shapes) are
    /// printed to `out` as a single line after whatever was already written,
    /// and the call still succeeds. Only a failing `out` is returned as an
    /// error.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.summarize(out) {
            Ok(()) => Ok(()),
            Err(SummaryError::Document(err)) => {
                debug!("Summary aborted: {}", err);
                writeln!(out, "{}", err)?;
                out.flush()
            }
            Err(SummaryError::Output(err)) => Err(err),
        }
    }

    /// Load the configured document and write its summary
    pub fn summarize<W: Write>(&self, out: &mut W) -> SummaryResult<()> {
        let document = DocumentLoader::load(&self.config.document_path)?;
        self.write_summary(&document, out)
    }

    /// Write the summary of an already-loaded document
    pub fn write_summary<W: Write>(&self, document: &Document, out: &mut W) -> SummaryResult<()> {
        writeln!(out, "OpenAPI Version: {}", PyField(document.openapi()))?;
        self.write_tournament_paths(document, out)?;
        self.write_public_get_paths(document, out)?;
        out.flush()?;
        Ok(())
    }

    /// Paths containing the filter that declare the configured method, with
    /// the operation's security as declared (absent prints `None`)
    fn write_tournament_paths<W: Write>(
        &self,
        document: &Document,
        out: &mut W,
    ) -> SummaryResult<()> {
        writeln!(out)?;
        writeln!(out, "{}", TOURNAMENT_HEADER)?;

        let mut matched = 0usize;
        for entry in document.paths()? {
            if !entry.path().contains(self.config.path_filter.as_str()) {
                continue;
            }
            let Some(operation) = entry.operation(&self.config.method)? else {
                continue;
            };

            let security = operation.security();
            debug!(
                "{} {} declares schemes {:?}",
                self.config.method,
                entry.path(),
                security.scheme_names()
            );
            writeln!(out, "path: {}, security: {}", entry.path(), security)?;
            matched += 1;
        }

        info!(
            "{} paths matching {:?} expose {}",
            matched, self.config.path_filter, self.config.method
        );
        Ok(())
    }

    /// Paths whose configured-method operation has absent or null security
    fn write_public_get_paths<W: Write>(
        &self,
        document: &Document,
        out: &mut W,
    ) -> SummaryResult<()> {
        writeln!(out)?;
        writeln!(out, "{}", PUBLIC_GET_HEADER)?;

        let mut matched = 0usize;
        for entry in document.paths()? {
            let Some(operation) = entry.operation(&self.config.method)? else {
                continue;
            };
            if operation.security().is_public() {
                writeln!(out, "path: {}", entry.path())?;
                matched += 1;
            }
        }

        info!("{} paths expose a public {}", matched, self.config.method);
        Ok(())
    }
}
