//! Error types for the notebook analysis pipeline.
//!
//! Only the thin I/O layers can fail: ingestion of a document that is not
//! valid nbformat/HTML, and report writing. Malformed *scanned code* never
//! produces an error anywhere in the crate -- the extraction engine degrades
//! to empty or fallback values instead (see [`crate::extract`]).

use thiserror::Error;

/// The main error type for notebook analysis.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Notebook container file could not be read or decoded.
    #[error("Failed to parse notebook: {0}")]
    NotebookParse(String),

    /// HTML export could not be read.
    #[error("Failed to parse HTML: {0}")]
    HtmlParse(String),

    /// Input file has an extension we do not know how to ingest.
    #[error("Unsupported input format: '{0}' (expected .ipynb or .html)")]
    UnsupportedFormat(String),

    /// Report rendering or writing failed.
    #[error("Failed to generate report: {0}")]
    ReportGeneration(String),

    /// Invalid analyzer configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalyzerError>,
    },
}

impl AnalyzerError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalyzerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotebookParse(_) => "NOTEBOOK_PARSE_FAILED",
            Self::HtmlParse(_) => "HTML_PARSE_FAILED",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::ReportGeneration(_) => "REPORT_GENERATION_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check whether this error happened before analysis started.
    ///
    /// Ingestion errors mean the document never reached the extraction
    /// engine; everything downstream of ingestion is total.
    pub fn is_ingestion(&self) -> bool {
        match self {
            Self::NotebookParse(_) | Self::HtmlParse(_) | Self::UnsupportedFormat(_) => true,
            Self::WithContext { source, .. } => source.is_ingestion(),
            _ => false,
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalyzerError::Io(e).with_context(context))
    }
}
