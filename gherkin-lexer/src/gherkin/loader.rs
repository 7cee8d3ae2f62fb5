//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading feature source text from files
//! or strings and scanning it into classified lines. It is used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use gherkin_lexer::gherkin::lexing::ScanOptions;
//! use gherkin_lexer::gherkin::loader::DocumentLoader;
//!
//! // From file
//! let doc = DocumentLoader::from_path("login.feature")?.scan()?;
//!
//! // From string, with blank lines treated as errors
//! let options = ScanOptions { skip_blank_lines: false, ..ScanOptions::default() };
//! let doc = DocumentLoader::from_string("Scenario: S\n").with_options(options).scan()?;
//! ```

use crate::gherkin::lexing::{scan, Document, LexError, ScanOptions};
use std::fs;
use std::path::Path;

/// Error that can occur when loading documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// IO error when reading file
    IoError(String),
    /// The source was read but a line could not be classified
    LexError(LexError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::LexError(err) => write!(f, "Syntax error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::IoError(_) => None,
            LoaderError::LexError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<LexError> for LoaderError {
    fn from(err: LexError) -> Self {
        LoaderError::LexError(err)
    }
}

/// Document loader
///
/// Holds the source text and the options the driver runs with.
pub struct DocumentLoader {
    source: String,
    options: ScanOptions,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        log::debug!("loading {}", path.display());
        let source = fs::read_to_string(path)?;
        Ok(Self::from_string(source))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            options: ScanOptions::default(),
        }
    }

    /// Replace the driver options
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Classify every line, stopping at the first rejection
    pub fn scan(&self) -> Result<Document, LoaderError> {
        Ok(scan(&self.source, &self.options)?)
    }
}
