//! Curated sample feature files
//!
//! The files live in `samples/` at the crate root, one `<name>.feature` per sample.
//! Loading panics on a missing or unreadable file: a broken sample is a broken test.

use crate::gherkin::lexing::{Document, LexError};
use crate::gherkin::loader::{DocumentLoader, LoaderError};
use std::fs;
use std::path::PathBuf;

/// Directory holding the sample files
pub fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Path of the sample named `name`
pub fn sample_path(name: &str) -> PathBuf {
    samples_dir().join(format!("{}.feature", name))
}

/// Names of every available sample, sorted
pub fn sample_names() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(samples_dir())
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", samples_dir().display(), e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "feature"))
        .filter_map(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    names
}

/// Fluent access to a sample file
pub struct Samples {
    path: PathBuf,
}

impl Samples {
    pub fn feature(name: &str) -> Self {
        Samples {
            path: sample_path(name),
        }
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", self.path.display(), e))
    }

    fn loader(&self) -> DocumentLoader {
        DocumentLoader::from_path(&self.path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", self.path.display(), e))
    }

    /// Scan with default options, panicking on a rejected line
    pub fn scan(&self) -> Document {
        self.loader()
            .scan()
            .unwrap_or_else(|e| panic!("Failed to scan {}: {}", self.path.display(), e))
    }

    /// Scan a sample that is expected to be rejected
    pub fn scan_err(&self) -> LexError {
        match self.loader().scan() {
            Err(LoaderError::LexError(err)) => err,
            Err(other) => panic!("Failed to load {}: {}", self.path.display(), other),
            Ok(_) => panic!("Expected {} to be rejected", self.path.display()),
        }
    }
}
