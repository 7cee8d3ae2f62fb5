//! Output format lookup
//!
//! A [FormatRegistry] holds the formats a tool can print a scanned [Document] in. Names are
//! unique and matched without regard to ASCII case; registering a name again replaces the
//! earlier format. A failed lookup carries the names that would have worked, so callers can
//! report them without going back to the registry.

use crate::gherkin::lexing::Document;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No format registered under `name`
    UnknownFormat {
        name: String,
        /// Registered names, sorted
        available: Vec<String>,
    },
    /// The format could not render the document
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "unknown format '{}' (available: {})",
                name,
                available.join(", ")
            ),
            FormatError::Serialization(msg) => write!(f, "could not serialize document: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// One way of printing a scanned document
pub trait Formatter: Send + Sync {
    /// Name used to select the format (`--format`, `output.format`)
    fn name(&self) -> &'static str;

    /// One-line summary shown when listing formats
    fn summary(&self) -> &'static str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;
}

pub struct FormatRegistry {
    /// Kept sorted by name
    formats: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn empty() -> Self {
        FormatRegistry {
            formats: Vec::new(),
        }
    }

    /// Add `format`, replacing any format registered under the same name.
    pub fn with<F: Formatter + 'static>(mut self, format: F) -> Self {
        self.formats
            .retain(|existing| !existing.name().eq_ignore_ascii_case(format.name()));
        self.formats.push(Box::new(format));
        self.formats.sort_by_key(|format| format.name());
        self
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.formats
            .iter()
            .map(|format| format.name().to_string())
            .collect()
    }

    /// Registered formats, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formats.iter().map(|format| format.as_ref())
    }

    pub fn lookup(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Render `doc` in the format called `name`
    pub fn render(&self, doc: &Document, name: &str) -> Result<String, FormatError> {
        let format = self.lookup(name)?;
        log::debug!("rendering {} lines as {}", doc.lines.len(), format.name());
        format.serialize(doc)
    }
}

impl Default for FormatRegistry {
    /// listing, json and yaml
    fn default() -> Self {
        Self::empty()
            .with(super::ListingFormatter::default())
            .with(super::JsonFormatter)
            .with(super::YamlFormatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LineCount(&'static str);

    impl Formatter for LineCount {
        fn name(&self) -> &'static str {
            self.0
        }
        fn summary(&self) -> &'static str {
            "Number of classified lines"
        }
        fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
            Ok(doc.lines.len().to_string())
        }
    }

    #[test]
    fn test_default_names_are_sorted() {
        assert_eq!(FormatRegistry::default().names(), vec!["json", "listing", "yaml"]);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.lookup("JSON").map(|f| f.name()), Ok("json"));
    }

    #[test]
    fn test_unknown_format_lists_available() {
        let registry = FormatRegistry::default();
        let err = registry.render(&Document::default(), "xml").unwrap_err();

        assert_eq!(
            err,
            FormatError::UnknownFormat {
                name: "xml".to_string(),
                available: vec!["json".to_string(), "listing".to_string(), "yaml".to_string()],
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown format 'xml' (available: json, listing, yaml)"
        );
    }

    #[test]
    fn test_same_name_replaces() {
        let registry = FormatRegistry::default().with(LineCount("Listing"));

        assert_eq!(registry.names(), vec!["Listing", "json", "yaml"]);
        assert_eq!(registry.render(&Document::default(), "listing"), Ok("0".to_string()));
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::empty().with(LineCount("count"));

        assert_eq!(registry.iter().map(|f| f.summary()).collect::<Vec<_>>(), vec![
            "Number of classified lines"
        ]);
        assert!(FormatRegistry::empty().lookup("count").is_err());
    }
}
