//! Output formats for scanned documents
//!
//!     listing   One line per classified line: number, grammar token and the line rendered back
//!               to text. Meant for people and for snapshot tests.
//!     json      The [Document] serialized with serde_json.
//!     yaml      The [Document] serialized with serde_yaml.
//!
//! Formats are looked up by name through the [FormatRegistry](registry::FormatRegistry), whose
//! default holds exactly these three.

pub mod registry;

pub use registry::{FormatError, FormatRegistry, Formatter};

use crate::gherkin::lexing::Document;
use crate::gherkin::token::describe_line;

/// Line-per-token listing
///
/// ```text
/// 01 <block-start> Scenario: Login
/// 02 <given-step> Given a user
/// ```
#[derive(Debug, Clone)]
pub struct ListingFormatter {
    /// Prefix each entry with its source line number
    pub numbered: bool,
}

impl Default for ListingFormatter {
    fn default() -> Self {
        Self { numbered: true }
    }
}

impl Formatter for ListingFormatter {
    fn name(&self) -> &'static str {
        "listing"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut out = String::new();
        if let Some(feature) = &doc.feature {
            out.push_str(&format!("Feature: {}\n", feature));
            for line in &doc.narrative {
                out.push_str(&format!("  {}\n", line));
            }
        }
        for line in &doc.lines {
            let grammar = line.line_type.to_grammar_string();
            let text = describe_line(&line.line_type);
            if self.numbered {
                out.push_str(&format!("{:02} {} {}\n", line.number, grammar, text));
            } else {
                out.push_str(&format!("{} {}\n", grammar, text));
            }
        }
        Ok(out)
    }

    fn summary(&self) -> &'static str {
        "One classified line per row with its grammar token"
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn summary(&self) -> &'static str {
        "Scanned document as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn summary(&self) -> &'static str {
        "Scanned document as YAML"
    }
}
