//! Document driver
//!
//!     [classify](super::classify) works one line at a time and keeps no state. This module is
//!     the caller that walks a whole document: it holds the current classification, feeds
//!     lines to the transition function in order, and stops at the first rejection with a
//!     [LexError] built from [expecting_after](super::diagnostics::expecting_after).
//!
//! What the driver adds on top of the line grammar
//!
//!     - Blank lines and comment lines are skipped and leave the state untouched.
//!     - A leading `Feature:` line and the free text after it (up to the first block header,
//!       examples header or tag line) are collected as the document's feature title and
//!       narrative instead of being classified. Tag lines above the header stay in the line
//!       stream as ordinary tag lines.
//!     - Doc-strings are joined. The line grammar only recognizes the `"""` delimiter and hands
//!       back the raw line; the driver gathers everything up to the closing delimiter and emits
//!       a single doc-string item carrying the whole content.
//!
//!     Each of these can be switched off through [ScanOptions].

use serde::{Deserialize, Serialize};
use std::iter::Enumerate;
use std::str::Lines;

use super::common::{format_source_context, LexError};
use super::diagnostics::expecting_after;
use super::line_classification::classify;
use super::recognizers;
use crate::gherkin::token::{ItemType, LineType};

/// Knobs for the document driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip whitespace-only lines instead of classifying (and rejecting) them
    pub skip_blank_lines: bool,
    /// Lines whose trimmed text starts with this prefix are skipped
    pub comment_prefix: Option<String>,
    /// Collect a leading `Feature:` line and its narrative
    pub feature_header: bool,
    /// Gather doc-string content up to the closing delimiter into one item
    pub join_doc_strings: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            comment_prefix: Some("#".to_string()),
            feature_header: true,
            join_doc_strings: true,
        }
    }
}

/// One accepted line of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// 1-based line number in the source
    pub number: usize,
    /// The raw source line (the opening delimiter for a joined doc-string)
    pub text: String,
    pub line_type: LineType,
}

/// A fully scanned document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub feature: Option<String>,
    pub narrative: Vec<String>,
    pub lines: Vec<ClassifiedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Nothing read yet, a `Feature:` line may come
    Start,
    /// After the `Feature:` line, reading narrative
    Narrative,
    /// Classifying lines
    Body,
}

/// Iterator over the classified lines of a document.
///
/// Yields `Ok` for every accepted line and a single `Err` at the first rejection, after which
/// it is exhausted.
pub struct LineScanner<'a> {
    source: &'a str,
    lines: Enumerate<Lines<'a>>,
    options: &'a ScanOptions,
    state: Option<LineType>,
    stage: Stage,
    feature: Option<String>,
    narrative: Vec<String>,
    finished: bool,
}

impl<'a> LineScanner<'a> {
    pub fn new(source: &'a str, options: &'a ScanOptions) -> Self {
        Self {
            source,
            lines: source.lines().enumerate(),
            options,
            state: None,
            stage: if options.feature_header {
                Stage::Start
            } else {
                Stage::Body
            },
            feature: None,
            narrative: Vec::new(),
            finished: false,
        }
    }

    /// The feature title, once the header has been read
    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    pub fn narrative(&self) -> &[String] {
        &self.narrative
    }

    /// The classification of the last accepted line
    pub fn state(&self) -> Option<&LineType> {
        self.state.as_ref()
    }

    fn is_skipped(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return self.options.skip_blank_lines;
        }
        match self.options.comment_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => trimmed.starts_with(prefix),
            _ => false,
        }
    }

    /// Handle the feature header and narrative. Returns true when the line was consumed.
    fn consume_preamble(&mut self, line: &str) -> bool {
        if self.stage == Stage::Start {
            if let Some(title) = recognizers::feature(line) {
                log::debug!("feature header: {:?}", title);
                self.feature = Some(title);
                self.stage = Stage::Narrative;
                // Tags above the header belong to the feature; the body starts fresh
                self.state = None;
                return true;
            }
            // Feature tags are classified as usual and the header may still follow
            if recognizers::tags(line).is_none() {
                self.stage = Stage::Body;
            }
            return false;
        }
        if self.stage == Stage::Narrative {
            match classify(None, line) {
                Some(LineType::BlockStart(_) | LineType::ExamplesStart | LineType::TagLine(_)) => {
                    self.stage = Stage::Body;
                    return false;
                }
                _ => {
                    self.narrative.push(line.trim().to_string());
                    return true;
                }
            }
        }
        false
    }

    /// Gather doc-string content after the opening delimiter on line `opened_at`.
    fn join_doc_string(&mut self, opening: &str, opened_at: usize) -> Result<String, LexError> {
        let indent = opening.len() - opening.trim_start().len();
        let mut content = Vec::new();
        for (_, line) in self.lines.by_ref() {
            if recognizers::doc_string(line).is_some() {
                log::debug!(
                    "joined doc-string of {} lines opened at line {}",
                    content.len(),
                    opened_at
                );
                return Ok(content.join("\n"));
            }
            content.push(strip_indent(line, indent));
        }
        Err(LexError::UnterminatedDocString {
            line_number: opened_at,
        })
    }

    fn reject(&self, number: usize, line: &str) -> LexError {
        LexError::UnparsableLine {
            line_number: number,
            text: line.to_string(),
            expecting: expecting_after(self.state.as_ref()),
            context: format_source_context(self.source, number),
        }
    }
}

impl Iterator for LineScanner<'_> {
    type Item = Result<ClassifiedLine, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while let Some((index, line)) = self.lines.next() {
            let number = index + 1;
            if self.is_skipped(line) || self.consume_preamble(line) {
                continue;
            }

            let Some(mut line_type) = classify(self.state.as_ref(), line) else {
                self.finished = true;
                return Some(Err(self.reject(number, line)));
            };

            if self.options.join_doc_strings {
                if let LineType::Item(_, ItemType::DocString(_)) = line_type {
                    match self.join_doc_string(line, number) {
                        Ok(content) => {
                            line_type = LineType::item(&line_type, ItemType::DocString(content));
                        }
                        Err(err) => {
                            self.finished = true;
                            return Some(Err(err));
                        }
                    }
                }
            }

            self.state = Some(line_type.clone());
            return Some(Ok(ClassifiedLine {
                number,
                text: line.to_string(),
                line_type,
            }));
        }
        self.finished = true;
        None
    }
}

/// Remove up to `indent` leading whitespace characters
fn strip_indent(line: &str, indent: usize) -> String {
    let skip: usize = line
        .chars()
        .take(indent)
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    line[skip..].to_string()
}

/// Scan a whole document, stopping at the first rejected line.
pub fn scan(source: &str, options: &ScanOptions) -> Result<Document, LexError> {
    let mut scanner = LineScanner::new(source, options);
    let lines = scanner.by_ref().collect::<Result<Vec<_>, _>>()?;
    Ok(Document {
        feature: scanner.feature,
        narrative: scanner.narrative,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gherkin::testing::factories::*;

    fn line_types(doc: &Document) -> Vec<LineType> {
        doc.lines.iter().map(|line| line.line_type.clone()).collect()
    }

    #[test]
    fn test_scan_threads_state() {
        let source = "Scenario: Login\n  Given a user\n  When they log in\n  Then they see the home page\n";
        let doc = scan(source, &ScanOptions::default()).unwrap();

        assert_eq!(
            line_types(&doc),
            vec![
                named("Scenario: Login"),
                given_step("a user"),
                when_step("they log in"),
                then_step("they see the home page"),
            ]
        );
        assert_eq!(
            doc.lines.iter().map(|line| line.number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let source = "# leading comment\n\nScenario: S\n   \n  # another\n  Given x\n";
        let doc = scan(source, &ScanOptions::default()).unwrap();

        assert_eq!(line_types(&doc), vec![named("Scenario: S"), given_step("x")]);
        assert_eq!(doc.lines[1].number, 6);
    }

    #[test]
    fn test_blank_lines_rejected_when_not_skipped() {
        let options = ScanOptions {
            skip_blank_lines: false,
            ..ScanOptions::default()
        };
        let err = scan("Scenario: S\n\n  Given x\n", &options).unwrap_err();

        assert_eq!(err.line_number(), 2);
    }

    #[test]
    fn test_feature_header_and_narrative() {
        let source = "Feature: Accounts\n  As a user\n  I want to log in\n\n@smoke\nScenario: Login\n  Given a user\n";
        let doc = scan(source, &ScanOptions::default()).unwrap();

        assert_eq!(doc.feature.as_deref(), Some("Accounts"));
        assert_eq!(doc.narrative, vec!["As a user", "I want to log in"]);
        assert_eq!(
            line_types(&doc),
            vec![tag_line(&["smoke"]), named("Scenario: Login"), given_step("a user")]
        );
    }

    #[test]
    fn test_tags_above_feature_header() {
        let source = "@billing @slow\nFeature: Billing\n  Invoices go out monthly\n\nScenario: S\n  Given x\n";
        let doc = scan(source, &ScanOptions::default()).unwrap();

        assert_eq!(doc.feature.as_deref(), Some("Billing"));
        assert_eq!(doc.narrative, vec!["Invoices go out monthly"]);
        assert_eq!(
            line_types(&doc),
            vec![tag_line(&["billing", "slow"]), named("Scenario: S"), given_step("x")]
        );
        assert_eq!(doc.lines[0].number, 1);
    }

    #[test]
    fn test_feature_header_clears_tag_state() {
        let options = ScanOptions::default();
        let mut scanner = LineScanner::new("@billing\nFeature: Billing\n", &options);

        assert_eq!(scanner.next().unwrap().unwrap().line_type, tag_line(&["billing"]));
        assert_eq!(scanner.state(), Some(&tag_line(&["billing"])));
        assert!(scanner.next().is_none());
        assert_eq!(scanner.state(), None);
        assert_eq!(scanner.feature(), Some("Billing"));
    }

    #[test]
    fn test_feature_header_after_scenario_is_rejected() {
        let source = "@wip\nScenario: S\nFeature: Late\n";
        let err = scan(source, &ScanOptions::default()).unwrap_err();

        assert_eq!(err.line_number(), 3);
    }

    #[test]
    fn test_scanner_exposes_preamble_while_scanning() {
        let options = ScanOptions::default();
        let mut scanner =
            LineScanner::new("Feature: Accounts\n  As a user\nScenario: S\n", &options);

        assert_eq!(scanner.feature(), None);
        assert_eq!(scanner.next().unwrap().unwrap().line_type, named("Scenario: S"));
        assert_eq!(scanner.feature(), Some("Accounts"));
        assert_eq!(scanner.narrative(), ["As a user".to_string()]);
    }

    #[test]
    fn test_feature_header_disabled() {
        let options = ScanOptions {
            feature_header: false,
            ..ScanOptions::default()
        };
        let err = scan("Feature: Accounts\nScenario: S\n", &options).unwrap_err();

        assert_eq!(err.line_number(), 1);
    }

    #[test]
    fn test_rejection_reports_last_good_state() {
        let source = "Scenario: S\n  Given a user exists\n  When they log in\n  And provide a password\n  Given something\n";
        let err = scan(source, &ScanOptions::default()).unwrap_err();

        match err {
            LexError::UnparsableLine {
                line_number,
                text,
                expecting,
                context,
            } => {
                assert_eq!(line_number, 5);
                assert_eq!(text, "  Given something");
                assert_eq!(
                    expecting,
                    "Expecting Table row, Bullet, When, Then, And or But step"
                );
                assert!(context.contains(">>   5 |   Given something"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_rejection_of_first_line() {
        let options = ScanOptions {
            feature_header: false,
            ..ScanOptions::default()
        };
        let err = scan("As a user\n", &options).unwrap_err();

        match err {
            LexError::UnparsableLine { expecting, .. } => {
                assert_eq!(expecting, crate::gherkin::lexing::diagnostics::EXPECTING_FIRST_LINE)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_doc_string_is_joined() {
        let source = "Scenario: S\n  Given a document\n    \"\"\"\n    first line\n      indented\n\n    # not a comment\n    \"\"\"\n  Then it is stored\n";
        let doc = scan(source, &ScanOptions::default()).unwrap();

        let step = given_step("a document");
        assert_eq!(
            line_types(&doc),
            vec![
                named("Scenario: S"),
                step.clone(),
                doc_string(step, "first line\n  indented\n\n# not a comment"),
                then_step("it is stored"),
            ]
        );
        assert_eq!(doc.lines[2].number, 3);
        assert_eq!(doc.lines[3].number, 9);
    }

    #[test]
    fn test_doc_string_not_joined() {
        let options = ScanOptions {
            join_doc_strings: false,
            ..ScanOptions::default()
        };
        let source = "Scenario: S\n  Given a document\n  \"\"\"\n  \"\"\"\n";
        let doc = scan(source, &options).unwrap();

        let step = given_step("a document");
        assert_eq!(
            line_types(&doc)[2..],
            [
                doc_string(step.clone(), "  \"\"\""),
                doc_string(step, "  \"\"\""),
            ]
        );
    }

    #[test]
    fn test_unterminated_doc_string() {
        let source = "Scenario: S\n  Given a document\n  \"\"\"\n  never closed\n";
        let err = scan(source, &ScanOptions::default()).unwrap_err();

        assert_eq!(err, LexError::UnterminatedDocString { line_number: 3 });
    }

    #[test]
    fn test_scanner_stops_after_error() {
        let options = ScanOptions::default();
        let mut scanner = LineScanner::new("Scenario: S\nnonsense\nGiven x\n", &options);

        assert!(scanner.next().unwrap().is_ok());
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
        assert_eq!(scanner.state(), Some(&named("Scenario: S")));
    }
}
