//! Common lexer module
//!
//! Error type surfaced by the document driver and the source excerpt helper used to build it.
//! The transition function itself never errors; a rejection only becomes a [LexError] once a
//! driver decides to stop on it.

use std::fmt;

/// Errors that can occur while scanning a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The line does not fit the grammar after the previous accepted line
    UnparsableLine {
        /// 1-based line number in the source
        line_number: usize,
        /// The raw rejected line
        text: String,
        /// What would have been accepted, from the last good state
        expecting: &'static str,
        /// Numbered source excerpt around the line
        context: String,
    },
    /// A doc-string was opened but its closing `"""` never came
    UnterminatedDocString { line_number: usize },
}

impl LexError {
    pub fn line_number(&self) -> usize {
        match self {
            LexError::UnparsableLine { line_number, .. }
            | LexError::UnterminatedDocString { line_number } => *line_number,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnparsableLine {
                line_number,
                text,
                expecting,
                ..
            } => write!(
                f,
                "Line {}: {} (found {:?})",
                line_number,
                expecting,
                text.trim()
            ),
            LexError::UnterminatedDocString { line_number } => write!(
                f,
                "Line {}: doc-string is never closed with \"\"\"",
                line_number
            ),
        }
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for String {
    fn from(err: LexError) -> Self {
        err.to_string()
    }
}

/// Format source context around a line
///
/// Shows 2 lines before the line, the line itself with a >> marker, and 2 lines after.
/// `line_number` is 1-based; all lines are numbered for easy reference.
pub fn format_source_context(source: &str, line_number: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line_number.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}
