//! Lexer
//!
//!     This module turns the lines of a feature file into a stream of classified lines.
//!
//! The Pieces
//!
//!     1. Recognizers. See [recognizers](recognizers).
//!        Independent predicates/extractors, one per lexical pattern (headers, step keywords,
//!        table rows, bullets, doc-string delimiters, tags). Pure and context free.
//!
//!     2. Transition function. See [line_classification](line_classification).
//!        `classify(prior, line)` combines the previous classification with the recognizers,
//!        in a fixed priority order, to produce the next classification or reject the line.
//!
//!     3. Diagnostics. See [diagnostics](diagnostics).
//!        `expecting(last_good)` names the line kinds that would have been accepted, for
//!        building syntax errors after a rejection.
//!
//!     4. Driver. See [pipeline](pipeline).
//!        Walks a document, threading the state from line to line, skipping blank and comment
//!        lines, collecting the feature header and joining doc-strings.
//!
//! State
//!
//!     None of this keeps global state. The current classification is a plain value owned by
//!     whoever drives the loop, so independent documents never interfere.

pub mod common;
pub mod diagnostics;
pub mod line_classification;
pub mod pipeline;
pub mod recognizers;

pub use common::{format_source_context, LexError};
pub use diagnostics::{expecting, expecting_after};
pub use line_classification::classify;
pub use pipeline::{scan, ClassifiedLine, Document, LineScanner, ScanOptions};
// Re-export token types for consumers that import them from `lexing`
pub use crate::gherkin::token::{BlockType, ItemType, LineType, StepType};
