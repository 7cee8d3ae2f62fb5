//! # gherkin-lexer
//!
//! The line classifier for Gherkin-style behaviour specifications (Scenario, Background,
//! Given/When/Then/And/But, tables, bullets, doc-strings, tags and shared examples).
//!
//! Given the classification of the previously accepted line and a raw line, the lexer decides
//! what the line is, or rejects it as invalid in context. It does not build a document tree,
//! bind steps, expand outlines or filter by tag: those consume the classified stream produced
//! here.
//!
//! Layout
//!
//! src/gherkin
//!   ├── token      Line classification types and their text rendering
//!   ├── lexing     Recognizers, transition function, diagnostics and the document driver
//!   ├── loader     Loading sources from files or strings and scanning them
//!   ├── formats    Serializers for scanned documents (listing, json, yaml)
//!   └── testing    Factories and sample files for tests
//!
//! For the single-line API see [classify](gherkin::lexing::classify) and
//! [expecting](gherkin::lexing::expecting); for whole documents see
//! [DocumentLoader](gherkin::loader::DocumentLoader).

pub mod gherkin;

pub use gherkin::lexing::{classify, expecting};
