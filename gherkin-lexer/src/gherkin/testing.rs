//! Testing utilities
//!
//!     Two helpers keep test code short and honest:
//!
//!         1. [factories] build expected [LineType](crate::gherkin::token::LineType) values
//!            without spelling out nested enums and boxes.
//!         2. [samples] loads the curated `.feature` files under `samples/`.
//!
//!     Prefer the sample files for anything larger than a couple of lines. Hand-written
//!     fixtures drift from each other over time; a shared, reviewed sample does not.
//!
//!     ```rust,ignore
//!     use crate::gherkin::testing::factories::*;
//!     use crate::gherkin::testing::samples::Samples;
//!
//!     let doc = Samples::feature("login").scan();
//!     assert_eq!(doc.lines[1].line_type, given_step("a registered user"));
//!     ```

pub mod factories;
pub mod samples;
