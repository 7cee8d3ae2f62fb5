//! Main module for gherkin-lexer functionality

pub mod formats;
pub mod lexing;
pub mod loader;
pub mod testing;
pub mod token;
