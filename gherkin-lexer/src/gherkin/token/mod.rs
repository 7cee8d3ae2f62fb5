//! Token types shared across the lexer, the output formats and tooling.

pub mod formatting;
pub mod line;

pub use formatting::{describe_block, describe_item, describe_line, describe_step};
pub use line::{BlockType, ItemType, LineType, StepType};
