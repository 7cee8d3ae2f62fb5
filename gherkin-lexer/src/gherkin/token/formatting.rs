//! Human-readable rendering of classified lines
//!
//! Rendering is kept in free functions rather than `Display` impls on the token types so the
//! types stay plain data and callers can pick whichever rendering they need.

use super::line::{BlockType, ItemType, LineType, StepType};

/// Render a block type the way it reads in a feature file
pub fn describe_block(block: &BlockType) -> String {
    match block {
        BlockType::Named(title) => title.clone(),
        BlockType::Background => "Background".to_string(),
        BlockType::Shared(Some(tag)) => format!("Shared Examples of {}", tag),
        BlockType::Shared(None) => "Shared Examples".to_string(),
    }
}

pub fn describe_step(step: &StepType) -> String {
    format!("{} {}", step.keyword(), step.text())
}

pub fn describe_item(item: &ItemType) -> String {
    match item {
        ItemType::BulletPoint(text) => format!("* {}", text),
        ItemType::TableRow(cells) => format!("| {} |", cells.join(" | ")),
        // Joined doc-strings span several lines; keep the rendering on one
        ItemType::DocString(text) => format!("\"\"\" {}", text.replace('\n', "\\n")),
    }
}

/// Render a classified line on a single line of text
pub fn describe_line(line: &LineType) -> String {
    match line {
        LineType::BlockStart(block) => describe_block(block),
        LineType::ExamplesStart => "Examples".to_string(),
        LineType::Step(step) => describe_step(step),
        LineType::Item(_, item) => describe_item(item),
        LineType::TagLine(tags) => tags
            .iter()
            .map(|tag| format!("@{}", tag))
            .collect::<Vec<_>>()
            .join(" "),
    }
}
