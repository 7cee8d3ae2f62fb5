//! Factories for expected classifications

use crate::gherkin::token::{BlockType, ItemType, LineType, StepType};

pub fn named(title: &str) -> LineType {
    LineType::BlockStart(BlockType::Named(title.to_string()))
}

pub fn background() -> LineType {
    LineType::BlockStart(BlockType::Background)
}

pub fn shared(tag: Option<&str>) -> LineType {
    LineType::BlockStart(BlockType::Shared(tag.map(str::to_string)))
}

pub fn examples_start() -> LineType {
    LineType::ExamplesStart
}

pub fn given_step(text: &str) -> LineType {
    LineType::Step(StepType::GivenStep(text.to_string()))
}

pub fn when_step(text: &str) -> LineType {
    LineType::Step(StepType::WhenStep(text.to_string()))
}

pub fn then_step(text: &str) -> LineType {
    LineType::Step(StepType::ThenStep(text.to_string()))
}

/// Table row under `enclosing`. An item enclosing line is flattened like the lexer does.
pub fn row(enclosing: LineType, cells: &[&str]) -> LineType {
    LineType::item(
        &enclosing,
        ItemType::TableRow(cells.iter().map(|cell| cell.to_string()).collect()),
    )
}

pub fn bullet(enclosing: LineType, text: &str) -> LineType {
    LineType::item(&enclosing, ItemType::BulletPoint(text.to_string()))
}

pub fn doc_string(enclosing: LineType, text: &str) -> LineType {
    LineType::item(&enclosing, ItemType::DocString(text.to_string()))
}

pub fn tag_line(tags: &[&str]) -> LineType {
    LineType::TagLine(tags.iter().map(|tag| tag.to_string()).collect())
}
