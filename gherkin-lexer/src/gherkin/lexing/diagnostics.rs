//! Diagnostics
//!
//! Describes which line kinds the grammar would have accepted after the last successfully
//! classified line. Callers use it to build syntax errors once [classify](super::classify)
//! rejects a line; it is always computed from the last good state, never from the rejected line.

use crate::gherkin::token::{BlockType, LineType, StepType};

pub const EXPECTING_STEP: &str = "Expecting Given, When or Then step";
pub const EXPECTING_TABLE_ROW: &str = "Expecting Table row";
pub const EXPECTING_AFTER_GIVEN: &str =
    "Expecting Table row, Bullet, Given, When, Then, And or But step";
pub const EXPECTING_AFTER_WHEN: &str = "Expecting Table row, Bullet, When, Then, And or But step";
pub const EXPECTING_AFTER_THEN: &str = "Expecting Table row, Bullet, Then, And or But step";
pub const UNEXPECTED_OR_INVALID: &str = "Unexpected or invalid line";
pub const UNEXPECTED: &str = "Unexpected line";
pub const EXPECTING_FIRST_LINE: &str =
    "Expecting Scenario, Background, Shared Examples, Examples, tag line or Given, When or Then step";

/// Describe the lines acceptable after `state`.
pub fn expecting(state: &LineType) -> &'static str {
    match state {
        LineType::BlockStart(BlockType::Named(_) | BlockType::Background) => EXPECTING_STEP,
        LineType::BlockStart(BlockType::Shared(_)) => EXPECTING_TABLE_ROW,
        LineType::ExamplesStart => EXPECTING_TABLE_ROW,
        LineType::TagLine(_) => UNEXPECTED,
        LineType::Step(step) => expecting_after_step(step),
        LineType::Item(_, _) => match state.step() {
            Some(step) => expecting_after_step(step),
            None => UNEXPECTED_OR_INVALID,
        },
    }
}

/// Like [expecting], also covering a rejection before any line was accepted.
pub fn expecting_after(state: Option<&LineType>) -> &'static str {
    state.map_or(EXPECTING_FIRST_LINE, expecting)
}

fn expecting_after_step(step: &StepType) -> &'static str {
    match step {
        StepType::GivenStep(_) => EXPECTING_AFTER_GIVEN,
        StepType::WhenStep(_) => EXPECTING_AFTER_WHEN,
        StepType::ThenStep(_) => EXPECTING_AFTER_THEN,
    }
}
