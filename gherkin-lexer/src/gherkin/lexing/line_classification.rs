//! Line Classification
//!
//!     The transition function of the lexer. Given the classification of the previously
//!     accepted line and a raw line, [classify] decides what the new line is, or rejects it.
//!
//!     Rules are tried in declaration order and the first one that produces a classification
//!     wins. The order is part of the grammar:
//!         1. scenario              Scenario/Story header, accepted anywhere
//!         2. background            Background header, accepted anywhere
//!         3. shared_examples_of    `Shared Examples Of @tag`, accepted anywhere
//!         4. shared_examples       plain `Shared Examples`, accepted anywhere
//!         5. examples              Examples header, accepted anywhere
//!         6. step                  Given/When/Then/And/But, only where ordering allows
//!         7. doc_string            `"""` under a step or continuing a doc-string
//!         8. bullet                `*` under a step or continuing a bullet list
//!         9. table_row             `|` under a shared block, examples or step, or continuing a
//!                                  table with the same number of columns
//!        10. tag_line              `@tag` line, accepted anywhere
//!
//!     Openers come first so that a step keyword inside a scenario title is never read as a
//!     step; the tag line comes last so that any line a structural rule accepts is never
//!     mistaken for one.
//!
//! Step Ordering
//!
//!     Within a block, steps only move forward: Given, then When, then Then. `And` and `But`
//!     repeat the current kind. The one way back is an explicit `When` after a `Then`, which
//!     opens a new When/Then round. Everything else going backwards is rejected.
//!
//! State
//!
//!     The function is pure. The caller owns the state and threads it from call to call, so
//!     any number of documents can be classified side by side.

use crate::gherkin::lexing::recognizers::{self, StepKeyword};
use crate::gherkin::token::{BlockType, ItemType, LineType, StepType};

type Rule = fn(Option<&LineType>, &str) -> Option<LineType>;

/// Grammar rules in priority order. A rule returns `None` when it does not apply.
const RULES: &[(&str, Rule)] = &[
    ("scenario", scenario_rule),
    ("background", background_rule),
    ("shared_examples_of", shared_examples_of_rule),
    ("shared_examples", shared_examples_rule),
    ("examples", examples_rule),
    ("step", step_rule),
    ("doc_string", doc_string_rule),
    ("bullet", bullet_rule),
    ("table_row", table_row_rule),
    ("tag_line", tag_line_rule),
];

/// Classify `line` given the classification of the previous accepted line.
///
/// Returns `None` when the line is not valid in this context. Rejection is an ordinary
/// outcome, not an error: the caller decides whether to stop, skip or report, typically using
/// [expecting](super::diagnostics::expecting) on `prior` to describe what was allowed.
pub fn classify(prior: Option<&LineType>, line: &str) -> Option<LineType> {
    for (name, rule) in RULES {
        if let Some(next) = rule(prior, line) {
            log::trace!("{:?} -> {} ({})", line, next.to_grammar_string(), name);
            return Some(next);
        }
    }
    log::debug!(
        "rejected {:?} after {}",
        line,
        prior.map_or_else(|| "<start>".to_string(), LineType::to_grammar_string)
    );
    None
}

fn scenario_rule(_prior: Option<&LineType>, line: &str) -> Option<LineType> {
    recognizers::scenario(line).map(|title| LineType::BlockStart(BlockType::Named(title)))
}

fn background_rule(_prior: Option<&LineType>, line: &str) -> Option<LineType> {
    recognizers::background(line).then_some(LineType::BlockStart(BlockType::Background))
}

fn shared_examples_of_rule(_prior: Option<&LineType>, line: &str) -> Option<LineType> {
    recognizers::shared_examples_of(line).map(|tag| LineType::BlockStart(BlockType::Shared(Some(tag))))
}

fn shared_examples_rule(_prior: Option<&LineType>, line: &str) -> Option<LineType> {
    recognizers::shared_examples(line).then_some(LineType::BlockStart(BlockType::Shared(None)))
}

fn examples_rule(_prior: Option<&LineType>, line: &str) -> Option<LineType> {
    recognizers::examples(line).then_some(LineType::ExamplesStart)
}

fn step_rule(prior: Option<&LineType>, line: &str) -> Option<LineType> {
    let (keyword, text) = recognizers::step(line)?;
    next_step(step_context(prior)?, keyword, text).map(LineType::Step)
}

/// Where a step line would land
enum StepContext<'a> {
    /// Right after a Scenario/Background header, or at the very start of input
    Opening,
    /// After a step, bare or with items attached
    After(&'a StepType),
}

fn step_context(prior: Option<&LineType>) -> Option<StepContext<'_>> {
    match prior {
        None => Some(StepContext::Opening),
        Some(LineType::BlockStart(BlockType::Named(_) | BlockType::Background)) => {
            Some(StepContext::Opening)
        }
        Some(line) => line.step().map(StepContext::After),
    }
}

fn next_step(context: StepContext<'_>, keyword: StepKeyword, text: String) -> Option<StepType> {
    use StepKeyword::*;
    use StepType::*;

    match (context, keyword) {
        (StepContext::Opening, Given) => Some(GivenStep(text)),
        (StepContext::Opening, When) => Some(WhenStep(text)),
        (StepContext::Opening, Then) => Some(ThenStep(text)),
        // Nothing to continue yet
        (StepContext::Opening, And | But) => None,

        (StepContext::After(_), Then) => Some(ThenStep(text)),

        (StepContext::After(GivenStep(_)), Given | And | But) => Some(GivenStep(text)),
        (StepContext::After(GivenStep(_)), When) => Some(WhenStep(text)),

        (StepContext::After(WhenStep(_)), When | And | But) => Some(WhenStep(text)),
        (StepContext::After(WhenStep(_)), Given) => None,

        (StepContext::After(ThenStep(_)), When) => Some(WhenStep(text)),
        (StepContext::After(ThenStep(_)), And | But) => Some(ThenStep(text)),
        (StepContext::After(ThenStep(_)), Given) => None,
    }
}

fn doc_string_rule(prior: Option<&LineType>, line: &str) -> Option<LineType> {
    let raw = recognizers::doc_string(line)?;
    let prior = prior?;
    match prior {
        LineType::Step(_) | LineType::Item(_, ItemType::DocString(_)) => {
            Some(LineType::item(prior, ItemType::DocString(raw)))
        }
        _ => None,
    }
}

fn bullet_rule(prior: Option<&LineType>, line: &str) -> Option<LineType> {
    let text = recognizers::bullet(line)?;
    let prior = prior?;
    match prior {
        LineType::Step(_) | LineType::Item(_, ItemType::BulletPoint(_)) => {
            Some(LineType::item(prior, ItemType::BulletPoint(text)))
        }
        _ => None,
    }
}

fn table_row_rule(prior: Option<&LineType>, line: &str) -> Option<LineType> {
    let cells = recognizers::table_row(line)?;
    let prior = prior?;
    match prior {
        LineType::BlockStart(BlockType::Shared(_)) | LineType::ExamplesStart | LineType::Step(_) => {
            Some(LineType::item(prior, ItemType::TableRow(cells)))
        }
        // Rows of a different width end up rejected
        LineType::Item(_, ItemType::TableRow(previous)) if previous.len() == cells.len() => {
            Some(LineType::item(prior, ItemType::TableRow(cells)))
        }
        _ => None,
    }
}

fn tag_line_rule(_prior: Option<&LineType>, line: &str) -> Option<LineType> {
    recognizers::tags(line).map(LineType::TagLine)
}
