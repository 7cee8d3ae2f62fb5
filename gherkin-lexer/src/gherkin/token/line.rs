//! Line classification types
//!
//! These are the values produced by the transition function. They are all closed sum types:
//! a line is exactly one [LineType], and the payload of each variant carries whatever the
//! recognizers extracted from the raw text.
//!
//! Every value is immutable and short-lived. A classification is produced by one call to
//! [classify](crate::gherkin::lexing::classify), handed back in as the prior state of the next
//! call, and dropped once superseded. Nothing here tracks block boundaries; the next
//! `BlockStart` or `ExamplesStart` simply replaces the state.

use serde::{Deserialize, Serialize};

/// The kind of block opened by a block-start line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    /// A Scenario or Story header, carrying the whole trimmed header line
    Named(String),
    /// A Background header
    Background,
    /// A reusable examples table, optionally scoped to a tag name
    Shared(Option<String>),
}

/// A step line, already resolved to the step kind it belongs to.
///
/// `And`/`But` lines never appear here on their own: they are resolved to the kind of the step
/// they continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    GivenStep(String),
    WhenStep(String),
    ThenStep(String),
}

impl StepType {
    /// The step text following the keyword
    pub fn text(&self) -> &str {
        match self {
            StepType::GivenStep(text) | StepType::WhenStep(text) | StepType::ThenStep(text) => {
                text
            }
        }
    }

    /// The canonical keyword for this step kind
    pub fn keyword(&self) -> &'static str {
        match self {
            StepType::GivenStep(_) => "Given",
            StepType::WhenStep(_) => "When",
            StepType::ThenStep(_) => "Then",
        }
    }
}

/// A structured sub-line attached to an enclosing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    BulletPoint(String),
    TableRow(Vec<String>),
    DocString(String),
}

/// The classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    /// First line of a block
    BlockStart(BlockType),
    /// An "Examples" header introducing a table
    ExamplesStart,
    /// A Given/When/Then/And/But line
    Step(StepType),
    /// A table row, bullet or doc-string attached to the enclosing line.
    ///
    /// The enclosing line is never itself an `Item`: successive items under the same line wrap
    /// the same enclosing value again instead of nesting deeper.
    Item(Box<LineType>, ItemType),
    /// A line made only of `@tag` tokens
    TagLine(Vec<String>),
}

impl LineType {
    /// Wrap `item` under `enclosing`, flattening an `Item` enclosing line to its own enclosing
    /// line so that items never nest.
    pub fn item(enclosing: &LineType, item: ItemType) -> LineType {
        LineType::Item(Box::new(enclosing.enclosing().clone()), item)
    }

    /// The line an item is attached to, or the line itself when it is not an item
    pub fn enclosing(&self) -> &LineType {
        match self {
            LineType::Item(enclosing, _) => enclosing,
            other => other,
        }
    }

    /// The step kind carried by this line, looking through one item wrapper
    pub fn step(&self) -> Option<&StepType> {
        match self.enclosing() {
            LineType::Step(step) => Some(step),
            _ => None,
        }
    }

    /// Format the line kind as grammar notation: `<token-name>`
    ///
    /// Examples:
    /// - BlockStart -> `<block-start>`
    /// - Step(GivenStep) -> `<given-step>`
    /// - Item(_, TableRow) -> `<table-row>`
    pub fn to_grammar_string(&self) -> String {
        let name = match self {
            LineType::BlockStart(_) => "block-start",
            LineType::ExamplesStart => "examples-start",
            LineType::Step(StepType::GivenStep(_)) => "given-step",
            LineType::Step(StepType::WhenStep(_)) => "when-step",
            LineType::Step(StepType::ThenStep(_)) => "then-step",
            LineType::Item(_, ItemType::TableRow(_)) => "table-row",
            LineType::Item(_, ItemType::BulletPoint(_)) => "bullet",
            LineType::Item(_, ItemType::DocString(_)) => "doc-string",
            LineType::TagLine(_) => "tag-line",
        };
        format!("<{}>", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_flattens_enclosing_item() {
        let step = LineType::Step(StepType::GivenStep("a table".to_string()));
        let first = LineType::item(&step, ItemType::TableRow(vec!["a".to_string()]));
        let second = LineType::item(&first, ItemType::TableRow(vec!["b".to_string()]));

        assert_eq!(
            second,
            LineType::Item(Box::new(step), ItemType::TableRow(vec!["b".to_string()]))
        );
    }

    #[test]
    fn test_step_looks_through_item() {
        let then = LineType::Step(StepType::ThenStep("it works".to_string()));
        let bullet = LineType::item(&then, ItemType::BulletPoint("really".to_string()));

        assert_eq!(bullet.step().map(StepType::keyword), Some("Then"));
        assert_eq!(bullet.step().map(StepType::text), Some("it works"));
        assert_eq!(LineType::ExamplesStart.step(), None);
    }

    #[test]
    fn test_grammar_string() {
        assert_eq!(
            LineType::BlockStart(BlockType::Background).to_grammar_string(),
            "<block-start>"
        );
        assert_eq!(
            LineType::TagLine(vec!["wip".to_string()]).to_grammar_string(),
            "<tag-line>"
        );
        let row = LineType::item(&LineType::ExamplesStart, ItemType::TableRow(vec![]));
        assert_eq!(row.to_grammar_string(), "<table-row>");
    }
}
