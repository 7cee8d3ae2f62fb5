//! Recognizers
//!
//!     Each recognizer tests a raw line against one lexical pattern and, on a match, extracts
//!     its payload. They know nothing about context: deciding whether a recognized line is
//!     acceptable where it appears is the job of [line_classification](super::line_classification).
//!
//!     Keyword matching is case-insensitive and tolerates any leading whitespace. Trailing
//!     whitespace is never significant, so every pattern is tried against the line with its
//!     trailing whitespace removed, and extracted text is trimmed.
//!
//!     A line can satisfy several recognizers at once (`Scenario: Given a twist` looks like a
//!     header and like a step to a careless reader). Recognizers do not arbitrate; the order in
//!     which the transition function consults them does.

use once_cell::sync::Lazy;
use regex::Regex;

static SCENARIO_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*(scenario|story)").unwrap());

static BACKGROUND_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*background(.*)").unwrap());

/// `Shared Examples Of @tag`, where the tag name stops before a trailing colon
static SHARED_EXAMPLES_OF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*shared\s+examples\s+of\s+@(.*[^:])").unwrap());

static SHARED_EXAMPLES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*shared examples").unwrap());

static EXAMPLES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*examples").unwrap());

static STEP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(given|when|then|and|but)\s+(.*)").unwrap());

/// `Feature: title` header that opens a feature file
static FEATURE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*feature:(.*)").unwrap());

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+)").unwrap());

/// The keyword a step line was written with.
///
/// Only `Given`, `When` and `Then` name a step kind; `And` and `But` continue whichever kind
/// came before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKeyword {
    Given,
    When,
    Then,
    And,
    But,
}

impl StepKeyword {
    fn from_match(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "given" => Some(StepKeyword::Given),
            "when" => Some(StepKeyword::When),
            "then" => Some(StepKeyword::Then),
            "and" => Some(StepKeyword::And),
            "but" => Some(StepKeyword::But),
            _ => None,
        }
    }
}

/// Feature header. Returns the title after the colon.
///
/// Not part of the line grammar: only the document driver looks for it, ahead of the first
/// classified line.
pub fn feature(line: &str) -> Option<String> {
    FEATURE_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|title| title.as_str().trim().to_string())
}

/// Scenario or Story header. Returns the whole trimmed line.
pub fn scenario(line: &str) -> Option<String> {
    SCENARIO_REGEX
        .is_match(line)
        .then(|| line.trim().to_string())
}

pub fn background(line: &str) -> bool {
    BACKGROUND_REGEX.is_match(line)
}

/// `Shared Examples Of @tag`. Returns the tag name without the `@`.
pub fn shared_examples_of(line: &str) -> Option<String> {
    SHARED_EXAMPLES_OF_REGEX
        .captures(line.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|tag| tag.as_str().trim().to_string())
}

/// Plain `Shared Examples` header. Callers must try [shared_examples_of] first.
pub fn shared_examples(line: &str) -> bool {
    SHARED_EXAMPLES_REGEX.is_match(line)
}

pub fn examples(line: &str) -> bool {
    EXAMPLES_REGEX.is_match(line)
}

/// Given/When/Then/And/But followed by at least one space and the step text.
pub fn step(line: &str) -> Option<(StepKeyword, String)> {
    let caps = STEP_REGEX.captures(line.trim_end())?;
    let keyword = StepKeyword::from_match(caps.get(1)?.as_str())?;
    let text = caps.get(2).map_or("", |text| text.as_str()).trim().to_string();
    Some((keyword, text))
}

/// Pipe-delimited table row. Empty fragments are dropped and every cell is trimmed.
pub fn table_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') {
        return None;
    }
    Some(
        trimmed
            .split('|')
            .filter(|fragment| !fragment.is_empty())
            .map(|cell| cell.trim().to_string())
            .collect(),
    )
}

/// Bullet line. Returns the text after the first `*`.
pub fn bullet(line: &str) -> Option<String> {
    line.trim()
        .strip_prefix('*')
        .map(|text| text.trim().to_string())
}

/// Doc-string delimiter. Returns the raw line unchanged.
pub fn doc_string(line: &str) -> Option<String> {
    (line.trim() == "\"\"\"").then(|| line.to_string())
}

/// Tag line. Returns every tag name in order of appearance, duplicates included.
///
/// A line of bare `@` signs carries no tag and is not a tag line.
pub fn tags(line: &str) -> Option<Vec<String>> {
    if !line.trim().starts_with('@') {
        return None;
    }
    let tags: Vec<String> = TAG_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|tag| tag.as_str().to_string())
        .collect();
    (!tags.is_empty()).then_some(tags)
}
