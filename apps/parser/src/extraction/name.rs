use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::annotator::Entity;

/// Header window, in characters, that the name annotation pass looks at.
pub const NAME_WINDOW_CHARS: usize = 1000;

/// How many non-empty leading lines the line fallback inspects.
const NAME_FALLBACK_LINES: usize = 10;

/// PERSON spans that NER models routinely get wrong on resumes.
const NAME_DENY_LIST: &[&str] = &[
    "microsoft azure",
    "bachelor of technology",
    "master of technology",
    "bachelor of engineering",
    "master of science",
    "machine learning",
    "google cloud",
];

static TEN_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{10}").unwrap());

/// First `NAME_WINDOW_CHARS` characters of `text`, on a char boundary.
pub fn header_window(text: &str) -> &str {
    match text.char_indices().nth(NAME_WINDOW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Candidate's name: first acceptable PERSON annotation from the header window,
/// else the first name-shaped line near the top of the document.
pub fn extract_name(text: &str, header_entities: &[Entity]) -> Option<String> {
    name_from_entities(header_entities).or_else(|| {
        debug!("No usable PERSON entity in header, trying line heuristic");
        name_from_lines(text)
    })
}

fn name_from_entities(entities: &[Entity]) -> Option<String> {
    entities
        .iter()
        .filter(|e| e.is_person())
        .map(|e| e.text.trim())
        .find(|t| has_multiple_tokens(t) && !is_denied_name(t))
        .map(String::from)
}

fn name_from_lines(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(NAME_FALLBACK_LINES)
        .filter(|l| !is_contact_line(l))
        .find(|l| looks_like_name(l))
        .map(String::from)
}

fn has_multiple_tokens(text: &str) -> bool {
    text.split_whitespace().count() >= 2
}

fn is_denied_name(text: &str) -> bool {
    NAME_DENY_LIST.contains(&text.to_lowercase().as_str())
}

fn is_contact_line(line: &str) -> bool {
    line.contains('@') || TEN_DIGITS_RE.is_match(line)
}

fn looks_like_name(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&words.len()) && words.iter().all(|w| w.chars().all(char::is_alphabetic))
}
