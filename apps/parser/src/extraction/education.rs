use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{normalize_whitespace, INSTITUTION_KEYWORDS};
use crate::annotator::Entity;

/// An "education" header, then the first line (possibly several lines later)
/// that names an institution.
static EDUCATION_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ims)education.*?\n(.*?(?:university|college|institute|school|institution).*?)(?:\n|$)",
    )
    .unwrap()
});

/// A line naming an institution directly followed by a line naming a degree.
static INSTITUTION_THEN_DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^([^\n]*(?:university|college|institute|school|institution)[^\n]*)\n[^\n]*(?:degree|bachelor|master|b\.?tech|m\.?tech)",
    )
    .unwrap()
});

/// Candidate length bounds, exclusive, in characters.
const MIN_CANDIDATE_CHARS: usize = 5;
const MAX_CANDIDATE_CHARS: usize = 100;

/// ORGANIZATION fallback must be longer than this.
const MIN_ENTITY_CHARS: usize = 10;

/// Best institution mention: section regex, then institution/degree line pair,
/// then the first institution-like ORGANIZATION entity.
pub fn extract_college(text: &str, entities: &[Entity]) -> Option<String> {
    [&*EDUCATION_SECTION_RE, &*INSTITUTION_THEN_DEGREE_RE]
        .into_iter()
        .find_map(|re| first_plausible_capture(re, text))
        .or_else(|| {
            debug!("No education section match, falling back to ORGANIZATION entities");
            institution_from_entities(entities)
        })
}

fn first_plausible_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| normalize_whitespace(m.as_str()))
        .find(|candidate| is_plausible_length(candidate))
}

fn is_plausible_length(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len > MIN_CANDIDATE_CHARS && len < MAX_CANDIDATE_CHARS
}

fn institution_from_entities(entities: &[Entity]) -> Option<String> {
    entities
        .iter()
        .filter(|e| e.is_organization())
        .find(|e| {
            let lower = e.text.to_lowercase();
            INSTITUTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
                && e.text.chars().count() > MIN_ENTITY_CHARS
        })
        .map(|e| e.text.trim().to_string())
}
