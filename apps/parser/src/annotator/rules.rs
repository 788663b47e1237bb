//! Rule-based annotator, the deterministic fallback when no NER service is configured.
//!
//! ORGANIZATION: a run of capitalised words containing an organisation or
//! institution suffix ("Acme Technologies", "State University of Texas").
//! PERSON: a line made of 2–4 capitalised alphabetic words, none of which is a
//! suffix or a resume heading word.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::{AnnotatorError, Entity, EntityAnnotator};

/// Capitalised word run, allowing lowercase connectors inside the run.
static CAPITALISED_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][A-Za-z0-9&.'-]*(?:[ \t]+(?:(?:of|and|for|the)\b|&|[A-Z][A-Za-z0-9&.'-]*))*")
        .unwrap()
});

const ORG_SUFFIXES: &[&str] = &[
    "Inc",
    "Ltd",
    "LLC",
    "LLP",
    "Corp",
    "Corporation",
    "Company",
    "Co",
    "Group",
    "Technologies",
    "Technology",
    "Solutions",
    "Systems",
    "Services",
    "Labs",
    "Bank",
    "Consulting",
    "Pvt",
    "Limited",
    "University",
    "College",
    "Institute",
    "School",
    "Academy",
];

const CONNECTORS: &[&str] = &["of", "and", "for", "the", "&"];

/// Words that make a capitalised line a heading or a job title rather than a name.
const NON_NAME_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "profile",
    "summary",
    "objective",
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
    "contact",
    "technical",
    "professional",
    "work",
    "engineer",
    "developer",
    "manager",
    "analyst",
    "scientist",
    "consultant",
    "architect",
    "intern",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnnotator;

#[async_trait]
impl EntityAnnotator for RuleBasedAnnotator {
    async fn annotate(&self, text: &str) -> Result<Vec<Entity>, AnnotatorError> {
        Ok(annotate_text(text))
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

/// Entities in document order.
pub fn annotate_text(text: &str) -> Vec<Entity> {
    let mut found: Vec<(usize, Entity)> = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        if let Some(offset) = person_line(line) {
            found.push((line_start + offset, Entity::person(line.trim())));
        }
        for m in CAPITALISED_RUN_RE.find_iter(line) {
            if let Some(org) = organization_run(m.as_str()) {
                found.push((line_start + m.start(), Entity::organization(org)));
            }
        }
        line_start += line.len() + 1;
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, entity)| entity).collect()
}

/// Offset of the trimmed line within `line` if it reads like a personal name.
fn person_line(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return None;
    }
    let looks_like_name = words.iter().all(|w| {
        let mut chars = w.chars();
        chars.next().is_some_and(char::is_uppercase)
            && chars.all(char::is_alphabetic)
            && !is_suffix(w)
            && !NON_NAME_WORDS.contains(&w.to_lowercase().as_str())
    });
    looks_like_name.then(|| line.len() - line.trim_start().len())
}

fn organization_run(run: &str) -> Option<String> {
    let mut words: Vec<&str> = run.split_whitespace().collect();
    while words.last().is_some_and(|w| CONNECTORS.contains(w)) {
        words.pop();
    }
    if words.len() < 2 || !words.iter().any(|w| is_suffix(w)) {
        return None;
    }
    Some(words.join(" "))
}

fn is_suffix(word: &str) -> bool {
    let bare = word.trim_end_matches(['.', ',', '\'']);
    ORG_SUFFIXES.contains(&bare)
}
