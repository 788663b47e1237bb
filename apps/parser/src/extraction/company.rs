use std::collections::BTreeSet;

use tracing::debug;

use super::INSTITUTION_KEYWORDS;
use crate::annotator::Entity;

/// Substrings that mark an ORGANIZATION span as something other than an employer.
const COMPANY_DENY_LIST: &[&str] = &[
    "bachelor of technology",
    "master of science",
    "phd",
    "degree",
    "certification",
    "certifications",
    "version control",
    "cicd",
    "iac",
    "rbac",
    "api management",
    "cloud security",
    "hands",
];

/// Bullet glyphs left at the start of spans by PDF extraction, including the
/// UTF-8 bullet mis-decoded as Windows-1252.
const BULLET_ARTIFACTS: &[&str] = &["•", "â€¢", "▪", "●"];

/// Trimmed length bounds, exclusive, in characters.
const MIN_COMPANY_CHARS: usize = 2;
const MAX_COMPANY_CHARS: usize = 50;

/// ORGANIZATION spans that survive the false-positive filters, deduplicated.
pub fn extract_companies(entities: &[Entity]) -> BTreeSet<String> {
    let companies: BTreeSet<String> = entities
        .iter()
        .filter(|e| e.is_organization())
        .map(|e| e.text.trim())
        .filter(|t| !is_denied(t))
        .filter(|t| !starts_with_bullet(t))
        .filter(|t| has_plausible_length(t))
        .map(String::from)
        .collect();
    debug!("Kept {} company names", companies.len());
    companies
}

fn is_denied(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    INSTITUTION_KEYWORDS
        .iter()
        .chain(COMPANY_DENY_LIST)
        .any(|fp| lower.contains(fp))
}

fn starts_with_bullet(candidate: &str) -> bool {
    BULLET_ARTIFACTS.iter().any(|b| candidate.starts_with(b))
}

fn has_plausible_length(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len > MIN_COMPANY_CHARS && len < MAX_COMPANY_CHARS
}
