use std::sync::LazyLock;

use regex::Regex;

/// Tried in order against the lowercased text; group 1 is the year count.
static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "5+ years of experience"
        r"(\d+)\+?\s*years?\s*(?:of\s+)?experience",
        // "7 years in fintech"
        r"(\d+)\+?\s*years?\s*in",
        // "experience: 4 years"
        r"experience.*?(\d+)\+?\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// `"<N> years"` from the first pattern that matches anywhere. When a resume
/// states several durations, the first one the winning pattern finds is used.
pub fn extract_experience(text: &str) -> Option<String> {
    let text_lower = text.to_lowercase();
    EXPERIENCE_PATTERNS
        .iter()
        .find_map(|re| re.captures(&text_lower))
        .and_then(|caps| caps.get(1))
        .map(|years| format!("{} years", years.as_str()))
}
