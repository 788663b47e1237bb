use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`, tld at least two letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Phone shapes in priority order. The first pattern with any match decides.
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 9876543210
        r"\b\d{10}\b",
        // 555-123-4567, 555.123.4567
        r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        // (555) 123-4567
        r"\(\d{3}\)\s?\d{3}[-.]?\d{4}\b",
        // +1-555-123-4567, +91 9876 543 210
        r"\+\d{1,3}[-. ]?\d{3,4}[-. ]?\d{3,4}[-. ]?\d{3,4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// First email address in document order.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First match of the highest-priority phone pattern that matches at all.
/// The number is returned as written.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}
