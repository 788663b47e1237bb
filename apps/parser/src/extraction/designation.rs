/// Job titles, most specific first so "Senior Software Engineer" is not
/// swallowed by "Software Engineer". A plain "Software Engineer"-first list
/// would report the generic title for the same text; this order is deliberate.
pub const DESIGNATION_VOCABULARY: &[&str] = &[
    "Senior Software Engineer",
    "Lead Software Engineer",
    "Software Engineer",
    "Machine Learning Engineer",
    "AI Engineer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Data Engineer",
    "Data Scientist",
    "Research Scientist",
    "Data Analyst",
    "Business Analyst",
    "Product Manager",
    "Project Manager",
    "Program Manager",
    "Engineering Manager",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "Mobile Developer",
    "Solutions Architect",
    "QA Engineer",
];

/// First vocabulary title contained in `text`, case-insensitively.
/// Vocabulary order decides, not document order.
pub fn extract_designation(text: &str) -> Option<String> {
    let text_lower = text.to_lowercase();
    DESIGNATION_VOCABULARY
        .iter()
        .find(|title| text_lower.contains(&title.to_lowercase()))
        .map(|title| title.to_string())
}
