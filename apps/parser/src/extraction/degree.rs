use std::sync::LazyLock;

use regex::Regex;

/// Degree families in priority order. Each alternation lists abbreviations and
/// full names for one family.
const DEGREE_GROUPS: &[&str] = &[
    r"(?i)\b(B\.?Tech|Bachelor of Technology|BE|Bachelor of Engineering)\b",
    r"(?i)\b(M\.?Tech|Master of Technology|ME|Master of Engineering)\b",
    r"(?i)\b(PhD|Ph\.D|Doctor of Philosophy)\b",
    r"(?i)\b(MBA|Master of Business Administration)\b",
    r"(?i)\b(BS|Bachelor of Science|MS|Master of Science)\b",
    r"(?i)\b(BA|Bachelor of Arts|MA|Master of Arts)\b",
];

static DEGREE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| DEGREE_GROUPS.iter().map(|p| Regex::new(p).unwrap()).collect());

/// The matched text of the first degree family found anywhere in `text`.
/// Family priority beats document order; the match is returned as written.
pub fn extract_degree(text: &str) -> Option<String> {
    DEGREE_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bachelor_family_beats_document_order() {
        let text = "M.Tech in Computer Science, 2018\nB.Tech in Electronics, 2016";
        assert_eq!(extract_degree(text).as_deref(), Some("B.Tech"));
    }

    #[test]
    fn test_match_is_verbatim_not_canonical() {
        assert_eq!(
            extract_degree("MASTER OF TECHNOLOGY (VLSI)").as_deref(),
            Some("MASTER OF TECHNOLOGY")
        );
        assert_eq!(extract_degree("btech, 2015").as_deref(), Some("btech"));
    }

    #[test]
    fn test_doctorate_and_mba() {
        assert_eq!(
            extract_degree("Ph.D. in Physics").as_deref(),
            Some("Ph.D")
        );
        assert_eq!(extract_degree("Executive MBA").as_deref(), Some("MBA"));
    }

    #[test]
    fn test_science_and_arts() {
        assert_eq!(
            extract_degree("Master of Science in Statistics").as_deref(),
            Some("Master of Science")
        );
        assert_eq!(extract_degree("BA (Hons) History").as_deref(), Some("BA"));
    }

    #[test]
    fn test_abbreviations_need_word_boundaries() {
        assert_eq!(extract_degree("Fabric samples from Obama's era"), None);
        assert_eq!(extract_degree(""), None);
    }
}
