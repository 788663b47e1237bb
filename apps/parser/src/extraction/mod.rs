// Field extractors. Each one is a pure function over the document text (and,
// where it needs them, entity annotations). None of them fail: a miss is the
// field's empty value.

pub mod company;
pub mod contact;
pub mod degree;
pub mod designation;
pub mod education;
pub mod experience;
pub mod name;
pub mod skills;

pub use company::extract_companies;
pub use contact::{extract_email, extract_phone};
pub use degree::extract_degree;
pub use designation::extract_designation;
pub use education::extract_college;
pub use experience::extract_experience;
pub use name::{extract_name, header_window};
pub use skills::extract_skills;

/// Collapses whitespace runs to single spaces and trims.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Institution keywords shared by the education extractor and the company deny-list.
pub(crate) const INSTITUTION_KEYWORDS: &[&str] =
    &["university", "college", "institute", "school", "institution"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  State \n\t University  "),
            "State University"
        );
        assert_eq!(normalize_whitespace("\n \n"), "");
    }
}
