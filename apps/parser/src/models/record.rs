use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Flat result of one extraction call. Field order here is the serialized order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    /// Vocabulary order, each skill once.
    pub skills: Vec<String>,
    pub college_name: Option<String>,
    pub degree: Option<String>,
    pub designation: Option<String>,
    /// Set semantics. Kept sorted so identical input serializes identically.
    pub company_names: BTreeSet<String>,
    pub no_of_pages: u32,
    /// `"<N> years"`
    pub total_experience: Option<String>,
}

impl ResumeRecord {
    /// Number of optional fields that carry a value. Used for log summaries.
    pub fn populated_fields(&self) -> usize {
        [
            self.name.is_some(),
            self.email.is_some(),
            self.mobile_number.is_some(),
            !self.skills.is_empty(),
            self.college_name.is_some(),
            self.degree.is_some(),
            self.designation.is_some(),
            !self.company_names.is_empty(),
            self.total_experience.is_some(),
        ]
        .into_iter()
        .filter(|&present| present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_record_serializes_nulls_and_empty_arrays() {
        let value = serde_json::to_value(ResumeRecord::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": null,
                "email": null,
                "mobile_number": null,
                "skills": [],
                "college_name": null,
                "degree": null,
                "designation": null,
                "company_names": [],
                "no_of_pages": 0,
                "total_experience": null
            })
        );
    }

    #[test]
    fn test_field_order_is_stable() {
        let json = serde_json::to_string(&ResumeRecord::default()).unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let pages_pos = json.find("\"no_of_pages\"").unwrap();
        let exp_pos = json.find("\"total_experience\"").unwrap();
        assert!(name_pos < pages_pos && pages_pos < exp_pos);
    }

    #[test]
    fn test_company_names_serialize_as_array() {
        let record = ResumeRecord {
            company_names: ["Globex".to_string(), "Acme Corp".to_string()]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["company_names"], json!(["Acme Corp", "Globex"]));
    }

    #[test]
    fn test_populated_fields_counts_optional_values() {
        let record = ResumeRecord {
            name: Some("Jane Doe".into()),
            skills: vec!["Rust".into()],
            no_of_pages: 2,
            ..Default::default()
        };
        assert_eq!(record.populated_fields(), 2);
        assert_eq!(ResumeRecord::default().populated_fields(), 0);
    }
}
