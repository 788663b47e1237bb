use serde::Serialize;

use crate::models::record::ResumeRecord;

/// Categorised view of a [`ResumeRecord`], grouped the way reviewers read a resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSummary {
    pub file_info: FileInfo,
    pub personal_info: PersonalInfo,
    pub education: EducationInfo,
    pub professional: ProfessionalInfo,
    pub raw_extracted_data: ResumeRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub filename: Option<String>,
    pub size_bytes: usize,
    pub pages: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationInfo {
    pub institution: Option<String>,
    pub degree: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalInfo {
    pub current_designation: Option<String>,
    pub companies: Vec<String>,
    pub total_experience: Option<String>,
    pub skills: Vec<String>,
}

impl ResumeSummary {
    pub fn new(record: ResumeRecord, filename: Option<String>, size_bytes: usize) -> Self {
        Self {
            file_info: FileInfo {
                filename,
                size_bytes,
                pages: record.no_of_pages,
            },
            personal_info: PersonalInfo {
                name: record.name.clone(),
                email: record.email.clone(),
                phone: record.mobile_number.clone(),
            },
            education: EducationInfo {
                institution: record.college_name.clone(),
                degree: record.degree.clone(),
            },
            professional: ProfessionalInfo {
                current_designation: record.designation.clone(),
                companies: record.company_names.iter().cloned().collect(),
                total_experience: record.total_experience.clone(),
                skills: record.skills.clone(),
            },
            raw_extracted_data: record,
        }
    }
}
