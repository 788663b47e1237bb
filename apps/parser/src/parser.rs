//! Resume parser pipeline. Text extraction and entity annotation feed the record assembler.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::annotator::{Entity, EntityAnnotator, HttpAnnotator, RuleBasedAnnotator};
use crate::config::Config;
use crate::document::Document;
use crate::errors::ParseError;
use crate::extraction::{
    extract_college, extract_companies, extract_degree, extract_designation, extract_email,
    extract_experience, extract_name, extract_phone, extract_skills, header_window,
};
use crate::models::ResumeRecord;

/// Runs every field extractor once and merges the results.
///
/// `entities` annotate the full text; `header_entities` annotate only the
/// header window and feed the name extractor. Pure: same input, same record.
pub fn assemble(
    text: &str,
    page_count: u32,
    entities: &[Entity],
    header_entities: &[Entity],
) -> ResumeRecord {
    ResumeRecord {
        name: extract_name(text, header_entities),
        email: extract_email(text),
        mobile_number: extract_phone(text),
        skills: extract_skills(text),
        college_name: extract_college(text, entities),
        degree: extract_degree(text),
        designation: extract_designation(text),
        company_names: extract_companies(entities),
        no_of_pages: page_count,
        total_experience: extract_experience(text),
    }
}

/// One parser serves many documents; it holds no per-document state.
#[derive(Clone)]
pub struct ResumeParser {
    annotator: Arc<dyn EntityAnnotator>,
}

impl ResumeParser {
    pub fn new(annotator: Arc<dyn EntityAnnotator>) -> Self {
        Self { annotator }
    }

    /// HTTP annotator when `NER_SERVICE_URL` is set, rule-based otherwise.
    pub fn from_config(config: &Config) -> Result<Self, ParseError> {
        let annotator: Arc<dyn EntityAnnotator> = match &config.ner_service_url {
            Some(url) => Arc::new(HttpAnnotator::new(
                url.clone(),
                Duration::from_secs(config.ner_timeout_secs),
                config.ner_max_retries,
            )?),
            None => Arc::new(RuleBasedAnnotator),
        };
        Ok(Self::new(annotator))
    }

    pub fn annotator_backend(&self) -> &'static str {
        self.annotator.backend()
    }

    /// Extracts one record. Fails only when the document cannot be read or the
    /// annotator fails; a field that isn't found is simply left empty.
    pub async fn parse(&self, document: &Document) -> Result<ResumeRecord, ParseError> {
        let doc = document.clone();
        let extracted = tokio::task::spawn_blocking(move || doc.extract_text())
            .await
            .map_err(|e| ParseError::Internal(e.into()))??;

        let (entities, header_entities) = if extracted.text.trim().is_empty() {
            debug!("Document has no text, skipping entity annotation");
            (Vec::new(), Vec::new())
        } else {
            let entities = self.annotator.annotate(&extracted.text).await?;
            let header_entities = self
                .annotator
                .annotate(header_window(&extracted.text))
                .await?;
            (entities, header_entities)
        };

        let record = assemble(
            &extracted.text,
            extracted.page_count,
            &entities,
            &header_entities,
        );

        info!(
            "Parsed {}: pages={}, fields={}, entities={}",
            document.filename.as_deref().unwrap_or("<memory>"),
            record.no_of_pages,
            record.populated_fields(),
            entities.len()
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use crate::annotator::AnnotatorError;
    use crate::document::DocumentKind;

    const RESUME: &str = "Priya Sharma
priya.sharma@example.com | Phone: 9876543210
Senior Software Engineer

SUMMARY
8+ years of experience building backend systems with Python, Django and PostgreSQL on AWS.

EXPERIENCE
Senior Software Engineer, Initech Solutions (2019 - Present)
Built Kafka pipelines and Docker based deployments.
Software Engineer, Globex Corp (2015 - 2019)

EDUCATION
Vellore Institute of Technology
B.Tech in Computer Science, 2015
";

    /// Returns a fixed entity list and counts calls.
    struct StubAnnotator {
        entities: Vec<Entity>,
        calls: AtomicUsize,
    }

    impl StubAnnotator {
        fn new(entities: Vec<Entity>) -> Self {
            Self {
                entities,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EntityAnnotator for StubAnnotator {
        async fn annotate(&self, _text: &str) -> Result<Vec<Entity>, AnnotatorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.entities.clone())
        }

        fn backend(&self) -> &'static str {
            "stub"
        }
    }

    struct FailingAnnotator;

    #[async_trait]
    impl EntityAnnotator for FailingAnnotator {
        async fn annotate(&self, _text: &str) -> Result<Vec<Entity>, AnnotatorError> {
            Err(AnnotatorError::Api {
                status: 400,
                message: "model not loaded".into(),
            })
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    fn text_document(text: &str) -> Document {
        Document::new(text.as_bytes().to_vec(), DocumentKind::PlainText)
    }

    #[tokio::test]
    async fn test_full_pipeline_with_rule_based_annotator() {
        let parser = ResumeParser::new(Arc::new(RuleBasedAnnotator));
        let record = parser.parse(&text_document(RESUME)).await.unwrap();

        let expected = ResumeRecord {
            name: Some("Priya Sharma".into()),
            email: Some("priya.sharma@example.com".into()),
            mobile_number: Some("9876543210".into()),
            skills: ["Python", "Go", "Django", "SQL", "PostgreSQL", "Kafka", "AWS", "Docker"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            college_name: Some("Vellore Institute of Technology".into()),
            degree: Some("B.Tech".into()),
            designation: Some("Senior Software Engineer".into()),
            company_names: ["Globex Corp", "Initech Solutions"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            no_of_pages: 1,
            total_experience: Some("8 years".into()),
        };
        assert_eq!(record, expected);
    }

    #[tokio::test]
    async fn test_annotator_called_for_full_text_and_header() {
        let stub = Arc::new(StubAnnotator::new(vec![Entity::person("John Smith")]));
        let parser = ResumeParser::new(stub.clone());
        let record = parser
            .parse(&text_document("John Smith\nSoftware Engineer\njohn@example.com"))
            .await
            .unwrap();

        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
        assert_eq!(record.name.as_deref(), Some("John Smith"));
        assert_eq!(record.email.as_deref(), Some("john@example.com"));
        assert_eq!(record.designation.as_deref(), Some("Software Engineer"));
    }

    #[tokio::test]
    async fn test_blank_document_skips_annotation() {
        let stub = Arc::new(StubAnnotator::new(vec![Entity::organization("Initech")]));
        let parser = ResumeParser::new(stub.clone());
        let record = parser.parse(&text_document("  \n ")).await.unwrap();

        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            record,
            ResumeRecord {
                no_of_pages: 1,
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_annotator_failure_is_fatal_and_undecorated() {
        let parser = ResumeParser::new(Arc::new(FailingAnnotator));
        let err = parser.parse(&text_document(RESUME)).await.unwrap_err();
        match err {
            ParseError::Annotation(AnnotatorError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "model not loaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreadable_pdf_is_fatal() {
        let parser = ResumeParser::new(Arc::new(RuleBasedAnnotator));
        let document = Document::new(b"%PDF-garbage".to_vec(), DocumentKind::Pdf);
        let err = parser.parse(&document).await.unwrap_err();
        assert!(matches!(err, ParseError::UnreadableDocument(_)));
    }

    #[tokio::test]
    async fn test_pdf_page_count_flows_into_record() {
        let bytes = crate::document::pdf::tests::pdf_with_pages(&["Jane Doe", "Initech"]);
        let parser = ResumeParser::new(Arc::new(RuleBasedAnnotator));
        let record = parser
            .parse(&Document::new(bytes, DocumentKind::Pdf))
            .await
            .unwrap();
        assert_eq!(record.no_of_pages, 2);
    }

    #[tokio::test]
    async fn test_fields_extracted_from_pdf_text() {
        let bytes = crate::document::pdf::tests::pdf_with_pages(&[
            "Jane Doe",
            "Initech Solutions",
        ]);
        let parser = ResumeParser::new(Arc::new(RuleBasedAnnotator));
        let record = parser
            .parse(&Document::new(bytes, DocumentKind::Pdf))
            .await
            .unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert!(record.company_names.contains("Initech Solutions"));
        assert_eq!(record.no_of_pages, 2);
    }

    #[tokio::test]
    async fn test_parsing_is_idempotent() {
        let parser = ResumeParser::new(Arc::new(RuleBasedAnnotator));
        let document = text_document(RESUME);
        let first = serde_json::to_string(&parser.parse(&document).await.unwrap()).unwrap();
        let second = serde_json::to_string(&parser.parse(&document).await.unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_assemble_uses_header_entities_for_name_only() {
        let entities = vec![Entity::organization("Initech"), Entity::person("Not Chosen")];
        let header = vec![Entity::person("Jane Doe")];
        let record = assemble("", 0, &entities, &header);
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert!(record.company_names.contains("Initech"));
        assert_eq!(record.no_of_pages, 0);
    }

    #[test]
    fn test_from_config_picks_backend() {
        let mut config = Config {
            ner_service_url: None,
            ner_timeout_secs: 5,
            ner_max_retries: 2,
            rust_log: "info".into(),
        };
        assert_eq!(
            ResumeParser::from_config(&config).unwrap().annotator_backend(),
            "rules"
        );

        config.ner_service_url = Some("http://localhost:8000/ner".into());
        assert_eq!(
            ResumeParser::from_config(&config).unwrap().annotator_backend(),
            "http"
        );
    }
}
