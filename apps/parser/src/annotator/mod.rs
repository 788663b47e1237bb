//! Entity annotation: the named-entity pass the field extractors consume.
//!
//! The extractors only ever look at `PERSON` and `ORGANIZATION` spans. Which
//! backend produces them is chosen at startup: an external NER service when
//! `NER_SERVICE_URL` is configured, the rule-based annotator otherwise.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod http;
pub mod rules;

pub use http::HttpAnnotator;
pub use rules::RuleBasedAnnotator;

#[derive(Debug, Error)]
pub enum AnnotatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NER service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("NER service unavailable after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("NER service returned no entities payload")]
    EmptyContent,
}

/// Entity label as far as the extractors care. Anything else is carried as
/// `Other` and ignored downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Other(String),
}

impl EntityLabel {
    /// Maps spaCy / CoNLL style label spellings onto the labels we consume.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" | "ORGANISATION" => EntityLabel::Organization,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

/// One labelled span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: &str) -> Self {
        Self {
            text: text.into(),
            label: EntityLabel::from_label(label),
        }
    }

    pub fn person(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: EntityLabel::Person,
        }
    }

    pub fn organization(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: EntityLabel::Organization,
        }
    }

    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }

    pub fn is_organization(&self) -> bool {
        self.label == EntityLabel::Organization
    }
}

/// The annotator seam. Implement this to swap NER backends without touching
/// the extractors or the parser pipeline.
///
/// Carried by `ResumeParser` as `Arc<dyn EntityAnnotator>`.
#[async_trait]
pub trait EntityAnnotator: Send + Sync {
    /// Entities in `text`, document order preferred.
    async fn annotate(&self, text: &str) -> Result<Vec<Entity>, AnnotatorError>;

    /// "http" | "rules", for log lines.
    fn backend(&self) -> &'static str;
}
