//! Resume field extraction.
//!
//! A document goes through text extraction, one entity-annotation pass over the
//! full text and one over the header, and then a set of independent field
//! extractors whose results are assembled into a flat [`ResumeRecord`].

pub mod annotator;
pub mod config;
pub mod document;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod parser;

pub use annotator::{Entity, EntityAnnotator, EntityLabel};
pub use document::{Document, DocumentKind};
pub use errors::ParseError;
pub use models::{ResumeRecord, ResumeSummary};
pub use parser::{assemble, ResumeParser};
