use thiserror::Error;

use crate::annotator::AnnotatorError;

/// Record-level failure. Any of these aborts extraction for the whole document;
/// a field that simply isn't found is never an error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Entity annotation failed: {0}")]
    Annotation(#[from] AnnotatorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ParseError {
    /// Short machine-readable code, used in the CLI's error output.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnreadableDocument(_) => "UNREADABLE_DOCUMENT",
            ParseError::UnsupportedContentType(_) => "UNSUPPORTED_CONTENT_TYPE",
            ParseError::Annotation(_) => "ANNOTATION_ERROR",
            ParseError::Io(_) => "IO_ERROR",
            ParseError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
