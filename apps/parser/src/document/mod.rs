//! Text extraction: document bytes in, linear text and page count out.

use std::path::Path;

use bytes::Bytes;

use crate::errors::ParseError;

pub mod pdf;
pub mod plain;

pub use pdf::PdfTextExtractor;
pub use plain::PlainTextExtractor;

/// Output of a text extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: u32,
}

/// Turns raw document bytes into text. An unreadable page yields empty text;
/// only a document that cannot be opened at all is an error.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ParseError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn from_content_type(content_type: &str) -> Result<Self, ParseError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Ok(DocumentKind::Pdf),
            "text/plain" => Ok(DocumentKind::PlainText),
            _ => Err(ParseError::UnsupportedContentType(content_type.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") | Some("text") => Ok(DocumentKind::PlainText),
            _ => Err(ParseError::UnsupportedContentType(format!(
                "unrecognised file extension for {}",
                path.display()
            ))),
        }
    }

    fn extractor(self) -> &'static dyn TextExtractor {
        match self {
            DocumentKind::Pdf => &PdfTextExtractor,
            DocumentKind::PlainText => &PlainTextExtractor,
        }
    }
}

/// A document handed to the parser.
#[derive(Debug, Clone)]
pub struct Document {
    pub bytes: Bytes,
    pub kind: DocumentKind,
    pub filename: Option<String>,
}

impl Document {
    pub fn new(bytes: impl Into<Bytes>, kind: DocumentKind) -> Self {
        Self {
            bytes: bytes.into(),
            kind,
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Reads a document from disk, picking the extractor from the file extension.
    pub async fn from_path(path: &Path) -> Result<Self, ParseError> {
        let kind = DocumentKind::from_path(path)?;
        let bytes = tokio::fs::read(path).await?;
        let document = Document::new(bytes, kind);
        Ok(match path.file_name() {
            Some(name) => document.with_filename(name.to_string_lossy()),
            None => document,
        })
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn extract_text(&self) -> Result<ExtractedText, ParseError> {
        self.kind.extractor().extract(&self.bytes)
    }
}
