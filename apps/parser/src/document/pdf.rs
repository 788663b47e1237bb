use lopdf::Document as PdfDocument;
use tracing::{debug, warn};

use crate::document::{ExtractedText, TextExtractor};
use crate::errors::ParseError;

/// PDF text extraction.
///
/// Page text comes from `lopdf`, page by page, concatenated in page order with
/// no separator. A page that fails to extract contributes an empty string. If
/// every page comes back empty, `pdf-extract`'s whole-document pass is tried
/// before settling on empty text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ParseError> {
        let doc = PdfDocument::load_mem(bytes)
            .map_err(|e| ParseError::UnreadableDocument(format!("PDF load failed: {e}")))?;

        let pages = doc.get_pages();
        let page_count = pages.len() as u32;
        let mut text = String::new();

        for page_num in pages.keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => debug!("Page {page_num} has no extractable text: {e}"),
            }
        }

        if text.trim().is_empty() && page_count > 0 {
            text = whole_document_text(bytes);
        }

        debug!(
            "Extracted {} chars from {} PDF pages",
            text.chars().count(),
            page_count
        );
        Ok(ExtractedText { text, page_count })
    }
}

fn whole_document_text(bytes: &[u8]) -> String {
    // pdf-extract panics on some malformed font programs.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("Whole-document PDF text extraction failed, using empty text: {e}");
            String::new()
        }
        Err(_) => {
            warn!("Whole-document PDF text extraction panicked, using empty text");
            String::new()
        }
    }
}
