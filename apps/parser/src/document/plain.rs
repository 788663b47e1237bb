use crate::document::{ExtractedText, TextExtractor};
use crate::errors::ParseError;

const FORM_FEED: char = '\u{c}';

/// Plain-text documents. Form feeds mark page breaks; invalid UTF-8 is replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ParseError> {
        let raw = String::from_utf8_lossy(bytes);
        if raw.is_empty() {
            return Ok(ExtractedText::default());
        }
        let page_count = raw.matches(FORM_FEED).count() as u32 + 1;
        let text: String = raw.split(FORM_FEED).collect();
        Ok(ExtractedText { text, page_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_pages() {
        let out = PlainTextExtractor.extract(b"").unwrap();
        assert_eq!(out, ExtractedText::default());
    }

    #[test]
    fn test_form_feeds_split_pages_without_separator() {
        let out = PlainTextExtractor.extract(b"page one\x0cpage two").unwrap();
        assert_eq!(out.page_count, 2);
        assert_eq!(out.text, "page onepage two");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let out = PlainTextExtractor.extract(&[b'J', 0xff, b'D']).unwrap();
        assert_eq!(out.page_count, 1);
        assert!(out.text.starts_with('J') && out.text.ends_with('D'));
    }
}
