//! Text extraction — turns uploaded PDF bytes into per-page plain text.

use lopdf::Document;

use crate::errors::AppError;

/// Plain text pulled out of one PDF document. Derived once, never mutated.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Per-page text in document order. A page without an extractable text
    /// layer contributes an empty string, not an error.
    pub pages: Vec<String>,
    /// All pages joined with a newline separator.
    pub full_text: String,
    /// Number of pages, whether or not any page yielded text.
    pub page_count: usize,
}

/// Extracts text and page count from PDF bytes.
///
/// The only fatal condition is an unparseable byte stream (or a document over
/// the `max_pages` ceiling, which bounds extraction work on pathological
/// inputs). Everything downstream must treat empty text as a valid, if
/// uninformative, result.
pub fn extract(bytes: &[u8], max_pages: usize) -> Result<ExtractedText, AppError> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| AppError::DocumentRead(format!("not a parseable PDF: {e}")))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let page_count = page_numbers.len();
    if page_count > max_pages {
        return Err(AppError::DocumentRead(format!(
            "document has {page_count} pages, limit is {max_pages}"
        )));
    }

    let mut pages = Vec::with_capacity(page_count);
    for page_no in page_numbers {
        // A page that fails text extraction (no text layer, scanned image,
        // odd encoding) degrades to an empty string.
        let text = doc.extract_text(&[page_no]).unwrap_or_default();
        pages.push(text);
    }

    let full_text = pages.join("\n");

    Ok(ExtractedText {
        pages,
        full_text,
        page_count,
    })
}
