//! PDF text extraction using lopdf and pdf-extract.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{Result, map_read_error};
use crate::error::AcquisitionError;

/// Extract the text of each page, in page order.
///
/// Pages with no extractable text come back as empty strings; the caller
/// decides how to join them.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    let data = fs::read(path).map_err(|e| map_read_error(e, path))?;

    let mut doc = Document::load_mem(&data)
        .map_err(|e| AcquisitionError::Read(format!("failed to parse PDF: {}", e)))?;

    // Handle PDFs with empty-password encryption; anything stronger is
    // unreadable for our purposes.
    let raw_data = if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(AcquisitionError::Read("PDF is encrypted".to_string()));
        }
        debug!("decrypted PDF with empty password");
        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| AcquisitionError::Read(format!("failed to save decrypted PDF: {}", e)))?;
        decrypted
    } else {
        data
    };

    let page_count = doc.get_pages().len();
    if page_count == 0 {
        return Ok(Vec::new());
    }

    let full_text = pdf_extract::extract_text_from_mem(&raw_data)
        .map_err(|e| AcquisitionError::Read(format!("failed to extract text: {}", e)))?;

    debug!("loaded PDF with {} pages", page_count);
    Ok(split_into_pages(&full_text, page_count))
}

/// Apportion extracted text across pages by line count.
///
/// pdf-extract yields one text stream for the whole document; an even
/// line-count split preserves page order well enough for section-scoped
/// matching. The last page keeps the remainder lines.
fn split_into_pages(text: &str, page_count: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let lines_per_page = (lines.len() / page_count).max(1);

    (0..page_count)
        .map(|page| {
            let start = (page * lines_per_page).min(lines.len());
            let end = if page == page_count - 1 {
                lines.len()
            } else {
                ((page + 1) * lines_per_page).min(lines.len())
            };
            lines[start..end].join("\n").trim().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_single_page_keeps_everything() {
        let pages = split_into_pages("line one\nline two\nline three", 1);
        assert_eq!(pages, vec!["line one\nline two\nline three".to_string()]);
    }

    #[test]
    fn test_split_remainder_goes_to_last_page() {
        let pages = split_into_pages("a\nb\nc\nd\ne", 2);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], "a\nb");
        assert_eq!(pages[1], "c\nd\ne");
    }

    #[test]
    fn test_split_more_pages_than_lines() {
        let pages = split_into_pages("only", 3);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], "only");
        assert_eq!(pages[1], "");
        assert_eq!(pages[2], "");
    }
}
