//! Text acquisition from source documents.

#[cfg(feature = "pdf")]
mod pdf;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[cfg(feature = "pdf")]
use tracing::{debug, warn};

use crate::error::AcquisitionError;

/// Result type for acquisition operations.
pub type Result<T> = std::result::Result<T, AcquisitionError>;

/// Obtains raw text from a source document.
///
/// PDF support is a build-time capability (`pdf` feature). It is recorded as
/// an explicit flag at construction so callers can query it before use, and
/// so tests can exercise the unavailable path on any build.
pub struct TextAcquirer {
    pdf_support: bool,
    min_text_length: usize,
}

impl TextAcquirer {
    /// Create an acquirer with the compiled-in PDF capability.
    pub fn new() -> Self {
        Self {
            pdf_support: cfg!(feature = "pdf"),
            min_text_length: 50,
        }
    }

    /// Override PDF support (cannot enable what the build lacks).
    pub fn with_pdf_support(mut self, enabled: bool) -> Self {
        self.pdf_support = enabled && cfg!(feature = "pdf");
        self
    }

    /// Set the extracted-text length below which a warning is logged.
    pub fn with_min_text_length(mut self, length: usize) -> Self {
        self.min_text_length = length;
        self
    }

    /// Whether PDF text extraction is available.
    pub fn pdf_support(&self) -> bool {
        self.pdf_support
    }

    /// Read the full text content of a document.
    ///
    /// Plain-text sources are returned verbatim (UTF-8). PDF sources are
    /// extracted per page; non-empty pages are joined with a newline and a
    /// page with no extractable text contributes nothing.
    pub fn acquire(&self, path: &Path) -> Result<String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "txt" => self.read_text(path),
            "pdf" => self.read_pdf(path),
            other => Err(AcquisitionError::UnsupportedFormat(other.to_string())),
        }
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| map_read_error(e, path))
    }

    #[cfg(feature = "pdf")]
    fn read_pdf(&self, path: &Path) -> Result<String> {
        if !self.pdf_support {
            return Err(AcquisitionError::CapabilityUnavailable);
        }

        let pages = pdf::extract_pages(path)?;
        let text = join_pages(&pages);

        debug!(
            "extracted {} chars from {} pages of {}",
            text.len(),
            pages.len(),
            path.display()
        );
        if text.len() < self.min_text_length {
            warn!(
                "PDF {} yielded only {} chars of text",
                path.display(),
                text.len()
            );
        }

        Ok(text)
    }

    #[cfg(not(feature = "pdf"))]
    fn read_pdf(&self, _path: &Path) -> Result<String> {
        Err(AcquisitionError::CapabilityUnavailable)
    }
}

impl Default for TextAcquirer {
    fn default() -> Self {
        Self::new()
    }
}

/// Join per-page text with single newlines; a page with no extractable text
/// contributes nothing, not a blank line.
#[cfg(any(feature = "pdf", test))]
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map a filesystem read error onto the acquisition taxonomy.
fn map_read_error(e: std::io::Error, path: &Path) -> AcquisitionError {
    match e.kind() {
        ErrorKind::NotFound => AcquisitionError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => AcquisitionError::PermissionDenied(path.to_path_buf()),
        _ => AcquisitionError::Read(e.to_string()),
    }
}
