//! Error types for the polex-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the polex library.
#[derive(Error, Debug)]
pub enum PolexError {
    /// Document acquisition error.
    #[error("acquisition error: {0}")]
    Acquisition(#[from] AcquisitionError),

    /// Output-side error.
    #[error("output error: {0}")]
    Output(#[from] OutputError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while obtaining raw text from a source document.
///
/// These never escape [`crate::PolicyParser::parse`]: the assembler converts
/// all of them into the all-absent default record.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    /// The document does not exist.
    #[error("document not found: {0}")]
    NotFound(PathBuf),

    /// The document exists but cannot be read.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The file extension is neither `.txt` nor `.pdf`.
    #[error("unsupported file type: .{0} (use .txt or .pdf)")]
    UnsupportedFormat(String),

    /// PDF text extraction was requested but is not available.
    #[error("PDF support is not available in this build (enable the `pdf` feature)")]
    CapabilityUnavailable,

    /// Any other failure while reading the document.
    #[error("error reading document: {0}")]
    Read(String),
}

/// Errors raised while persisting the extracted record.
///
/// Unlike acquisition errors these propagate to the caller: a caller needs
/// to know its output was not saved.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output path cannot be written to.
    #[error("permission denied writing to: {0}")]
    PermissionDenied(PathBuf),

    /// Any other failure while writing the record.
    #[error("error writing JSON file: {0}")]
    Write(String),
}

/// Result type for the polex library.
pub type Result<T> = std::result::Result<T, PolexError>;
