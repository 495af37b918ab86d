//! Core library for insurance policy extraction.
//!
//! This crate provides:
//! - Text acquisition from plain-text and PDF documents
//! - Whitespace normalization shared by all field matchers
//! - Rule-based field extraction (policy identifiers, dates, amounts)
//! - Completeness validation and JSON export of the extracted record

pub mod error;
pub mod export;
pub mod models;
pub mod policy;
pub mod source;

pub use error::{AcquisitionError, OutputError, PolexError, Result};
pub use export::export_json;
pub use models::config::PolexConfig;
pub use models::policy::{PolicyRecord, ValidationResult};
pub use policy::{ParseReport, PolicyParser, normalize_text};
pub use source::TextAcquirer;
