//! Record assembler: acquisition, normalization, extraction, validation.

use std::path::Path;
use std::time::Instant;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::models::policy::{PolicyRecord, ValidationResult};
use crate::source::TextAcquirer;

use super::normalize::normalize_text;
use super::rules::{ScalarField, extract_coverage_details, extract_scalar};

/// Result of a full parse, for callers that also want the assessment.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// The extracted record.
    pub record: PolicyRecord,
    /// Completeness assessment of the record.
    pub validation: ValidationResult,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Assembles a [`PolicyRecord`] from a source document.
///
/// Parsing never fails: acquisition errors degrade to the all-absent default
/// record, and each field rule swallows its own failures. One parser instance
/// serves any number of documents; there is no shared mutable state.
pub struct PolicyParser {
    acquirer: TextAcquirer,
}

impl PolicyParser {
    /// Create a parser with the default acquirer.
    pub fn new() -> Self {
        Self {
            acquirer: TextAcquirer::new(),
        }
    }

    /// Replace the text acquirer.
    pub fn with_acquirer(mut self, acquirer: TextAcquirer) -> Self {
        self.acquirer = acquirer;
        self
    }

    /// Toggle PDF support on the underlying acquirer.
    pub fn with_pdf_support(mut self, enabled: bool) -> Self {
        self.acquirer = self.acquirer.with_pdf_support(enabled);
        self
    }

    /// Parse a document into a record.
    ///
    /// Any acquisition failure yields the default structure instead of an
    /// error; the caller always gets a record back.
    pub fn parse(&self, path: &Path) -> PolicyRecord {
        let raw_text = match self.acquirer.acquire(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "could not read {}, returning empty record: {}",
                    path.display(),
                    e
                );
                return PolicyRecord::default();
            }
        };

        self.parse_text(&raw_text)
    }

    /// Parse already-acquired raw text into a record.
    pub fn parse_text(&self, raw_text: &str) -> PolicyRecord {
        info!("parsing {} characters of text", raw_text.len());

        let normalized = normalize_text(raw_text);
        debug!("normalized to {} characters", normalized.len());

        // The fourteen extraction units are mutually independent; the scalar
        // units read the normalized text, coverage details the raw text.
        let scalar = |field: ScalarField| extract_scalar(&normalized, field);

        let record = PolicyRecord {
            policy_number: scalar(ScalarField::PolicyNumber),
            policyholder: scalar(ScalarField::Policyholder),
            policy_type: scalar(ScalarField::PolicyType),
            effective_date: scalar(ScalarField::EffectiveDate),
            expiration_date: scalar(ScalarField::ExpirationDate),
            coverage_amount: scalar(ScalarField::CoverageAmount),
            premium: scalar(ScalarField::Premium),
            total_premium: scalar(ScalarField::TotalPremium),
            taxes: scalar(ScalarField::Taxes),
            fees: scalar(ScalarField::Fees),
            deductible: scalar(ScalarField::Deductible),
            payment_frequency: scalar(ScalarField::PaymentFrequency),
            copay: scalar(ScalarField::Copay),
            coverage_details: extract_coverage_details(raw_text),
            parsed_at: Some(Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
        };

        debug!(
            "extracted record, policy_number = {:?}",
            record.policy_number
        );
        record
    }

    /// Parse a document and bundle the record with its assessment and timing.
    pub fn parse_report(&self, path: &Path) -> ParseReport {
        let start = Instant::now();
        let record = self.parse(path);
        let validation = record.validate();

        ParseReport {
            record,
            validation,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for PolicyParser {
    fn default() -> Self {
        Self::new()
    }
}
