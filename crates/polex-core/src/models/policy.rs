//! Extracted policy record and its completeness assessment.

use serde::{Deserialize, Serialize};

/// A structured record extracted from one policy document.
///
/// Every field key is serialized even when no value was found; absent scalar
/// fields become `null`. The default value of this struct is the degraded
/// record produced when document acquisition fails: every scalar absent and
/// `coverage_details` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Policy identifier (e.g. "POL-2024-001").
    pub policy_number: Option<String>,

    /// Name of the insured person or entity.
    pub policyholder: Option<String>,

    /// Kind of policy (health, auto, ...).
    pub policy_type: Option<String>,

    /// Coverage start date, `DD/MM/YYYY`.
    pub effective_date: Option<String>,

    /// Coverage end date, `DD/MM/YYYY`.
    pub expiration_date: Option<String>,

    /// Sum insured, plain decimal without thousands separators.
    pub coverage_amount: Option<String>,

    /// Base premium amount.
    pub premium: Option<String>,

    /// Total premium including taxes and fees.
    pub total_premium: Option<String>,

    /// Tax portion of the premium.
    pub taxes: Option<String>,

    /// Administrative or processing fees.
    pub fees: Option<String>,

    /// Deductible amount.
    pub deductible: Option<String>,

    /// Billing cadence, lower-cased (e.g. "monthly").
    pub payment_frequency: Option<String>,

    /// Co-payment amount.
    pub copay: Option<String>,

    /// Bullet items from the "Coverage Details:" section.
    pub coverage_details: Vec<String>,

    /// Wall-clock time of parsing, ISO-8601. Set exactly once, on
    /// successful completion of extraction.
    pub parsed_at: Option<String>,
}

impl PolicyRecord {
    /// Compute the completeness assessment for this record.
    ///
    /// Derived purely from the record, recomputed on every call.
    pub fn validate(&self) -> ValidationResult {
        let has_policy_number = self.policy_number.is_some();
        let has_policyholder = self.policyholder.is_some();
        // Both dates are required; either one missing fails the check.
        let has_dates = self.effective_date.is_some() && self.expiration_date.is_some();
        // Any one of the three financial fields is enough.
        let has_financial_data = self.premium.is_some()
            || self.coverage_amount.is_some()
            || self.total_premium.is_some();

        ValidationResult {
            has_policy_number,
            has_policyholder,
            has_dates,
            has_financial_data,
            is_complete: has_policy_number && has_policyholder && has_dates && has_financial_data,
        }
    }
}

/// Boolean completeness flags derived from a [`PolicyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// A policy number was extracted.
    pub has_policy_number: bool,

    /// A policyholder name was extracted.
    pub has_policyholder: bool,

    /// Both effective and expiration dates were extracted.
    pub has_dates: bool,

    /// At least one of premium, coverage amount, or total premium was
    /// extracted.
    pub has_financial_data: bool,

    /// All four preceding flags hold.
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_record() -> PolicyRecord {
        PolicyRecord {
            policy_number: Some("POL-001".to_string()),
            policyholder: Some("John Doe".to_string()),
            effective_date: Some("01/01/2024".to_string()),
            expiration_date: Some("01/01/2025".to_string()),
            premium: Some("1200.00".to_string()),
            ..PolicyRecord::default()
        }
    }

    #[test]
    fn test_default_record_is_all_absent() {
        let record = PolicyRecord::default();

        assert_eq!(record.policy_number, None);
        assert_eq!(record.parsed_at, None);
        assert!(record.coverage_details.is_empty());

        let validation = record.validate();
        assert!(!validation.has_policy_number);
        assert!(!validation.has_policyholder);
        assert!(!validation.has_dates);
        assert!(!validation.has_financial_data);
        assert!(!validation.is_complete);
    }

    #[test]
    fn test_complete_record_validates() {
        let validation = complete_record().validate();

        assert!(validation.has_policy_number);
        assert!(validation.has_policyholder);
        assert!(validation.has_dates);
        assert!(validation.has_financial_data);
        assert!(validation.is_complete);
    }

    #[test]
    fn test_has_dates_requires_both() {
        let mut record = complete_record();
        record.expiration_date = None;

        let validation = record.validate();
        assert!(!validation.has_dates);
        assert!(!validation.is_complete);

        let mut record = complete_record();
        record.effective_date = None;
        assert!(!record.validate().has_dates);
    }

    #[test]
    fn test_has_financial_data_any_of_three() {
        let mut record = complete_record();
        record.premium = None;
        record.coverage_amount = Some("50000".to_string());
        assert!(record.validate().has_financial_data);

        record.coverage_amount = None;
        record.total_premium = Some("1350.00".to_string());
        assert!(record.validate().has_financial_data);

        record.total_premium = None;
        assert!(!record.validate().has_financial_data);
    }

    #[test]
    fn test_is_complete_flips_with_any_flag() {
        let mut record = complete_record();
        record.policy_number = None;
        assert!(!record.validate().is_complete);

        let mut record = complete_record();
        record.policyholder = None;
        assert!(!record.validate().is_complete);

        let mut record = complete_record();
        record.premium = None;
        record.coverage_amount = None;
        record.total_premium = None;
        assert!(!record.validate().is_complete);
    }

    #[test]
    fn test_serialization_keeps_all_keys() {
        let json = serde_json::to_value(PolicyRecord::default()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 15);
        for key in [
            "policy_number",
            "policyholder",
            "policy_type",
            "effective_date",
            "expiration_date",
            "coverage_amount",
            "premium",
            "total_premium",
            "taxes",
            "fees",
            "deductible",
            "payment_frequency",
            "copay",
            "coverage_details",
            "parsed_at",
        ] {
            assert!(object.contains_key(key), "missing key: {}", key);
        }

        assert!(object["policy_number"].is_null());
        assert_eq!(object["coverage_details"], serde_json::json!([]));
    }
}
