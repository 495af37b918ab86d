//! Scalar field rules: ordered pattern lists with first-match-wins trial.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::patterns::{CURRENCY, DATE, NUMBER};

/// The thirteen scalar fields of a policy record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    PolicyNumber,
    Policyholder,
    PolicyType,
    EffectiveDate,
    ExpirationDate,
    CoverageAmount,
    Premium,
    TotalPremium,
    Taxes,
    Fees,
    Deductible,
    PaymentFrequency,
    Copay,
}

impl ScalarField {
    /// All scalar fields, in record order.
    pub const ALL: [ScalarField; 13] = [
        ScalarField::PolicyNumber,
        ScalarField::Policyholder,
        ScalarField::PolicyType,
        ScalarField::EffectiveDate,
        ScalarField::ExpirationDate,
        ScalarField::CoverageAmount,
        ScalarField::Premium,
        ScalarField::TotalPremium,
        ScalarField::Taxes,
        ScalarField::Fees,
        ScalarField::Deductible,
        ScalarField::PaymentFrequency,
        ScalarField::Copay,
    ];

    /// Stable snake_case field name, matching the record's JSON keys.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarField::PolicyNumber => "policy_number",
            ScalarField::Policyholder => "policyholder",
            ScalarField::PolicyType => "policy_type",
            ScalarField::EffectiveDate => "effective_date",
            ScalarField::ExpirationDate => "expiration_date",
            ScalarField::CoverageAmount => "coverage_amount",
            ScalarField::Premium => "premium",
            ScalarField::TotalPremium => "total_premium",
            ScalarField::Taxes => "taxes",
            ScalarField::Fees => "fees",
            ScalarField::Deductible => "deductible",
            ScalarField::PaymentFrequency => "payment_frequency",
            ScalarField::Copay => "copay",
        }
    }
}

/// Post-processing applied to a captured value after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Return the trimmed capture as-is.
    Verbatim,
    /// Strip thousands commas, leaving a plain decimal number.
    CleanNumeric,
    /// Normalize date separators to `/`.
    SlashDate,
    /// Lower-case the capture (billing cadences).
    Lowercase,
}

/// One field's extraction unit: an ordered list of candidate patterns
/// (most specific first) and the post-processing step for the capture.
pub struct FieldRule {
    field: ScalarField,
    patterns: Vec<Regex>,
    post: PostProcess,
}

impl FieldRule {
    fn new(field: ScalarField, patterns: &[String], post: PostProcess) -> Self {
        Self {
            field,
            patterns: patterns.iter().map(|p| Regex::new(p).unwrap()).collect(),
            post,
        }
    }

    /// The field this rule extracts.
    pub fn field(&self) -> ScalarField {
        self.field
    }

    /// Try the patterns strictly in order; the first that matches anywhere
    /// in the text yields the result. A pattern that matches but captures
    /// nothing aborts the unit and yields absence, never an error.
    pub fn extract(&self, text: &str) -> Option<String> {
        for pattern in &self.patterns {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };

            let Some(group) = caps.get(1) else {
                debug!(
                    field = self.field.name(),
                    "pattern matched without a capture group"
                );
                return None;
            };

            let value = group.as_str().trim();
            let value = match self.post {
                PostProcess::Verbatim => value.to_string(),
                PostProcess::CleanNumeric => value.replace(',', ""),
                PostProcess::SlashDate => value.replace('-', "/"),
                PostProcess::Lowercase => value.to_lowercase(),
            };
            return Some(value);
        }
        None
    }
}

fn labeled_amount(label: &str) -> String {
    format!(r"(?i){label}\s*:?\s*{CURRENCY}\s*{NUMBER}")
}

fn build_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(
            ScalarField::PolicyNumber,
            &[r"(?i)Policy\s+(?:Number|No\.?|#)\s*:?\s*([A-Z0-9][A-Z0-9/\\-]+)".to_string()],
            PostProcess::Verbatim,
        ),
        FieldRule::new(
            ScalarField::Policyholder,
            &[r"(?i)Policyholder(?:\s+Name)?:\s*([A-Za-z\s]+?)(?:\n|$)".to_string()],
            PostProcess::Verbatim,
        ),
        FieldRule::new(
            ScalarField::PolicyType,
            &[r"(?i)Policy\s+Type:\s*([A-Za-z\s]+?)(?:\n|$)".to_string()],
            PostProcess::Verbatim,
        ),
        FieldRule::new(
            ScalarField::EffectiveDate,
            &[
                format!(r"(?i)(?:Effective|Start|Commencement|From)\s+Date\s*:?\s*{DATE}"),
                format!(r"(?i)Policy\s+(?:Start|Effective)\s+Date\s*:?\s*{DATE}"),
                format!(r"(?i)(?:Valid|Coverage)\s+From\s*:?\s*{DATE}"),
            ],
            PostProcess::SlashDate,
        ),
        FieldRule::new(
            ScalarField::ExpirationDate,
            &[
                format!(r"(?i)(?:Expiration|Expiry|End|To)\s+Date\s*:?\s*{DATE}"),
                format!(r"(?i)Policy\s+(?:End|Expiry)\s+Date\s*:?\s*{DATE}"),
                format!(r"(?i)(?:Valid|Coverage)\s+(?:Until|To)\s*:?\s*{DATE}"),
            ],
            PostProcess::SlashDate,
        ),
        FieldRule::new(
            ScalarField::CoverageAmount,
            &[
                labeled_amount(r"(?:Coverage|Sum)\s+(?:Amount|Insured)"),
                labeled_amount(r"Sum\s+Insured"),
                labeled_amount(r"Insured\s+(?:Amount|Value)"),
            ],
            PostProcess::CleanNumeric,
        ),
        FieldRule::new(
            ScalarField::Premium,
            &[
                labeled_amount(r"(?:Base|Basic|Net)\s+Premium"),
                labeled_amount(r"Premium"),
                labeled_amount(r"(?:Monthly|Annual|Yearly)\s+Premium"),
            ],
            PostProcess::CleanNumeric,
        ),
        FieldRule::new(
            ScalarField::TotalPremium,
            &[
                labeled_amount(r"Total\s+Premium"),
                labeled_amount(r"(?:Gross|Final)\s+Premium"),
                labeled_amount(r"Premium\s+(?:Total|Amount)"),
            ],
            PostProcess::CleanNumeric,
        ),
        FieldRule::new(
            ScalarField::Taxes,
            &[
                labeled_amount(r"(?:GST|Tax|Service\s+Tax)\s*(?:Amount)?"),
                labeled_amount(r"Tax(?:es)?"),
                labeled_amount(r"(?:Policy|Insurance)\s+Tax"),
                labeled_amount(r"GST\s*@?\s*\d+%?"),
            ],
            PostProcess::CleanNumeric,
        ),
        FieldRule::new(
            ScalarField::Fees,
            &[
                labeled_amount(r"(?:Administrative|Processing|Service)\s+Fee"),
                labeled_amount(r"Fee(?:s)?"),
                labeled_amount(r"(?:Stamp|Policy)\s+Fee"),
            ],
            PostProcess::CleanNumeric,
        ),
        FieldRule::new(
            ScalarField::Deductible,
            &[
                labeled_amount(r"Deductible\s*(?:Amount)?"),
                labeled_amount(r"(?:Standard|Basic)\s+Deductible"),
                labeled_amount(r"(?:Excess|Co-payment)"),
            ],
            PostProcess::CleanNumeric,
        ),
        FieldRule::new(
            ScalarField::PaymentFrequency,
            &[
                r"(?i)Payment\s+Frequency\s*:?\s*((?:Monthly|Quarterly|Annual|Yearly|Bi-?annual|Semi-?annual))"
                    .to_string(),
                r"(?i)Billed\s+(Monthly|Quarterly|Annual|Yearly)".to_string(),
                // Vocabulary check without a capture group: a hit here means
                // a cadence was mentioned but not in an extractable form.
                r"(?i)(?:Monthly|Quarterly|Annual|Yearly)\s+(?:Payment|Billing)".to_string(),
            ],
            PostProcess::Lowercase,
        ),
        FieldRule::new(
            ScalarField::Copay,
            &[
                format!(r"(?i)Co-?pay\s*:?\s*\$?{NUMBER}"),
                format!(r"(?i)Copayment\s*:?\s*\$?{NUMBER}"),
            ],
            PostProcess::CleanNumeric,
        ),
    ]
}

lazy_static! {
    static ref SCALAR_RULES: Vec<FieldRule> = build_rules();
}

/// Look up the rule for a field.
pub fn rule(field: ScalarField) -> &'static FieldRule {
    SCALAR_RULES
        .iter()
        .find(|r| r.field == field)
        .expect("every scalar field has a rule")
}

/// Extract one scalar field from normalized text.
pub fn extract_scalar(text: &str, field: ScalarField) -> Option<String> {
    rule(field).extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_field_has_a_rule() {
        for field in ScalarField::ALL {
            assert_eq!(rule(field).field(), field);
        }
    }

    #[test]
    fn test_policy_number() {
        assert_eq!(
            extract_scalar("Policy Number: ABC-123", ScalarField::PolicyNumber),
            Some("ABC-123".to_string())
        );
        assert_eq!(
            extract_scalar("Policy No. POL/2024/88", ScalarField::PolicyNumber),
            Some("POL/2024/88".to_string())
        );
        assert_eq!(
            extract_scalar("policy # X9-22", ScalarField::PolicyNumber),
            Some("X9-22".to_string())
        );
    }

    #[test]
    fn test_policyholder_stops_at_line_end() {
        assert_eq!(
            extract_scalar(
                "Policyholder: John Doe\nPolicy Type: Health",
                ScalarField::Policyholder
            ),
            Some("John Doe".to_string())
        );
        assert_eq!(
            extract_scalar("Policyholder Name: Jane Roe", ScalarField::Policyholder),
            Some("Jane Roe".to_string())
        );
    }

    #[test]
    fn test_dates_normalize_separator() {
        assert_eq!(
            extract_scalar("Effective Date: 01-02-2024", ScalarField::EffectiveDate),
            Some("01/02/2024".to_string())
        );
        assert_eq!(
            extract_scalar("Expiration Date: 01/02/2025", ScalarField::ExpirationDate),
            Some("01/02/2025".to_string())
        );
    }

    #[test]
    fn test_date_fallback_patterns() {
        assert_eq!(
            extract_scalar("Coverage From: 15/06/2024", ScalarField::EffectiveDate),
            Some("15/06/2024".to_string())
        );
        assert_eq!(
            extract_scalar("Valid Until: 15/06/2025", ScalarField::ExpirationDate),
            Some("15/06/2025".to_string())
        );
    }

    #[test]
    fn test_numeric_strips_thousands_commas() {
        assert_eq!(
            extract_scalar("Premium: $1,200.00", ScalarField::Premium),
            Some("1200.00".to_string())
        );
        assert_eq!(
            extract_scalar("Sum Insured: Rs. 5,00,000", ScalarField::CoverageAmount),
            Some("500000".to_string())
        );
        assert_eq!(
            extract_scalar("Total Premium: USD 1,350.50", ScalarField::TotalPremium),
            Some("1350.50".to_string())
        );
    }

    #[test]
    fn test_currency_marker_not_captured() {
        for (text, field) in [
            ("Taxes: $54.00", ScalarField::Taxes),
            ("Processing Fee: INR 25.00", ScalarField::Fees),
            ("Deductible: USD 500", ScalarField::Deductible),
            ("Copay: $20.00", ScalarField::Copay),
        ] {
            let value = extract_scalar(text, field).unwrap();
            assert!(
                value.chars().all(|c| c.is_ascii_digit() || c == '.'),
                "{:?} -> {:?}",
                text,
                value
            );
        }
    }

    #[test]
    fn test_first_match_wins_over_later_patterns() {
        // "Premium:" (second pattern) appears before "Base Premium:" would
        // match; the first pattern is tried first and hits the base label.
        let text = "Base Premium: $100.00\nPremium: $999.00";
        assert_eq!(
            extract_scalar(text, ScalarField::Premium),
            Some("100.00".to_string())
        );

        // Without the preferred label the fallback pattern takes the first
        // textual occurrence.
        let text = "Premium: $999.00\nSomething else";
        assert_eq!(
            extract_scalar(text, ScalarField::Premium),
            Some("999.00".to_string())
        );
    }

    #[test]
    fn test_payment_frequency_lowercased() {
        assert_eq!(
            extract_scalar(
                "Payment Frequency: Monthly",
                ScalarField::PaymentFrequency
            ),
            Some("monthly".to_string())
        );
        assert_eq!(
            extract_scalar("Billed Quarterly", ScalarField::PaymentFrequency),
            Some("quarterly".to_string())
        );
        assert_eq!(
            extract_scalar(
                "Payment Frequency: Semi-annual",
                ScalarField::PaymentFrequency
            ),
            Some("semi-annual".to_string())
        );
    }

    #[test]
    fn test_groupless_pattern_match_yields_absence() {
        // The third frequency pattern has no capture group; a text that only
        // matches it degrades to absence instead of erroring.
        assert_eq!(
            extract_scalar("Monthly Billing cycle", ScalarField::PaymentFrequency),
            None
        );
    }

    #[test]
    fn test_no_match_is_none_for_every_field() {
        let text = "Nothing relevant in here at all.";
        for field in ScalarField::ALL {
            assert_eq!(extract_scalar(text, field), None, "field {}", field.name());
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(
            extract_scalar("POLICY TYPE: Health Insurance", ScalarField::PolicyType),
            Some("Health Insurance".to_string())
        );
        assert_eq!(
            extract_scalar("deductible: 500.00", ScalarField::Deductible),
            Some("500.00".to_string())
        );
    }
}
