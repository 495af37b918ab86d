//! Coverage-details section extraction.
//!
//! Unlike the scalar rules this operates on the raw, pre-normalization text:
//! normalization could collapse the blank line that bounds the section or
//! disturb the bullet layout the item pattern depends on.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Header is case-insensitive; the section runs to the next blank line
    // or the end of the text.
    static ref COVERAGE_SECTION: Regex =
        Regex::new(r"(?is)Coverage Details:(.*?)(?:\n\n|\z)").unwrap();
    static ref COVERAGE_ITEM: Regex = Regex::new(r"-\s*(.+)").unwrap();
}

/// Extract the dash-prefixed items of the "Coverage Details:" section.
///
/// Returns an empty list when the header is absent or the section holds no
/// dash-prefixed lines.
pub fn extract_coverage_details(raw_text: &str) -> Vec<String> {
    let Some(caps) = COVERAGE_SECTION.captures(raw_text) else {
        return Vec::new();
    };

    COVERAGE_ITEM
        .captures_iter(&caps[1])
        .map(|item| item[1].trim().to_string())
        .collect()
}
