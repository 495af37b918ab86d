//! Shared pattern fragments for policy field extraction.

/// Optional currency marker adjacent to an amount. Matched but never
/// captured, so the marker stays out of the extracted value.
pub const CURRENCY: &str = r"(?:USD|INR|\$|Rs\.?)?";

/// Amount with optional thousands separators and optional two decimal
/// places, as the capturing group.
pub const NUMBER: &str = r"([\d,]+(?:\.\d{2})?)";

/// Two-digit day/month and four-digit year separated by `/` or `-`, as the
/// capturing group.
pub const DATE: &str = r"(\d{2}[/-]\d{2}[/-]\d{4})";
