//! Whitespace normalization applied before scalar field matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLANK_LINE_RUNS: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Canonicalize whitespace in document text.
///
/// Each line is trimmed and internal whitespace runs collapse to single
/// spaces; runs of three or more newlines collapse to exactly two, so at
/// most one blank line separates paragraphs. Idempotent.
pub fn normalize_text(text: &str) -> String {
    let cleaned: Vec<String> = text
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    BLANK_LINE_RUNS
        .replace_all(&cleaned.join("\n"), "\n\n")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(
            normalize_text("Policy   Number:\t ABC-123"),
            "Policy Number: ABC-123"
        );
    }

    #[test]
    fn test_trims_line_edges() {
        assert_eq!(
            normalize_text("  Premium: $100  \n\t Taxes: $5 "),
            "Premium: $100\nTaxes: $5"
        );
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        assert_eq!(normalize_text("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Policy  Number :  X\n\n\n\nPremium: 1",
            "",
            "\n\n\n",
            "  spaced   out  ",
            "already\nnormal\n\ntext",
        ];
        for input in inputs {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_never_leaves_long_newline_runs() {
        let normalized = normalize_text("a\n \n  \n \nb\n\n\n\nc");
        assert!(!normalized.contains("\n\n\n"));
        for line in normalized.lines() {
            assert_eq!(line, line.trim());
        }
    }
}
