//! Whitespace normalization for extracted text and sentences.
//!
//! Both helpers are total functions: they never fail and are idempotent.

use regex::Regex;

/// Collapse every whitespace run (spaces, tabs, newlines) into a single
/// ASCII space and trim the ends.
///
/// Applied to each raw sentence before it is counted or indexed.
///
/// # Example
///
/// ```rust
/// use sentira_core::clean::clean_text;
///
/// assert_eq!(clean_text("  a\n\t b  "), "a b");
/// ```
pub fn clean_text(s: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(s, " ").trim().to_string()
}

/// Collapse runs of two or more newlines into a single newline and trim.
///
/// Applied to whole-document text after visible-text extraction, so the
/// result never contains blank-line runs.
pub fn collapse_blank_lines(s: &str) -> String {
    let re = Regex::new(r"\n{2,}").unwrap();
    re.replace_all(s, "\n").trim().to_string()
}
