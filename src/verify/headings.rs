//! Existence and required-heading checks

use super::document::Document;
use super::result::CheckResult;
use crate::parser::markdown::{has_heading, preview_lines, PREVIEW_LINE_COUNT};

/// Check that a document exists and has content
pub fn basic_file_check(name: &str, doc: &Document) -> CheckResult {
    CheckResult::new(name, doc.is_available(), doc.status_detail())
}

/// Check that a document contains every heading in `required`.
///
/// A failure lists the missing headings and previews the top of the file.
pub fn require_headings(doc: &Document, required: &[String]) -> CheckResult {
    let name = format!("Headings check: {}", doc.file_name());
    if !doc.is_available() {
        return CheckResult::fail(name, doc.status_detail());
    }

    let missing: Vec<&str> = required
        .iter()
        .map(String::as_str)
        .filter(|heading| !has_heading(&doc.content, heading))
        .collect();

    if missing.is_empty() {
        return CheckResult::pass(name, "OK");
    }

    CheckResult::fail(
        name,
        format!(
            "Missing headings: {}\n--- file preview (first {} lines) ---\n{}",
            missing.join(", "),
            PREVIEW_LINE_COUNT,
            preview_lines(&doc.content, PREVIEW_LINE_COUNT)
        ),
    )
}
