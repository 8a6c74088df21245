//! UAT document extraction: explicit story references and test cases

use regex::Regex;
use std::sync::LazyLock;

/// `User Story: As ...` lines
static PLAIN_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*User Story:\s*(As\s+.+)$").expect("Invalid regex pattern")
});

/// `**User Story:** As ...` lines
static BOLD_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\*\*User Story:\*\*\s*(As\s+.+)$").expect("Invalid regex pattern")
});

/// `- [ ] ` checkbox prefix
static UNCHECKED_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\[\s*\]\s*").expect("Invalid regex pattern"));

/// `- [x] ` / `- [X] ` checkbox prefix
static CHECKED_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-\s*\[\s*x\s*\]\s*").expect("Invalid regex pattern"));

const CASE_ID_PREFIX: &str = "TC-";

/// Extract explicit story references from a UAT document.
///
/// Supported:
/// - `User Story: As a ...`
/// - `**User Story:** As a ...`
///
/// All plain references come before all bold references; coverage matching
/// does not depend on order.
pub fn extract_uat_story_refs(uat_md: &str) -> Vec<String> {
    [&*PLAIN_REF, &*BOLD_REF]
        .into_iter()
        .flat_map(|re| re.captures_iter(uat_md))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Extract UAT test case descriptions.
///
/// Supported line shapes:
/// - `TC-001: ...`
/// - `- TC-001: ...` / `* TC-001: ...`
/// - `- [ ] TC-001: ...` / `- [x] TC-001: ...`
///
/// Returns the text after the first `:` when present, otherwise the whole
/// `TC-` line. Empty descriptions are dropped.
pub fn extract_ua_test_cases(uat_md: &str) -> Vec<String> {
    uat_md
        .lines()
        .filter_map(|line| parse_case_line(line.trim()))
        .filter(|case| !case.is_empty())
        .collect()
}

fn parse_case_line(line: &str) -> Option<String> {
    let line = UNCHECKED_BOX.replace(line, "");
    let line = CHECKED_BOX.replace(&line, "");

    let mut raw: &str = &line;
    if raw.starts_with(CASE_ID_PREFIX)
        || raw.starts_with("- TC-")
        || raw.starts_with("* TC-")
    {
        raw = raw.trim_start_matches(['-', '*', ' ']).trim();
    }

    if !raw.starts_with(CASE_ID_PREFIX) {
        return None;
    }

    let description = match raw.split_once(':') {
        Some((_, after)) => after.trim(),
        None => raw.trim(),
    };
    Some(description.to_string())
}
