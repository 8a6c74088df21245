//! User story coverage against UAT test cases
//!
//! Two mutually exclusive tiers decide whether a story is covered:
//! - Explicit: the UAT document carries `User Story:` references and each
//!   story must appear verbatim among them.
//! - Heuristic: without any references, each story must lexically match at
//!   least one `TC-` test case description.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::document::Document;
use super::result::CheckResult;
use crate::parser::{extract_ua_test_cases, extract_uat_story_refs, extract_user_stories};

pub const COVERAGE_CHECK_NAME: &str = "User story coverage";

/// Uncovered stories listed verbatim before the remainder is summarized
pub const UNCOVERED_PREVIEW_LIMIT: usize = 5;

/// Shared significant words needed for a heuristic word-overlap match
pub const MIN_SHARED_WORDS: usize = 2;

/// Alphabetic words of four or more letters
static SIGNIFICANT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{4,}").expect("Invalid regex pattern"));

/// Matching tier selected for a UAT document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageTier {
    Explicit { references: Vec<String> },
    Heuristic { cases: Vec<String> },
}

impl CoverageTier {
    /// Explicit when the document has any story reference, heuristic otherwise
    pub fn select(uat_text: &str) -> Self {
        let references = extract_uat_story_refs(uat_text);
        if references.is_empty() {
            Self::Heuristic {
                cases: extract_ua_test_cases(uat_text),
            }
        } else {
            Self::Explicit { references }
        }
    }

    /// Stories with no qualifying match under this tier, in input order
    pub fn uncovered<'s>(&self, stories: &'s [String]) -> Vec<&'s str> {
        match self {
            Self::Explicit { references } => stories
                .iter()
                .map(String::as_str)
                .filter(|story| !is_referenced(story, references))
                .collect(),
            Self::Heuristic { cases } => {
                let cases: Vec<Terms> = cases.iter().map(|c| Terms::new(c)).collect();
                stories
                    .iter()
                    .map(String::as_str)
                    .filter(|story| !covered_by_any(story, &cases))
                    .collect()
            }
        }
    }
}

/// Exact string equality against the reference list
pub fn is_referenced(story: &str, references: &[String]) -> bool {
    references.iter().any(|r| r == story)
}

/// Lexical match between one story and one test case description.
///
/// Either lowercased text contains the other, or they share at least
/// [`MIN_SHARED_WORDS`] distinct words of four or more letters.
pub fn heuristic_match(story: &str, case: &str) -> bool {
    Terms::new(story).matches(&Terms::new(case))
}

/// Lowercased distinct words of four or more ASCII letters
pub fn significant_words(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    SIGNIFICANT_WORD
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lowercased text and significant words of a story or test case
struct Terms {
    lower: String,
    words: HashSet<String>,
}

impl Terms {
    fn new(text: &str) -> Self {
        Self {
            lower: text.to_lowercase(),
            words: significant_words(text),
        }
    }

    fn matches(&self, other: &Terms) -> bool {
        if other.lower.contains(&self.lower) || self.lower.contains(&other.lower) {
            return true;
        }
        self.words.intersection(&other.words).count() >= MIN_SHARED_WORDS
    }
}

fn covered_by_any(story: &str, cases: &[Terms]) -> bool {
    let story = Terms::new(story);
    cases.iter().any(|case| story.matches(case))
}

/// Check that every user story is covered by the UAT document
pub fn check_story_coverage(stories_doc: &Document, uat_doc: &Document) -> CheckResult {
    for doc in [stories_doc, uat_doc] {
        if !doc.is_available() {
            return CheckResult::fail(
                COVERAGE_CHECK_NAME,
                format!("{}: {}", doc.file_name(), doc.status_detail()),
            );
        }
    }

    let stories = extract_user_stories(&stories_doc.content);
    let tier = CoverageTier::select(&uat_doc.content);

    if stories.is_empty() {
        return CheckResult::fail(
            COVERAGE_CHECK_NAME,
            "No user stories found (expected bullet list).",
        );
    }

    match &tier {
        CoverageTier::Explicit { references } => {
            tracing::info!(
                stories = stories.len(),
                references = references.len(),
                "using explicit traceability"
            );
        }
        CoverageTier::Heuristic { cases } => {
            tracing::info!(
                stories = stories.len(),
                cases = cases.len(),
                "no story references found, using heuristic matching"
            );
            if cases.is_empty() {
                return CheckResult::fail(
                    COVERAGE_CHECK_NAME,
                    "No UAT test cases found (expected TC-### lines).",
                );
            }
        }
    }

    let uncovered = tier.uncovered(&stories);
    if uncovered.is_empty() {
        let details = match tier {
            CoverageTier::Explicit { .. } => format!(
                "All {} user stories referenced in UAT (explicit traceability).",
                stories.len()
            ),
            CoverageTier::Heuristic { .. } => {
                format!("All {} user stories covered by UAT cases.", stories.len())
            }
        };
        return CheckResult::pass(COVERAGE_CHECK_NAME, details);
    }

    let preview = uncovered_preview(&uncovered);
    let details = match tier {
        CoverageTier::Explicit { .. } => format!(
            "Some user stories are not referenced in UAT via `User Story:` lines:\n{preview}\n\n\
             Tip: Add lines like:\nUser Story: <exact story text>"
        ),
        CoverageTier::Heuristic { .. } => format!(
            "Some user stories are not covered by UAT cases:\n{preview}\n\n\
             Tip: Add `User Story: <exact story text>` lines for explicit mapping."
        ),
    };
    CheckResult::fail(COVERAGE_CHECK_NAME, details)
}

/// Bullet list of the first uncovered stories plus a count of the rest
fn uncovered_preview(uncovered: &[&str]) -> String {
    let mut preview = uncovered
        .iter()
        .take(UNCOVERED_PREVIEW_LIMIT)
        .map(|story| format!("- {story}"))
        .collect::<Vec<_>>()
        .join("\n");
    if uncovered.len() > UNCOVERED_PREVIEW_LIMIT {
        preview.push_str(&format!(
            "\n...and {} more",
            uncovered.len() - UNCOVERED_PREVIEW_LIMIT
        ));
    }
    preview
}
