//! Runs every configured check in declared order

use super::coverage::check_story_coverage;
use super::document::DocumentCache;
use super::headings::{basic_file_check, require_headings};
use super::result::ReleaseReport;
use super::source::{DocumentSource, SourceError};
use crate::config::ReleaseConfig;

/// Run existence, heading and coverage checks for `config`.
///
/// Every check runs regardless of earlier failures. Only environment-level
/// read errors abort the run.
pub fn run_release_checks(
    config: &ReleaseConfig,
    source: &dyn DocumentSource,
) -> Result<ReleaseReport, SourceError> {
    tracing::info!(base = %config.base.display(), "validating release artifacts");

    let mut cache = DocumentCache::new(source);
    let mut report = ReleaseReport::new();

    for entry in &config.documents {
        let doc = cache.get(&config.resolve(&entry.path))?;
        report.push(basic_file_check(&entry.check_name(), &doc));
    }

    for rule in &config.headings {
        let doc = cache.get(&config.resolve(&rule.path))?;
        report.push(require_headings(&doc, &rule.required));
    }

    let stories = cache.get(&config.resolve(&config.coverage.stories))?;
    let uat = cache.get(&config.resolve(&config.coverage.uat))?;
    report.push(check_story_coverage(&stories, &uat));

    tracing::info!(
        passed = report.passed_count(),
        failed = report.failed_count(),
        documents = cache.documents_read(),
        "validation finished"
    );
    Ok(report)
}
