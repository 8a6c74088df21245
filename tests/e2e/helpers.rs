//! Test helper functions for E2E tests

use anyhow::{Context, Result};
use release_gate::config::ReleaseConfig;
use release_gate::verify::{run_release_checks, CheckResult, FsSource, ReleaseReport};
use std::path::Path;
use tempfile::TempDir;

use super::fixtures::ready_documents;

/// Creates a temporary project with every document in release-ready shape
///
/// Returns a TempDir that must be kept in scope for the lifetime of the test
pub fn create_ready_project() -> Result<TempDir> {
    let temp = TempDir::new().context("Failed to create temp directory")?;
    for (path, content) in ready_documents() {
        write_doc(temp.path(), path, content)?;
    }
    Ok(temp)
}

/// Writes `content` to `base/relative`, creating parent directories
pub fn write_doc(base: &Path, relative: &str, content: &str) -> Result<()> {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, content).with_context(|| format!("Failed to write {relative}"))
}

pub fn remove_doc(base: &Path, relative: &str) -> Result<()> {
    std::fs::remove_file(base.join(relative)).with_context(|| format!("Failed to remove {relative}"))
}

/// Runs the default check manifest against `base`
pub fn validate(base: &Path) -> Result<ReleaseReport> {
    let config = ReleaseConfig {
        base: base.to_path_buf(),
        ..ReleaseConfig::default()
    };
    Ok(run_release_checks(&config, &FsSource)?)
}

/// Finds a result by check name
pub fn result_named<'a>(report: &'a ReleaseReport, name: &str) -> &'a CheckResult {
    report
        .results()
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no check named '{name}'"))
}
