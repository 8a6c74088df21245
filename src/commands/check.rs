//! `release-gate` check command: validate artifacts and print the report

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::ReleaseConfig;
use crate::verify::{run_release_checks, CheckResult, FsSource, ReleaseReport, Verdict};

const SEPARATOR_WIDTH: usize = 60;

/// Build the effective manifest from an optional config file and base override
pub fn effective_config(config_path: Option<&Path>, base: Option<PathBuf>) -> Result<ReleaseConfig> {
    let mut config = match config_path {
        Some(path) => ReleaseConfig::load(path)?,
        None => ReleaseConfig::default(),
    };
    if let Some(base) = base {
        config.base = base;
    }
    config.base = std::path::absolute(&config.base)
        .with_context(|| format!("Failed to resolve base path: {}", config.base.display()))?;
    Ok(config)
}

/// Print the effective manifest as TOML
pub fn print_config(config: &ReleaseConfig) -> Result<()> {
    let text = config.to_toml().context("Failed to serialize config")?;
    print!("{text}");
    Ok(())
}

/// Run all checks and print the report
pub fn execute(config: &ReleaseConfig) -> Result<Verdict> {
    let report = run_release_checks(config, &FsSource)
        .context("Release validation aborted by an unreadable document")?;
    print_report(&report);
    Ok(report.verdict())
}

/// `<marker> <name> — <details>`
pub fn format_check_line(result: &CheckResult) -> String {
    let marker = if result.passed { "✔" } else { "✖" };
    format!("{} {} — {}", marker, result.name, result.details)
}

/// Final verdict line with the number of passing or failing checks
pub fn format_summary(report: &ReleaseReport) -> String {
    match report.verdict() {
        Verdict::Blocked => format!(
            "Release Status: {} ❌  ({} failing checks)",
            Verdict::Blocked,
            report.failed_count()
        ),
        Verdict::Ready => format!(
            "Release Status: {} ✅  ({} checks passed)",
            Verdict::Ready,
            report.passed_count()
        ),
    }
}

/// Report text, one line per check followed by the verdict.
///
/// Pass lines are green and fail lines red when `colorize` is set.
pub fn render_report(report: &ReleaseReport, colorize: bool) -> String {
    let paint = |text: String, passed: bool| {
        if !colorize {
            text
        } else if passed {
            text.green().to_string()
        } else {
            text.red().to_string()
        }
    };

    let mut out = String::new();
    for result in report.results() {
        out.push_str(&paint(format_check_line(result), result.passed));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    let summary = format_summary(report);
    match (colorize, report.verdict()) {
        (false, _) => out.push_str(&summary),
        (true, Verdict::Ready) => out.push_str(&summary.green().bold().to_string()),
        (true, Verdict::Blocked) => out.push_str(&summary.red().bold().to_string()),
    }
    out.push('\n');
    out
}

fn print_report(report: &ReleaseReport) {
    print!("{}", render_report(report, true));
}
