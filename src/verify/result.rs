//! Check results and the aggregated release report

use std::fmt;
use std::process::ExitCode;

/// Outcome of a single named check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, passed: bool, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            details: details.into(),
        }
    }

    pub fn pass(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, true, details)
    }

    pub fn fail(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, false, details)
    }
}

/// Overall release verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ready,
    Blocked,
}

impl Verdict {
    /// Process exit code for this verdict
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Ready => 0,
            Verdict::Blocked => 1,
        }
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Ready => ExitCode::SUCCESS,
            Verdict::Blocked => ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ready => write!(f, "READY"),
            Verdict::Blocked => write!(f, "BLOCKED"),
        }
    }
}

/// Ordered results of one validation run.
///
/// Results keep the order in which checks were recorded.
#[derive(Debug, Clone, Default)]
pub struct ReleaseReport {
    results: Vec<CheckResult>,
}

impl ReleaseReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: CheckResult) {
        tracing::debug!(check = %result.name, passed = result.passed, "check finished");
        self.results.push(result);
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }

    pub fn verdict(&self) -> Verdict {
        if self.failed_count() > 0 {
            Verdict::Blocked
        } else {
            Verdict::Ready
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.verdict().exit_code()
    }
}
