//! Check manifest: which documents, headings and coverage sources to validate
//!
//! The built-in default describes the flagship project layout. A TOML file
//! with the same shape can replace it:
//!
//! ```toml
//! base = "flagship-project/code-sections"
//!
//! [[documents]]
//! label = "Doc"
//! path = "docs/project-overview.md"
//!
//! [[headings]]
//! path = "docs/requirements.md"
//! required = ["Business Requirements", "Technical Requirements"]
//!
//! [coverage]
//! stories = "docs/user-stories.md"
//! uat = "test-cases/uat-test-cases.md"
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BASE: &str = "flagship-project/code-sections";

const DOC_FILES: &[&str] = &[
    "project-overview.md",
    "requirements.md",
    "functional-requirements.md",
    "process-flows.md",
    "risk-mitigation.md",
    "test-plan.md",
    "uat-plan.md",
    "user-stories.md",
    "release-notes.md",
];

const TEST_CASE_FILES: &[&str] = &["unit-tests.md", "regression-tests.md", "uat-test-cases.md"];

const HEADING_RULES: &[(&str, &[&str])] = &[
    (
        "docs/requirements.md",
        &["Business Requirements", "Technical Requirements"],
    ),
    (
        "docs/test-plan.md",
        &["Test Scope", "Test Types", "Acceptance Criteria"],
    ),
    (
        "docs/risk-mitigation.md",
        &["Identified Risks", "Mitigation Strategies"],
    ),
    (
        "docs/release-notes.md",
        &["Release Version", "Summary", "Included Changes"],
    ),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// A document that must exist and be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentEntry {
    /// Check name prefix, e.g. `Doc` or `Test cases`
    pub label: String,
    /// Path relative to the base directory
    pub path: PathBuf,
}

impl DocumentEntry {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// `<label>: <file name>`
    pub fn check_name(&self) -> String {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!("{}: {}", self.label, file_name)
    }
}

/// Headings one document must contain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadingRequirement {
    pub path: PathBuf,
    pub required: Vec<String>,
}

/// Documents compared by the coverage check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageSources {
    pub stories: PathBuf,
    pub uat: PathBuf,
}

impl Default for CoverageSources {
    fn default() -> Self {
        Self {
            stories: PathBuf::from("docs/user-stories.md"),
            uat: PathBuf::from("test-cases/uat-test-cases.md"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
    #[serde(default = "default_base")]
    pub base: PathBuf,
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
    #[serde(default)]
    pub headings: Vec<HeadingRequirement>,
    #[serde(default)]
    pub coverage: CoverageSources,
}

fn default_base() -> PathBuf {
    PathBuf::from(DEFAULT_BASE)
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        let documents = DOC_FILES
            .iter()
            .map(|f| DocumentEntry::new("Doc", Path::new("docs").join(f)))
            .chain(
                TEST_CASE_FILES
                    .iter()
                    .map(|f| DocumentEntry::new("Test cases", Path::new("test-cases").join(f))),
            )
            .collect();

        let headings = HEADING_RULES
            .iter()
            .map(|(path, required)| HeadingRequirement {
                path: PathBuf::from(*path),
                required: required.iter().map(|h| h.to_string()).collect(),
            })
            .collect();

        Self {
            base: default_base(),
            documents,
            headings,
            coverage: CoverageSources::default(),
        }
    }
}

impl ReleaseConfig {
    /// Load and validate a TOML manifest
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate manifest text
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.documents.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one [[documents]] entry is required".to_string(),
            ));
        }
        for entry in &self.documents {
            if entry.label.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "document '{}' has an empty label",
                    entry.path.display()
                )));
            }
            if entry.path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "document '{}' has an empty path",
                    entry.label
                )));
            }
        }
        for rule in &self.headings {
            if rule.path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "heading rule has an empty path".to_string(),
                ));
            }
            if rule.required.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "heading rule for '{}' lists no headings",
                    rule.path.display()
                )));
            }
            if rule.required.iter().any(|h| h.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "heading rule for '{}' contains an empty heading",
                    rule.path.display()
                )));
            }
        }
        if self.coverage.stories.as_os_str().is_empty() || self.coverage.uat.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid(
                "coverage stories and uat paths must be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve a manifest path against the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base.join(path)
    }
}
