//! Release artifact verification
//!
//! Each check yields a [`CheckResult`]; the runner collects them into a
//! [`ReleaseReport`] whose verdict gates the release.

pub mod coverage;
pub mod document;
pub mod headings;
pub mod result;
pub mod runner;
pub mod source;

pub use coverage::{check_story_coverage, CoverageTier, COVERAGE_CHECK_NAME};
pub use document::{Document, DocumentCache, DocumentStatus};
pub use headings::{basic_file_check, require_headings};
pub use result::{CheckResult, ReleaseReport, Verdict};
pub use runner::run_release_checks;
pub use source::{DocumentSource, FsSource, MemorySource, SourceError};
