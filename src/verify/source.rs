//! Read access to release documents

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment-level failure while reading a document.
///
/// A missing file is not an error; it is reported as `Ok(None)` by
/// [`DocumentSource::read`] and becomes a failed check instead.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that can hand out document text by path
pub trait DocumentSource {
    /// Read the text at `path`, or `None` when nothing exists there
    fn read(&self, path: &Path) -> Result<Option<String>, SourceError>;
}

/// Reads documents from the local filesystem.
///
/// Invalid UTF-8 is decoded with replacement characters rather than failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn read(&self, path: &Path) -> Result<Option<String>, SourceError> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SourceError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

/// In-memory documents keyed by path
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any previous text at the same path
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, path: &Path) -> Result<Option<String>, SourceError> {
        Ok(self.files.get(path).cloned())
    }
}
