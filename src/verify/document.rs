//! Loaded release documents and their availability

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::source::{DocumentSource, SourceError};
use crate::parser::normalize_text;

/// A document read once for a validation run
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub exists: bool,
    /// Normalized text; empty when the document does not exist
    pub content: String,
}

/// Whether a document can be checked further
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Available,
    Missing,
    Empty,
}

impl Document {
    /// Read and normalize the document at `path`
    pub fn load(source: &dyn DocumentSource, path: &Path) -> Result<Self, SourceError> {
        let text = source.read(path)?;
        let doc = match text {
            Some(raw) => Self {
                path: path.to_path_buf(),
                exists: true,
                content: normalize_text(&raw),
            },
            None => Self::missing(path),
        };

        tracing::debug!(
            path = %doc.path.display(),
            exists = doc.exists,
            bytes = doc.content.len(),
            "loaded document"
        );
        Ok(doc)
    }

    pub fn missing(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            exists: false,
            content: String::new(),
        }
    }

    pub fn from_text(path: impl Into<PathBuf>, raw: &str) -> Self {
        Self {
            path: path.into(),
            exists: true,
            content: normalize_text(raw),
        }
    }

    /// Final path component, used in check names and diagnostics
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn status(&self) -> DocumentStatus {
        if !self.exists {
            DocumentStatus::Missing
        } else if self.content.trim().is_empty() {
            DocumentStatus::Empty
        } else {
            DocumentStatus::Available
        }
    }

    pub fn is_available(&self) -> bool {
        self.status() == DocumentStatus::Available
    }

    /// Human-readable availability, `OK` when the document can be checked
    pub fn status_detail(&self) -> String {
        match self.status() {
            DocumentStatus::Available => "OK".to_string(),
            DocumentStatus::Missing => {
                format!("Missing file (looked here: {})", self.path.display())
            }
            DocumentStatus::Empty => "File is empty".to_string(),
        }
    }
}

/// Per-run cache so each path is read at most once
pub struct DocumentCache<'a> {
    source: &'a dyn DocumentSource,
    loaded: HashMap<PathBuf, Rc<Document>>,
}

impl<'a> DocumentCache<'a> {
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self {
            source,
            loaded: HashMap::new(),
        }
    }

    pub fn get(&mut self, path: &Path) -> Result<Rc<Document>, SourceError> {
        if let Some(doc) = self.loaded.get(path) {
            return Ok(Rc::clone(doc));
        }
        let doc = Rc::new(Document::load(self.source, path)?);
        self.loaded.insert(path.to_path_buf(), Rc::clone(&doc));
        Ok(doc)
    }

    /// Number of distinct paths read so far
    pub fn documents_read(&self) -> usize {
        self.loaded.len()
    }
}
