//! Ordered list of source documents queued for a merge

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The ordered set of PDF files selected for merging.
///
/// Paths keep their insertion order, which is the order their pages appear in
/// the merged output. Duplicates are skipped on insert, and entries can be
/// removed or shifted one position at a time, mirroring the reordering
/// controls a front-end offers. The list lives entirely in memory; it is
/// owned by whoever drives the merge and discarded with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentList {
    paths: Vec<PathBuf>,
}

impl DocumentList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` if it names a PDF and is not already present.
    ///
    /// Returns true when the list changed. Paths are compared as text, byte
    /// for byte, exactly as provided (no case folding, no separator
    /// collapsing), and anything without a `.pdf` extension in any case is
    /// ignored. The same rule applies to every entry point, whether paths
    /// come from a file dialog, a drag-and-drop event, or command-line
    /// arguments.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        let present = self.paths.iter().any(|p| p.as_os_str() == path.as_os_str());
        if !has_pdf_extension(&path) || present {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// Remove and return the entry at `index`.
    ///
    /// Entries after `index` shift down by one. Fails with
    /// [`Error::OutOfRange`] when `index` does not name a current entry.
    pub fn remove(&mut self, index: usize) -> Result<PathBuf> {
        if index >= self.paths.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.paths.len(),
            });
        }
        Ok(self.paths.remove(index))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Swap the entry at `index` with its predecessor.
    ///
    /// Returns false, leaving the list untouched, when the entry is already
    /// first or `index` is out of range.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.paths.len() {
            return false;
        }
        self.paths.swap(index, index - 1);
        true
    }

    /// Swap the entry at `index` with its successor.
    ///
    /// Returns false when the entry is already last or `index` is out of
    /// range.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.paths.len() {
            return false;
        }
        self.paths.swap(index, index + 1);
        true
    }

    /// The current contents in merge order.
    pub fn snapshot(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of queued documents.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no documents are queued.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Case-insensitive check for a `.pdf` suffix on the path's own spelling.
///
/// String-based on purpose: `Path::extension` treats names like `.pdf` as
/// extensionless, while the suffix is what users actually typed.
pub(crate) fn has_pdf_extension(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .to_ascii_lowercase()
        .ends_with(".pdf")
}
