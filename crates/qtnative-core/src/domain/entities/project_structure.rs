//! A rendered manifest, held in memory until it is written.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::FileMode, error::DomainError};

/// Every file and directory a generator run will produce, relative to
/// [`root`](Self::root).
///
/// Built by a [`TemplateRenderer`](crate::application::ports::TemplateRenderer)
/// and consumed by the writer. Holds no behaviour beyond bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    root: PathBuf,
    files: Vec<RenderedFile>,
    directories: Vec<PathBuf>,
}

/// One rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
    pub mode: FileMode,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
            directories: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn push_file(&mut self, path: impl Into<PathBuf>, content: Vec<u8>, mode: FileMode) {
        self.files.push(RenderedFile {
            path: path.into(),
            content,
            mode,
        });
    }

    pub fn push_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories.push(path.into());
    }

    /// Files in manifest order.
    pub fn files(&self) -> &[RenderedFile] {
        &self.files
    }

    /// Directories that must exist even if empty.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.content.len()).sum()
    }

    /// Non-empty, relative paths only, and no file rendered twice to the
    /// same destination.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidManifest(
                "rendering produced no files".into(),
            ));
        }

        let mut destinations = HashSet::new();
        for file in &self.files {
            let shown = file.path.display().to_string();
            if file.path.has_root() {
                return Err(DomainError::AbsolutePathNotAllowed { path: shown });
            }
            if !destinations.insert(&file.path) {
                return Err(DomainError::DuplicatePath { path: shown });
            }
        }

        match self.directories.iter().find(|d| d.has_root()) {
            Some(dir) => Err(DomainError::AbsolutePathNotAllowed {
                path: dir.display().to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(structure: &mut ProjectStructure, path: &str, body: &[u8]) {
        structure.push_file(path, body.to_vec(), FileMode::Regular);
    }

    #[test]
    fn structure_without_files_is_invalid() {
        let mut s = ProjectStructure::new("out");
        assert!(s.validate().is_err());
        s.push_directory("ubuntu/share");
        assert!(s.validate().is_err());
    }

    #[test]
    fn same_destination_twice_is_rejected() {
        let mut s = ProjectStructure::new("out");
        file(&mut s, "ubuntu/a", b"x");
        file(&mut s, "ubuntu/a", b"y");
        assert_eq!(
            s.validate(),
            Err(DomainError::DuplicatePath {
                path: "ubuntu/a".into()
            })
        );
    }

    #[test]
    fn counts_files_directories_and_bytes() {
        let mut s = ProjectStructure::new("out");
        file(&mut s, "ubuntu/a", b"abc");
        file(&mut s, "ubuntu/b", b"de");
        s.push_directory("ubuntu/share");

        assert!(s.validate().is_ok());
        assert_eq!(s.len(), 3);
        assert_eq!(s.total_bytes(), 5);
        assert_eq!(s.directories(), [PathBuf::from("ubuntu/share")]);
    }
}
