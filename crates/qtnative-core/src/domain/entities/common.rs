//! Template-relative paths and file modes.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::DomainError;

/// A path below a template root or a destination root.
///
/// Never absolute and never climbs out of its root with `..`. Manifest
/// literals use [`RelativePath::new`]; anything read from outside goes
/// through [`RelativePath::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Wrap a path known to be relative.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug_assert!(
            Self::escapes(&path).is_none(),
            "template path must stay below its root: {}",
            path.display()
        );
        Self(path)
    }

    pub fn parse(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        match Self::escapes(&path) {
            Some(_) => Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            }),
            None => Ok(Self(path)),
        }
    }

    fn escapes(path: &Path) -> Option<Component<'_>> {
        path.components().find(|c| {
            matches!(
                c,
                Component::RootDir | Component::Prefix(_) | Component::ParentDir
            )
        })
    }

    /// Resolve under `root`.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

/// How a generated file is marked on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FileMode {
    #[default]
    Regular,
    /// Gets the execute bits on Unix.
    Executable,
}

impl FileMode {
    pub const fn is_executable(self) -> bool {
        matches!(self, Self::Executable)
    }
}
