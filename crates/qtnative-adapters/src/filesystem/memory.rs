//! A filesystem that lives in a map, for tests and dry runs.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use qtnative_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CoreResult,
};

/// In-memory [`Filesystem`].
///
/// Clones share storage: hand one to a service, inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    state: Arc<RwLock<Tree>>,
}

#[derive(Debug, Default)]
struct Tree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    executables: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn inspect<T>(&self, f: impl FnOnce(&Tree) -> T) -> Option<T> {
        self.state.read().ok().map(|tree| f(&tree))
    }

    fn modify<T>(&self, f: impl FnOnce(&mut Tree) -> CoreResult<T>) -> CoreResult<T> {
        let mut tree = self
            .state
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        f(&mut tree)
    }

    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.inspect(|t| t.files.get(path).cloned()).flatten()
    }

    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        String::from_utf8(self.read_file(path)?).ok()
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.inspect(|t| t.executables.contains(path)).unwrap_or(false)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inspect(|t| t.directories.contains(path)).unwrap_or(false)
    }

    /// Every file path, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inspect(|t| t.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        self.modify(|tree| {
            tree.directories
                .extend(path.ancestors().filter(|a| !a.as_os_str().is_empty()).map(Path::to_path_buf));
            Ok(())
        })
    }

    /// Fails unless the parent directory was created first.
    fn write_file(&self, path: &Path, content: &[u8]) -> CoreResult<()> {
        self.modify(|tree| {
            let orphaned = path
                .parent()
                .is_some_and(|p| !p.as_os_str().is_empty() && !tree.directories.contains(p));
            if orphaned {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
            tree.files.insert(path.to_path_buf(), content.to_vec());
            Ok(())
        })
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> CoreResult<()> {
        self.modify(|tree| {
            if executable {
                tree.executables.insert(path.to_path_buf());
            } else {
                tree.executables.remove(path);
            }
            Ok(())
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inspect(|t| t.files.contains_key(path) || t.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/ubuntu/share")).unwrap();
        for dir in ["out", "out/ubuntu", "out/ubuntu/share"] {
            assert!(fs.is_dir(Path::new(dir)), "{dir}");
        }
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("out/a"), b"x").is_err());
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/a"), b"x").unwrap();
        assert_eq!(fs.read_to_string(Path::new("out/a")).as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("d")).unwrap();
        fs.write_file(Path::new("d/f"), b"1").unwrap();
        fs.set_permissions(Path::new("d/f"), true).unwrap();
        assert_eq!(other.list_files(), [PathBuf::from("d/f")]);
        assert!(other.is_executable(Path::new("d/f")));
    }
}
