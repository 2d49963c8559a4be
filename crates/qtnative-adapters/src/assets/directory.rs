//! Templates loaded from a directory on disk.
//!
//! ```text
//! templates/
//! ├── CMakeLists.txt
//! ├── build.sh
//! ├── run-app.sh.in
//! └── click/
//!     ├── manifest.json
//!     ├── desktop
//!     ├── apparmor
//!     └── icon.png
//! ```

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use qtnative_core::{
    application::{ApplicationError, ports::TemplateAssets},
    domain::RelativePath,
    error::CoreResult,
};

use super::normalize_path;

/// Every regular file under a template root, read eagerly.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
    files: HashMap<String, Vec<u8>>,
}

impl DirectoryAssets {
    /// Walk `root` and read every file beneath it.
    ///
    /// Fails if `root` is not a directory or any file cannot be read.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn load(root: impl AsRef<Path>) -> CoreResult<Self> {
        let root = root.as_ref();
        let load_error = |reason: String| ApplicationError::TemplateLoad {
            path: root.to_path_buf(),
            reason,
        };

        if !root.is_dir() {
            return Err(load_error("not a directory".into()).into());
        }

        let mut files = HashMap::new();
        for walk_entry in WalkDir::new(root).min_depth(1) {
            let walk_entry = walk_entry.map_err(|e| load_error(format!("directory walk error: {e}")))?;

            if !walk_entry.file_type().is_file() {
                continue;
            }

            let abs_path = walk_entry.path();
            let rel = abs_path.strip_prefix(root).map_err(|_| {
                load_error(format!("failed to relativise '{}'", abs_path.display()))
            })?;
            let key = normalize_path(&rel.to_string_lossy());

            let content = fs::read(abs_path)
                .map_err(|e| load_error(format!("failed to read '{key}': {e}")))?;
            files.insert(key, content);
        }

        debug!(count = files.len(), "templates loaded from directory");
        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl TemplateAssets for DirectoryAssets {
    fn read(&self, path: &RelativePath) -> CoreResult<Vec<u8>> {
        self.files
            .get(&normalize_path(&path.to_string()))
            .cloned()
            .ok_or_else(|| {
                ApplicationError::MissingTemplate {
                    path: self.root.join(path),
                }
                .into()
            })
    }

    fn origin(&self) -> String {
        self.root.display().to_string()
    }
}
