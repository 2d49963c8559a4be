//! Writes to the real disk.

use std::io;
use std::path::Path;

use tracing::trace;

use qtnative_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CoreError, CoreResult},
};

/// `std::fs` behind the [`Filesystem`] port.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir_all(path).map_err(|e| fs_error(path, "create directory", e))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> CoreResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| fs_error(path, "write file", e))
    }

    #[cfg(unix)]
    fn set_permissions(&self, path: &Path, executable: bool) -> CoreResult<()> {
        use std::os::unix::fs::PermissionsExt;

        if !executable {
            return Ok(());
        }
        let mut permissions = std::fs::metadata(path)
            .map_err(|e| fs_error(path, "read metadata", e))?
            .permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        std::fs::set_permissions(path, permissions).map_err(|e| fs_error(path, "chmod", e))
    }

    #[cfg(not(unix))]
    fn set_permissions(&self, _path: &Path, _executable: bool) -> CoreResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn fs_error(path: &Path, operation: &str, e: io::Error) -> CoreError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
