//! What the generator needs from the outside world.
//!
//! `qtnative-adapters` implements each trait for real use; tests use the
//! `mockall` doubles generated here or the in-memory filesystem adapter.

use std::path::Path;

use crate::domain::{ProjectStructure, RelativePath, RenderContext, TemplateManifest};
use crate::error::CoreResult;

/// Where generated files land.
///
/// Writes replace whatever is already at the path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create `path` and any missing ancestors.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    fn write_file(&self, path: &Path, content: &[u8]) -> CoreResult<()>;

    /// Add (or leave) the execute bits. A no-op where there are none.
    fn set_permissions(&self, path: &Path, executable: bool) -> CoreResult<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// Raw template bytes, addressed by their manifest `source` path.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateAssets: Send + Sync {
    fn read(&self, path: &RelativePath) -> CoreResult<Vec<u8>>;

    /// Where the templates come from, for logs.
    fn origin(&self) -> String;
}

/// Turns a manifest into a [`ProjectStructure`] rooted at `output_root`.
///
/// Every template is read here, before anything is written.
pub trait TemplateRenderer: Send + Sync {
    fn render(
        &self,
        manifest: &TemplateManifest,
        assets: &dyn TemplateAssets,
        context: &RenderContext,
        output_root: &Path,
    ) -> CoreResult<ProjectStructure>;
}
