//! Template source discovery.
//!
//! [`resolve_assets`] picks where the Ubuntu templates are read from, so
//! callers do not need to know whether they live on disk or in the binary.
//!
//! # Resolution order
//!
//! 1. **Explicit directory** (`--templates-dir` or `templates.local_path`).
//!    It must exist; a bad path is an error rather than a silent fallback.
//! 2. **`$QTNATIVE_TEMPLATES_DIR`** environment variable. Skipped with a
//!    `WARN` if it points at nothing.
//! 3. **Built-in** templates compiled into the binary.
//!
//! ```env
//! QTNATIVE_TEMPLATES_DIR=./my-templates
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use qtnative_core::{application::ports::TemplateAssets, error::CoreResult};

use crate::assets::{DirectoryAssets, EmbeddedAssets};

/// Environment variable naming an override template directory.
pub const TEMPLATES_DIR_ENV: &str = "QTNATIVE_TEMPLATES_DIR";

/// Where the resolved templates came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Explicit(PathBuf),
    Environment(PathBuf),
    BuiltIn,
}

/// Resolve template assets using the order described in the module docs.
#[instrument(skip_all)]
pub fn resolve_assets(explicit: Option<&Path>) -> CoreResult<Box<dyn TemplateAssets>> {
    let env_dir = std::env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from);
    resolve_from(explicit, env_dir).map(|(assets, _)| assets)
}

/// Same as [`resolve_assets`] with the environment value passed in.
pub fn resolve_from(
    explicit: Option<&Path>,
    env_dir: Option<PathBuf>,
) -> CoreResult<(Box<dyn TemplateAssets>, TemplateOrigin)> {
    if let Some(dir) = explicit {
        debug!(path = %dir.display(), "using explicit templates directory");
        let assets = DirectoryAssets::load(dir)?;
        info!(path = %dir.display(), count = assets.len(), "templates loaded");
        return Ok((Box::new(assets), TemplateOrigin::Explicit(dir.to_path_buf())));
    }

    if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
        if dir.is_dir() {
            let assets = DirectoryAssets::load(&dir)?;
            info!(path = %dir.display(), count = assets.len(), "templates loaded from ${TEMPLATES_DIR_ENV}");
            return Ok((Box::new(assets), TemplateOrigin::Environment(dir)));
        }
        warn!(
            path = %dir.display(),
            "${TEMPLATES_DIR_ENV} is not a directory; using built-in templates"
        );
    }

    debug!("using built-in templates");
    Ok((Box::new(EmbeddedAssets::ubuntu()), TemplateOrigin::BuiltIn))
}
