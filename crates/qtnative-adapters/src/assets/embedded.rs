//! Templates compiled into the binary.

use std::collections::HashMap;

use qtnative_core::{
    application::{ApplicationError, ports::TemplateAssets},
    domain::RelativePath,
    error::CoreResult,
};

use super::normalize_path;

macro_rules! template {
    ($path:literal) => {
        (
            $path,
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/ubuntu/", $path))
                .as_slice(),
        )
    };
}

/// Templates shipped inside the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedAssets {
    name: &'static str,
    files: HashMap<&'static str, &'static [u8]>,
}

impl EmbeddedAssets {
    /// The Ubuntu click-package templates.
    pub fn ubuntu() -> Self {
        let files = HashMap::from([
            template!("CMakeLists.txt"),
            template!("build.sh"),
            template!("run-app.sh.in"),
            template!("click/manifest.json"),
            template!("click/desktop"),
            template!("click/apparmor"),
            template!("click/icon.png"),
        ]);

        Self {
            name: "ubuntu",
            files,
        }
    }

    /// Paths of every embedded template, sorted.
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.files.keys().copied().collect();
        paths.sort_unstable();
        paths
    }
}

impl TemplateAssets for EmbeddedAssets {
    fn read(&self, path: &RelativePath) -> CoreResult<Vec<u8>> {
        let key = normalize_path(&path.to_string());
        self.files
            .get(key.as_str())
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| {
                ApplicationError::MissingTemplate {
                    path: path.clone().into_path_buf(),
                }
                .into()
            })
    }

    fn origin(&self) -> String {
        format!("built-in:{}", self.name)
    }
}
