//! Declarative template manifest.
//!
//! A manifest lists every template file a generator copies and how: the
//! destination path (always substituted), whether the contents are
//! substituted, and whether the result is executable. Adding a file to a
//! generator means adding one row here, not another branch in the writer.

use std::collections::HashSet;

use crate::domain::{
    entities::common::{FileMode, RelativePath},
    error::DomainError,
};

/// One template file in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path of the template, relative to the template root.
    pub source: &'static str,
    /// Destination path relative to the destination root. May contain
    /// placeholders.
    pub destination: &'static str,
    /// Apply placeholder substitution to the contents.
    pub substitute: bool,
    pub mode: FileMode,
}

impl ManifestEntry {
    /// Copy with substitution applied to the contents.
    pub const fn templated(source: &'static str, destination: &'static str) -> Self {
        Self {
            source,
            destination,
            substitute: true,
            mode: FileMode::Regular,
        }
    }

    /// Byte-for-byte copy (binary assets, files without placeholders).
    pub const fn verbatim(source: &'static str, destination: &'static str) -> Self {
        Self {
            source,
            destination,
            substitute: false,
            mode: FileMode::Regular,
        }
    }

    pub const fn executable(mut self) -> Self {
        self.mode = FileMode::Executable;
        self
    }
}

/// A fixed set of template files plus directories that must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateManifest {
    pub name: &'static str,
    pub entries: Vec<ManifestEntry>,
    pub directories: Vec<&'static str>,
}

impl TemplateManifest {
    /// The Ubuntu click-package target.
    pub fn ubuntu() -> Self {
        Self {
            name: "ubuntu",
            entries: vec![
                ManifestEntry::templated("CMakeLists.txt", "ubuntu/CMakeLists.txt"),
                ManifestEntry::templated("build.sh", "ubuntu/build.sh").executable(),
                ManifestEntry::templated("run-app.sh.in", "ubuntu/run-app.sh.in"),
                ManifestEntry::templated("click/manifest.json", "ubuntu/click/manifest.json"),
                ManifestEntry::templated("click/desktop", "ubuntu/click/{{NAME}}.desktop"),
                ManifestEntry::verbatim("click/apparmor", "ubuntu/click/{{NAME}}.apparmor"),
                ManifestEntry::verbatim(
                    "click/icon.png",
                    "ubuntu/click/share/icons/{{NAME}}.png",
                ),
            ],
            directories: vec!["ubuntu/share"],
        }
    }

    /// Template sources in manifest order.
    pub fn sources(&self) -> impl Iterator<Item = RelativePath> + '_ {
        self.entries.iter().map(|e| RelativePath::new(e.source))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidManifest(format!(
                "manifest '{}' has no entries",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        let paths = self
            .entries
            .iter()
            .flat_map(|e| [e.source, e.destination])
            .chain(self.directories.iter().copied());

        for path in paths {
            RelativePath::parse(path)?;
        }

        for entry in &self.entries {
            if !seen.insert(entry.destination) {
                return Err(DomainError::DuplicatePath {
                    path: entry.destination.into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ubuntu_manifest_is_valid() {
        assert!(TemplateManifest::ubuntu().validate().is_ok());
    }

    #[test]
    fn ubuntu_manifest_nests_everything_under_ubuntu() {
        let manifest = TemplateManifest::ubuntu();
        assert!(manifest.entries.iter().all(|e| e.destination.starts_with("ubuntu/")));
        assert_eq!(manifest.directories, ["ubuntu/share"]);
    }

    #[test]
    fn binary_assets_are_copied_verbatim() {
        let manifest = TemplateManifest::ubuntu();
        let verbatim: Vec<_> = manifest
            .entries
            .iter()
            .filter(|e| !e.substitute)
            .map(|e| e.source)
            .collect();
        assert_eq!(verbatim, ["click/apparmor", "click/icon.png"]);
    }

    #[test]
    fn only_build_script_is_executable() {
        let manifest = TemplateManifest::ubuntu();
        let exec: Vec<_> = manifest
            .entries
            .iter()
            .filter(|e| e.mode.is_executable())
            .map(|e| e.source)
            .collect();
        assert_eq!(exec, ["build.sh"]);
    }

    #[test]
    fn duplicate_destination_is_rejected() {
        let manifest = TemplateManifest {
            name: "dup",
            entries: vec![
                ManifestEntry::templated("a", "out/x"),
                ManifestEntry::verbatim("b", "out/x"),
            ],
            directories: vec![],
        };
        assert_eq!(
            manifest.validate(),
            Err(DomainError::DuplicatePath {
                path: "out/x".into()
            })
        );
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let manifest = TemplateManifest {
            name: "empty",
            entries: vec![],
            directories: vec![],
        };
        assert!(matches!(
            manifest.validate(),
            Err(DomainError::InvalidManifest(_))
        ));
    }
}
