//! Generator Service - main application orchestrator.
//!
//! Runs a generator in the same three phases every time:
//! 1. `initialize` - validate options (the only fatal domain check)
//! 2. `write` - render the manifest in memory, then write it
//! 3. `end` - produce the post-generation instructions
//!
//! Rendering happens entirely before the first write, so a missing or
//! unreadable template leaves the destination untouched. Write failures are
//! not rolled back.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateAssets, TemplateRenderer},
    domain::{
        GeneratorOptions, ProjectStructure, RenderContext,
        TemplateManifest, TemplateParams, ValidatedOptions,
    },
    error::CoreResult,
};

/// What a `write` call put on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    pub root: PathBuf,
    pub params: TemplateParams,
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
    pub bytes: usize,
}

/// Instructions printed once generation is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextSteps {
    pub title: String,
    pub lines: Vec<String>,
}

impl NextSteps {
    fn ubuntu(root: &Path) -> Self {
        Self {
            title: "To run your app on Ubuntu:".into(),
            lines: vec![
                "   Have an Ubuntu emulator running, or a device connected".into(),
                format!("   cd {}", root.display()),
                "   react-native run-ubuntu".into(),
            ],
        }
    }
}

impl fmt::Display for NextSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Main generator service.
///
/// Orchestrates validation, rendering, and writing for one manifest.
pub struct GeneratorService {
    manifest: TemplateManifest,
    assets: Box<dyn TemplateAssets>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    /// Create a generator for an arbitrary manifest.
    pub fn new(
        manifest: TemplateManifest,
        assets: Box<dyn TemplateAssets>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            manifest,
            assets,
            renderer,
            filesystem,
        }
    }

    /// Create the Ubuntu target generator.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let generator = GeneratorService::ubuntu(
    ///     Box::new(EmbeddedAssets::ubuntu()),
    ///     Box::new(SimpleRenderer::new()),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// let options = GeneratorOptions::new("MyApp", None);
    /// generator.initialize(&options)?;
    /// generator.write(&options, ".")?;
    /// print!("{}", generator.end("."));
    /// ```
    pub fn ubuntu(
        assets: Box<dyn TemplateAssets>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self::new(TemplateManifest::ubuntu(), assets, renderer, filesystem)
    }

    pub fn manifest(&self) -> &TemplateManifest {
        &self.manifest
    }

    /// Validate options. Nothing is read or written before this passes.
    #[instrument(skip_all, fields(name = %options.target_name(), package = %options.package()))]
    pub fn initialize(&self, options: &GeneratorOptions) -> CoreResult<ValidatedOptions> {
        let validated = options.validate()?;
        self.manifest.validate()?;
        debug!("Options validated");
        Ok(validated)
    }

    /// Render the manifest without touching the filesystem.
    pub fn plan(
        &self,
        options: &GeneratorOptions,
        destination_root: impl AsRef<Path>,
    ) -> CoreResult<ProjectStructure> {
        let validated = self.initialize(options)?;
        self.render(&validated, destination_root.as_ref())
    }

    /// Render and write every manifest entry under `destination_root`.
    ///
    /// Existing files at the same paths are overwritten.
    #[instrument(
        skip_all,
        fields(
            name = %options.target_name(),
            root = %destination_root.as_ref().display()
        )
    )]
    pub fn write(
        &self,
        options: &GeneratorOptions,
        destination_root: impl AsRef<Path>,
    ) -> CoreResult<WriteSummary> {
        let validated = self.initialize(options)?;
        let structure = self.render(&validated, destination_root.as_ref())?;
        info!(entries = structure.len(), bytes = structure.total_bytes(), "Templates rendered");

        let summary = self.write_structure(&structure, TemplateParams::from_options(&validated))?;
        info!(
            files = summary.files.len(),
            directories = summary.directories.len(),
            "Generation completed"
        );
        Ok(summary)
    }

    /// Post-generation instructions for `destination_root`.
    pub fn end(&self, destination_root: impl AsRef<Path>) -> NextSteps {
        NextSteps::ubuntu(destination_root.as_ref())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(manifest = self.manifest.name))]
    fn render(
        &self,
        validated: &ValidatedOptions,
        destination_root: &Path,
    ) -> CoreResult<ProjectStructure> {
        let context = RenderContext::new(TemplateParams::from_options(validated));

        debug!(origin = %self.assets.origin(), "Rendering templates");
        let structure =
            self.renderer
                .render(&self.manifest, self.assets.as_ref(), &context, destination_root)?;
        structure.validate()?;

        Ok(structure)
    }

    fn write_structure(
        &self,
        structure: &ProjectStructure,
        params: TemplateParams,
    ) -> CoreResult<WriteSummary> {
        let mut summary = WriteSummary {
            root: structure.root().to_path_buf(),
            params,
            files: Vec::new(),
            directories: Vec::new(),
            bytes: 0,
        };

        if let Err(e) = self.write_all(structure, &mut summary) {
            warn!(
                error = %e,
                written = summary.files.len(),
                "Write failed; files already written are left in place"
            );
            return Err(e);
        }

        Ok(summary)
    }

    fn write_all(&self, structure: &ProjectStructure, summary: &mut WriteSummary) -> CoreResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for file in structure.files() {
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            if self.filesystem.exists(&path) {
                debug!(path = %path.display(), "Overwriting existing file");
            }

            self.filesystem.write_file(&path, &file.content)?;
            if file.mode.is_executable() {
                self.filesystem.set_permissions(&path, true)?;
            }

            summary.files.push(file.path.clone());
            summary.bytes += file.content.len();
        }

        for dir in structure.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
            summary.directories.push(dir.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockTemplateAssets},
    };
    use crate::domain::{DomainError, RelativePath};
    use crate::error::CoreError;

    /// Copies template bytes and substitutes destinations; contents are
    /// substituted when the entry asks for it.
    struct StubRenderer;

    impl TemplateRenderer for StubRenderer {
        fn render(
            &self,
            manifest: &TemplateManifest,
            assets: &dyn TemplateAssets,
            context: &RenderContext,
            output_root: &Path,
        ) -> CoreResult<ProjectStructure> {
            let mut s = ProjectStructure::new(output_root);
            for entry in &manifest.entries {
                let raw = assets.read(&RelativePath::new(entry.source))?;
                let content = if entry.substitute {
                    context
                        .render(&String::from_utf8_lossy(&raw))
                        .into_bytes()
                } else {
                    raw
                };
                s.push_file(context.render(entry.destination), content, entry.mode);
            }
            for dir in &manifest.directories {
                s.push_directory(*dir);
            }
            Ok(s)
        }
    }

    fn assets_returning(body: &'static str) -> MockTemplateAssets {
        let mut assets = MockTemplateAssets::new();
        assets
            .expect_read()
            .returning(move |_| Ok(body.as_bytes().to_vec()));
        assets.expect_origin().returning(|| "mock".into());
        assets
    }

    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs
    }

    #[test]
    fn invalid_package_fails_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        let mut assets = MockTemplateAssets::new();
        assets.expect_read().never();

        let generator =
            GeneratorService::ubuntu(Box::new(assets), Box::new(StubRenderer), Box::new(fs));
        let options = GeneratorOptions::new("MyApp", Some("BadName".into()));

        let err = generator.write(&options, "/out").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::InvalidPackageName { .. })
        ));
    }

    #[test]
    fn write_creates_every_manifest_file_and_directory() {
        let generator = GeneratorService::ubuntu(
            Box::new(assets_returning("{{PACKAGE}}")),
            Box::new(StubRenderer),
            Box::new(permissive_fs()),
        );
        let summary = generator
            .write(&GeneratorOptions::new("MyApp", None), "/out")
            .unwrap();

        assert_eq!(summary.files.len(), 7);
        assert_eq!(summary.directories, [PathBuf::from("ubuntu/share")]);
        assert!(
            summary
                .files
                .contains(&PathBuf::from("ubuntu/click/MyApp.desktop"))
        );
        assert_eq!(summary.params.package, "myapp.dev");
    }

    #[test]
    fn build_script_is_marked_executable() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_set_permissions()
            .withf(|path, executable| path == Path::new("/out/ubuntu/build.sh") && *executable)
            .times(1)
            .returning(|_, _| Ok(()));

        let generator = GeneratorService::ubuntu(
            Box::new(assets_returning("x")),
            Box::new(StubRenderer),
            Box::new(fs),
        );
        generator
            .write(&GeneratorOptions::new("MyApp", None), "/out")
            .unwrap();
    }

    #[test]
    fn missing_template_writes_nothing() {
        let mut assets = MockTemplateAssets::new();
        assets.expect_origin().returning(|| "mock".into());
        assets.expect_read().returning(|p| {
            Err(ApplicationError::MissingTemplate {
                path: p.clone().into_path_buf(),
            }
            .into())
        });
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let generator =
            GeneratorService::ubuntu(Box::new(assets), Box::new(StubRenderer), Box::new(fs));
        let err = generator
            .write(&GeneratorOptions::new("MyApp", None), "/out")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::MissingTemplate { .. })
        ));
    }

    #[test]
    fn write_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let generator = GeneratorService::ubuntu(
            Box::new(assets_returning("x")),
            Box::new(StubRenderer),
            Box::new(fs),
        );
        assert!(
            generator
                .write(&GeneratorOptions::new("MyApp", None), "/out")
                .is_err()
        );
    }

    #[test]
    fn plan_does_not_touch_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let generator = GeneratorService::ubuntu(
            Box::new(assets_returning("{{NAME}}")),
            Box::new(StubRenderer),
            Box::new(fs),
        );
        let plan = generator
            .plan(&GeneratorOptions::new("MyApp", None), "/out")
            .unwrap();
        assert_eq!(plan.files().len(), 7);
    }

    #[test]
    fn end_mentions_destination_root() {
        let generator = GeneratorService::ubuntu(
            Box::new(MockTemplateAssets::new()),
            Box::new(StubRenderer),
            Box::new(MockFilesystem::new()),
        );
        let steps = generator.end("/home/me/MyApp");
        let text = steps.to_string();
        assert!(text.starts_with("To run your app on Ubuntu:\n"));
        assert!(text.contains("   cd /home/me/MyApp\n"));
        assert!(text.contains("react-native run-ubuntu"));
        assert_eq!(steps.lines.len(), 3);
    }
}
