//! Simple placeholder substitution renderer.

use std::path::Path;

use qtnative_core::{
    application::{
        ApplicationError,
        ports::{TemplateAssets, TemplateRenderer},
    },
    domain::{ProjectStructure, RelativePath, RenderContext, TemplateManifest},
    error::CoreResult,
};
use tracing::{instrument, trace};

/// Renderer that substitutes `{{PACKAGE}}`, `{{NAME}}` and
/// `{{LOWER_CASE_NAME}}` in destinations and in templated contents.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(manifest = manifest.name))]
    fn render(
        &self,
        manifest: &TemplateManifest,
        assets: &dyn TemplateAssets,
        context: &RenderContext,
        output_root: &Path,
    ) -> CoreResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);

        for entry in &manifest.entries {
            let source = RelativePath::new(entry.source);
            let raw = assets.read(&source)?;

            let content = if entry.substitute {
                render_text(&source, raw, context)?
            } else {
                raw
            };

            let destination = context.render(entry.destination);
            trace!(source = %source, destination = %destination, "rendered entry");
            structure.push_file(destination, content, entry.mode);
        }

        for dir in &manifest.directories {
            structure.push_directory(context.render(dir));
        }

        Ok(structure)
    }
}

fn render_text(source: &RelativePath, raw: Vec<u8>, ctx: &RenderContext) -> CoreResult<Vec<u8>> {
    let text = String::from_utf8(raw).map_err(|e| ApplicationError::RenderingFailed {
        reason: format!("{source} is not valid UTF-8: {e}"),
    })?;
    Ok(ctx.render(&text).into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtnative_core::domain::{GeneratorOptions, ManifestEntry, TemplateParams};
    use std::collections::HashMap;

    struct MapAssets(HashMap<&'static str, Vec<u8>>);

    impl TemplateAssets for MapAssets {
        fn read(&self, path: &RelativePath) -> CoreResult<Vec<u8>> {
            self.0
                .get(path.to_string().as_str())
                .cloned()
                .ok_or_else(|| {
                    ApplicationError::MissingTemplate {
                        path: path.clone().into_path_buf(),
                    }
                    .into()
                })
        }

        fn origin(&self) -> String {
            "map".into()
        }
    }

    fn context() -> RenderContext {
        let options = GeneratorOptions::new("MyApp", None).validate().unwrap();
        RenderContext::new(TemplateParams::from_options(&options))
    }

    fn manifest() -> TemplateManifest {
        TemplateManifest {
            name: "test",
            entries: vec![
                ManifestEntry::templated("a.txt", "out/{{NAME}}.txt"),
                ManifestEntry::verbatim("b.bin", "out/{{LOWER_CASE_NAME}}.bin"),
            ],
            directories: vec!["out/share"],
        }
    }

    #[test]
    fn substitutes_contents_and_destinations() {
        let assets = MapAssets(HashMap::from([
            ("a.txt", b"pkg={{PACKAGE}}".to_vec()),
            ("b.bin", b"{{NAME}}".to_vec()),
        ]));

        let structure = SimpleRenderer::new()
            .render(&manifest(), &assets, &context(), Path::new("/root"))
            .unwrap();

        let files = structure.files();
        assert_eq!(files[0].path, Path::new("out/MyApp.txt"));
        assert_eq!(files[0].content, b"pkg=myapp.dev");
        // Verbatim entries keep placeholders in their contents.
        assert_eq!(files[1].path, Path::new("out/myapp.bin"));
        assert_eq!(files[1].content, b"{{NAME}}");
        assert_eq!(structure.directories().len(), 1);
    }

    #[test]
    fn invalid_utf8_in_templated_file_fails() {
        let assets = MapAssets(HashMap::from([
            ("a.txt", vec![0xff, 0xfe]),
            ("b.bin", vec![0xff]),
        ]));

        let err = SimpleRenderer::new()
            .render(&manifest(), &assets, &context(), Path::new("/root"))
            .unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn missing_asset_propagates() {
        let assets = MapAssets(HashMap::new());
        let err = SimpleRenderer::new()
            .render(&manifest(), &assets, &context(), Path::new("/root"))
            .unwrap_err();
        assert!(err.to_string().contains("Template not found"));
    }
}
