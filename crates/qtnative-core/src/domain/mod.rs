//! Generator rules, free of I/O.
//!
//! Raw options become [`ValidatedOptions`] only through
//! [`GeneratorOptions::validate`]; a [`TemplateManifest`] says what to copy;
//! a [`RenderContext`] says what to substitute. Reading templates and
//! writing files happen behind the application ports.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    common::{FileMode, RelativePath},
    manifest::{ManifestEntry, TemplateManifest},
    options::{DEFAULT_PACKAGE_SUFFIX, GeneratorOptions, ValidatedOptions},
    project_structure::{ProjectStructure, RenderedFile},
    render_context::{RenderContext, TemplateParams},
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{PackageName, TargetName};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_gate_on_package() {
        assert!(GeneratorOptions::new("MyApp", None).validate().is_ok());
        assert!(
            GeneratorOptions::new("MyApp", Some("BadName".into()))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn ubuntu_destinations_render_with_the_name() {
        let opts = GeneratorOptions::new("MyApp", None).validate().unwrap();
        let ctx = RenderContext::new(TemplateParams::from_options(&opts));
        let destinations: Vec<_> = TemplateManifest::ubuntu()
            .entries
            .iter()
            .map(|e| ctx.render(e.destination))
            .collect();

        for expected in [
            "ubuntu/click/MyApp.desktop",
            "ubuntu/click/MyApp.apparmor",
            "ubuntu/click/share/icons/MyApp.png",
        ] {
            assert!(destinations.iter().any(|d| d == expected), "{expected}");
        }
    }
}
