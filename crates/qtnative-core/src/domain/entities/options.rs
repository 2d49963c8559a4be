use crate::domain::{
    error::DomainError,
    value_objects::{PackageName, TargetName},
};

/// Package suffix used when no `--package` is given: `<lowercased-name>.dev`.
pub const DEFAULT_PACKAGE_SUFFIX: &str = "dev";

/// Options a generator run is invoked with.
///
/// Holds the raw strings exactly as supplied. Nothing is validated here;
/// [`GeneratorOptions::validate`] is the single gate and runs before any
/// side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    target_name: String,
    package: String,
}

impl GeneratorOptions {
    /// Build options, defaulting the package to `<lowercased-name>.dev`.
    pub fn new(target_name: impl Into<String>, package: Option<String>) -> Self {
        Self::with_suffix(target_name, package, DEFAULT_PACKAGE_SUFFIX)
    }

    /// Like [`GeneratorOptions::new`], with a custom default package suffix.
    pub fn with_suffix(
        target_name: impl Into<String>,
        package: Option<String>,
        suffix: &str,
    ) -> Self {
        let target_name = target_name.into();
        let package =
            package.unwrap_or_else(|| format!("{}.{}", target_name.to_lowercase(), suffix));
        Self {
            target_name,
            package,
        }
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Validate both fields, package first.
    pub fn validate(&self) -> Result<ValidatedOptions, DomainError> {
        let package = PackageName::parse(self.package.as_str())?;
        let name = TargetName::parse(self.target_name.as_str())?;
        Ok(ValidatedOptions { name, package })
    }
}

/// Options whose invariants have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOptions {
    pub name: TargetName,
    pub package: PackageName,
}
