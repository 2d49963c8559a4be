//! Broken generator rules.

use thiserror::Error;

/// A value or manifest the generator refuses to work with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Package name {package} is invalid")]
    InvalidPackageName { package: String },

    #[error("Invalid target name '{name}': {reason}")]
    InvalidTargetName { name: String, reason: String },

    #[error("Invalid template manifest: {0}")]
    InvalidManifest(String),

    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    /// Absolute, or escaping its root with `..`.
    #[error("Path must stay relative to its root: {path}")]
    AbsolutePathNotAllowed { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPackageName { package } => vec![
                format!("'{package}' is not a reverse-domain identifier"),
                "Use at least two dot-separated segments, e.g. myapp.developer".into(),
                "Start each segment with a letter, '_' or '$'; digits may follow".into(),
            ],
            Self::InvalidTargetName { reason, .. } => vec![
                format!("Fix the name: {reason}"),
                "Use a plain application name such as MyApp".into(),
            ],
            Self::InvalidManifest(_)
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => {
                vec!["The template manifest is inconsistent; please report this".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPackageName { .. } | Self::InvalidTargetName { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidManifest(_)
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_package_message_names_the_package() {
        let err = DomainError::InvalidPackageName {
            package: "BadName".into(),
        };
        assert_eq!(err.to_string(), "Package name BadName is invalid");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn invalid_package_suggests_example() {
        let err = DomainError::InvalidPackageName {
            package: "1app.dev".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("myapp.developer")));
    }

    #[test]
    fn manifest_errors_are_internal() {
        let err = DomainError::DuplicatePath {
            path: "ubuntu/build.sh".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
