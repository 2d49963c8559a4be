//! Failures while reading templates or writing output.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template source has no file at a manifest path.
    #[error("Template not found: {path}")]
    MissingTemplate { path: PathBuf },

    #[error("Failed to load templates from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An in-memory adapter's lock was poisoned by a panicking writer.
    #[error("Adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingTemplate { path } => vec![
                format!("The template set has no {}", path.display()),
                "Check --templates-dir, templates.local_path or QTNATIVE_TEMPLATES_DIR".into(),
                "Remove the override to fall back to the built-in templates".into(),
            ],
            Self::TemplateLoad { path, .. } => {
                vec![format!("Make sure {} is a readable directory", path.display())]
            }
            Self::RenderingFailed { .. } => {
                vec!["Templated files must be UTF-8; list binary files as verbatim".into()]
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Check write access to {}", path.display()),
                "Files written before the failure were left in place".into(),
            ],
            Self::StoreLockError => Vec::new(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingTemplate { .. } => ErrorCategory::NotFound,
            Self::TemplateLoad { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
