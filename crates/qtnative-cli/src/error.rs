//! CLI errors: what went wrong, what to try next, and which exit code.

use std::error::Error as _;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use qtnative_core::error::{CoreError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The project root given (or the working directory) is not a directory.
    #[error("Destination not found: {path}")]
    DestinationNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("Unknown config key: '{key}'")]
    UnknownConfigKey { key: String },

    #[error("Generation failed: {0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification that decides the exit code and log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationNotFound { path } => vec![
                format!("Create '{}' first, or run from the project root", path.display()),
                "Pass --destination <DIR> to write somewhere else".into(),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check the file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Recreate the defaults with 'qtnative init --force'".into(),
            ],
            Self::UnknownConfigKey { .. } => vec![
                "See every key with 'qtnative config list'".into(),
                "Keys are dotted, e.g. generator.package_suffix".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check permissions and free space on the target disk".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownConfigKey { .. } => ErrorCategory::UserError,
            Self::DestinationNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category().into(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    /// Message, the cause chain when `verbose`, then suggestions.
    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: String, f: fn(&str) -> String| if color { f(&text) } else { text };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n{}",
            paint(format!("error: {self}"), |t| t.red().bold().to_string())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(
                    out,
                    "{}",
                    paint(format!("  caused by: {err}"), |t| t.dimmed().to_string())
                );
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(
                out,
                "\n{}",
                paint("hint:".into(), |t| t.yellow().bold().to_string())
            );
            for suggestion in &suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Re-run with -v for more detail.".into(), |t| t.dimmed().to_string())
            );
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => tracing::warn!(error = %self),
            ErrorCategory::Configuration | ErrorCategory::Internal => tracing::error!(error = %self),
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source);
        }
    }
}

/// Attach a message to a foreign error while converting it.
pub trait IntoCli<T> {
    fn with_cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|source| CliError::IoError {
            message: message().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, CoreError> {
    /// Core errors already say what failed; the context is only traced.
    fn with_cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|err| {
            tracing::debug!(context = %message().into(), "core operation failed");
            CliError::Core(err)
        })
    }
}
