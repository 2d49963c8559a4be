//! The error type every public core operation returns.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

pub type CoreResult<T> = Result<T, CoreError>;

/// Either a rule was broken (domain) or doing the work failed
/// (application). Display is delegated unchanged.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// How a front end should treat a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied something unacceptable.
    Validation,
    NotFound,
    /// Templates or settings the user pointed at are unusable.
    Configuration,
    Internal,
}

impl From<domain::ErrorCategory> for ErrorCategory {
    fn from(category: domain::ErrorCategory) -> Self {
        match category {
            domain::ErrorCategory::Validation => Self::Validation,
            domain::ErrorCategory::NotFound => Self::NotFound,
            domain::ErrorCategory::Internal => Self::Internal,
        }
    }
}

impl CoreError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
        }
    }
}
