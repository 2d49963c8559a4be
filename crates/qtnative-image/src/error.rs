//! Image facade errors.

use thiserror::Error;

/// Failures reported by an [`ImageLoader`](crate::ImageLoader).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("No image at {url}")]
    NotFound { url: String },

    #[error("Failed to load {url}: {reason}")]
    Failed { url: String, reason: String },
}

/// Errors surfaced by the [`Image`](crate::Image) facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Image content cannot be nested.
    #[error(
        "The <Image> component cannot contain children. If you want to render content on top \
         of the image, consider using the <ImageBackground> component or absolute positioning."
    )]
    ChildrenNotAllowed,

    #[error(transparent)]
    Loader(#[from] LoaderError),
}

pub type ImageResult<T> = Result<T, ImageError>;
