//! Image source descriptions.

use serde::{Deserialize, Serialize};

/// One concrete image: where it lives and its intrinsic size, if known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ImageSource {
    pub fn uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Stand-in used when a reference resolves to nothing.
    pub fn placeholder() -> Self {
        Self::default()
    }
}

/// What the caller passes as `source`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetRef {
    /// A resource bundled with the application, by id.
    Packaged(u32),
    /// An inline source.
    Uri(ImageSource),
    /// Resolution variants of the same image.
    Variants(Vec<ImageSource>),
}

impl From<&str> for AssetRef {
    fn from(uri: &str) -> Self {
        Self::Uri(ImageSource::uri(uri))
    }
}

impl From<ImageSource> for AssetRef {
    fn from(source: ImageSource) -> Self {
        Self::Uri(source)
    }
}

/// Result of asset resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedSource {
    Single(ImageSource),
    /// Forwarded as-is; the backend picks a variant.
    Multiple(Vec<ImageSource>),
}
