//! Component properties, before and after normalization.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{ImageSource, ResizeMode, Style, source::AssetRef};

/// Properties a caller renders an image with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageProps {
    pub source: Option<AssetRef>,
    pub style: Option<Style>,
    pub resize_mode: Option<ResizeMode>,
    /// Legacy alias for `source`; only triggers a warning.
    pub src: Option<String>,
    /// Nested content. Images cannot have any.
    pub children: Option<Vec<Value>>,
    /// Anything else, forwarded to the backend untouched.
    pub extra: Map<String, Value>,
}

impl ImageProps {
    pub fn new(source: impl Into<AssetRef>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = Some(mode);
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// What the rendering backend receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeImageProps {
    /// Always a list; a single source is wrapped.
    pub source: Vec<ImageSource>,
    pub style: Style,
    pub resize_mode: ResizeMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<Value>,
    #[serde(flatten)]
    pub props: Map<String, Value>,
}
