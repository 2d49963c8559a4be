//! # qtnative-image
//!
//! A backend-agnostic image component facade.
//!
//! ```text
//! ImageProps ──► Image::render ──► NativeImageProps ──► ImageBackend
//!                    │
//!                    ├── AssetResolver  (source → {uri, width, height})
//!                    └── ImageLoader    (size / prefetch / cache status)
//! ```
//!
//! [`Image`] holds no state of its own. Every render recomputes the source
//! list and style; the static utilities forward to the loader.

pub mod backend;
pub mod error;
pub mod facade;
pub mod loader;
pub mod props;
pub mod resize;
pub mod resolver;
pub mod source;
pub mod style;

pub use backend::ImageBackend;
pub use error::{ImageError, ImageResult, LoaderError};
pub use facade::{Image, SizeFailure};
pub use loader::{CacheLocation, ImageLoader, ImageSize, MemoryImageLoader};
pub use props::{ImageProps, NativeImageProps};
pub use resize::ResizeMode;
pub use resolver::{AssetResolver, PassthroughResolver};
pub use source::{AssetRef, ImageSource, ResolvedSource};
pub use style::Style;
