//! Concrete implementations of the `qtnative-core` ports.
//!
//! - [`filesystem`]: real disk and an in-memory tree
//! - [`assets`]: templates compiled into the binary or read from a directory
//! - [`renderer`]: placeholder substitution over a manifest
//! - [`builtin_templates`]: picks which template source to use

pub mod assets;
pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

pub use assets::{DirectoryAssets, EmbeddedAssets};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
