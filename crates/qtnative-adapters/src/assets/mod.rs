//! Template asset sources.
//!
//! Both sources hold every template in memory once constructed, so reads
//! during rendering never touch the disk.

mod directory;
mod embedded;

pub use directory::DirectoryAssets;
pub use embedded::EmbeddedAssets;

/// Normalize a relative path to forward slashes for map lookups.
pub(crate) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
