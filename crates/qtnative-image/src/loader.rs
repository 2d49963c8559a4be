//! Image-loading service seam and an in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LoaderError;

/// Intrinsic pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Where a url is currently cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheLocation {
    Memory,
    Disk,
}

/// External service that fetches, decodes, and caches images.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn get_size(&self, url: &str) -> Result<ImageSize, LoaderError>;

    /// Fetch `url` into the cache. `true` once cached.
    async fn prefetch_image(&self, url: &str) -> Result<bool, LoaderError>;

    /// Cache status of each url; uncached urls are absent.
    async fn query_cache(
        &self,
        urls: &[String],
    ) -> Result<HashMap<String, CacheLocation>, LoaderError>;
}

/// In-memory loader with a fixed set of known images.
///
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageLoader {
    inner: Arc<RwLock<MemoryLoaderInner>>,
}

#[derive(Debug, Default)]
struct MemoryLoaderInner {
    sizes: HashMap<String, ImageSize>,
    cache: HashMap<String, CacheLocation>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image the loader can size and prefetch.
    pub fn with_image(self, url: impl Into<String>, width: u32, height: u32) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.sizes.insert(url.into(), ImageSize { width, height });
        }
        self
    }

    /// Mark `url` as already cached.
    pub fn with_cached(self, url: impl Into<String>, location: CacheLocation) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.cache.insert(url.into(), location);
        }
        self
    }

    fn poisoned(url: &str) -> LoaderError {
        LoaderError::Failed {
            url: url.into(),
            reason: "loader state poisoned".into(),
        }
    }
}

#[async_trait]
impl ImageLoader for MemoryImageLoader {
    async fn get_size(&self, url: &str) -> Result<ImageSize, LoaderError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned(url))?;
        inner
            .sizes
            .get(url)
            .copied()
            .ok_or_else(|| LoaderError::NotFound { url: url.into() })
    }

    async fn prefetch_image(&self, url: &str) -> Result<bool, LoaderError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned(url))?;
        if !inner.sizes.contains_key(url) {
            return Err(LoaderError::NotFound { url: url.into() });
        }
        // Memory entries stay in memory.
        inner
            .cache
            .entry(url.to_string())
            .or_insert(CacheLocation::Disk);
        debug!(url, "prefetched");
        Ok(true)
    }

    async fn query_cache(
        &self,
        urls: &[String],
    ) -> Result<HashMap<String, CacheLocation>, LoaderError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| Self::poisoned(urls.first().map(String::as_str).unwrap_or("")))?;
        Ok(urls
            .iter()
            .filter_map(|url| inner.cache.get(url).map(|loc| (url.clone(), *loc)))
            .collect())
    }
}
