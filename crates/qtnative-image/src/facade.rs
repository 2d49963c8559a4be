//! The image component and its static utilities.

use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    AssetResolver, ImageBackend, ImageLoader, ImageProps, ImageSource, NativeImageProps,
    ResizeMode, Style,
    error::{ImageError, ImageResult},
    loader::CacheLocation,
    source::{AssetRef, ResolvedSource},
};

/// Keys [`NativeImageProps`] fills in itself.
const RESERVED_PROPS: [&str; 4] = ["source", "style", "resizeMode", "tintColor"];

/// Failure callback for [`Image::get_size`].
pub type SizeFailure = Box<dyn FnOnce(ImageError) + Send>;

/// Image component facade.
///
/// Generic over the asset resolver and image loader so hosts can plug in
/// their own services. The facade itself keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Image<R, L> {
    resolver: R,
    loader: L,
}

impl<R, L> Image<R, L>
where
    R: AssetResolver,
    L: ImageLoader,
{
    pub fn new(resolver: R, loader: L) -> Self {
        Self { resolver, loader }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Normalize `props` and hand them to `backend`.
    pub fn render<B: ImageBackend>(&self, props: ImageProps, backend: &B) -> ImageResult<B::Output> {
        let native = self.normalize(props)?;
        Ok(backend.render(native))
    }

    /// Resolve the source, compute style / resize mode / tint, and collect
    /// the props a backend receives.
    ///
    /// A legacy `src` prop or an empty scalar uri only logs a warning.
    /// Children are rejected after those warnings are emitted. Caller
    /// extras never override the normalized keys.
    pub fn normalize(&self, props: ImageProps) -> ImageResult<NativeImageProps> {
        let resolved = props
            .source
            .as_ref()
            .and_then(|reference| self.resolver.resolve(reference))
            .unwrap_or_else(|| ResolvedSource::Single(ImageSource::placeholder()));

        let caller_style = props.style.unwrap_or_default();
        let base = Style::base();

        let (sources, style) = match resolved {
            ResolvedSource::Multiple(sources) => {
                (sources, Style::flatten([&base, &caller_style]))
            }
            ResolvedSource::Single(source) => {
                if source.uri.as_deref() == Some("") {
                    warn!("source.uri should not be an empty string");
                }
                let dimensions = dimensions_of(&source);
                let style = Style::flatten([&dimensions, &base, &caller_style]);
                (vec![source], style)
            }
        };

        let resize_mode = props
            .resize_mode
            .or_else(|| style_resize_mode(&style))
            .unwrap_or_default();
        let tint_color = style.get("tintColor").cloned();

        if props.src.is_some() {
            warn!("The <Image> component requires a `source` property rather than `src`.");
        }
        if props.children.is_some() {
            return Err(ImageError::ChildrenNotAllowed);
        }

        let mut extra = props.extra;
        for key in RESERVED_PROPS {
            if extra.remove(key).is_some() {
                debug!(key, "dropping caller prop shadowed by the normalized value");
            }
        }

        Ok(NativeImageProps {
            source: sources,
            style,
            resize_mode,
            tint_color,
            props: extra,
        })
    }

    /// Query the intrinsic size of `url`.
    ///
    /// The returned future calls `on_success(width, height)` or, on failure,
    /// `on_failure` when given. Without a failure callback the error is
    /// logged and dropped. Nothing runs until the future is polled.
    pub fn get_size<'a, S>(
        &'a self,
        url: &'a str,
        on_success: S,
        on_failure: Option<SizeFailure>,
    ) -> impl Future<Output = ()> + Send + 'a
    where
        S: FnOnce(u32, u32) + Send + 'a,
    {
        async move {
            match self.loader.get_size(url).await {
                Ok(size) => on_success(size.width, size.height),
                Err(err) => match on_failure {
                    Some(on_failure) => on_failure(ImageError::Loader(err)),
                    None => warn!(error = %err, "Failed to get size for image: {url}"),
                },
            }
        }
    }

    /// Ask the loader to cache `url`.
    #[instrument(skip(self))]
    pub async fn prefetch(&self, url: &str) -> ImageResult<bool> {
        let cached = self.loader.prefetch_image(url).await?;
        debug!(cached, "prefetch finished");
        Ok(cached)
    }

    /// Where each of `urls` is cached. Uncached urls are absent.
    pub async fn query_cache(&self, urls: &[String]) -> ImageResult<HashMap<String, CacheLocation>> {
        Ok(self.loader.query_cache(urls).await?)
    }

    /// Resolve a reference with the configured resolver, unchanged.
    pub fn resolve_asset_source(&self, reference: &AssetRef) -> Option<ResolvedSource> {
        self.resolver.resolve(reference)
    }
}

/// `{width, height}` of a source, omitting unknown dimensions.
fn dimensions_of(source: &ImageSource) -> Style {
    let mut style = Style::new();
    if let Some(width) = source.width {
        style = style.set("width", width);
    }
    if let Some(height) = source.height {
        style = style.set("height", height);
    }
    style
}

fn style_resize_mode(style: &Style) -> Option<ResizeMode> {
    let value = style.get("resizeMode")?;
    match value.as_str().map(str::parse::<ResizeMode>) {
        Some(Ok(mode)) => Some(mode),
        _ => {
            warn!(value = %value, "ignoring unrecognised resizeMode in style");
            None
        }
    }
}
