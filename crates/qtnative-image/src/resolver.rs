//! Asset resolution.

use std::collections::HashMap;

use crate::source::{AssetRef, ImageSource, ResolvedSource};

/// Maps an abstract image reference to concrete sources.
pub trait AssetResolver: Send + Sync {
    /// `None` when the reference resolves to nothing.
    fn resolve(&self, reference: &AssetRef) -> Option<ResolvedSource>;
}

/// Returns inline sources unchanged and looks packaged ids up in a table.
#[derive(Debug, Clone, Default)]
pub struct PassthroughResolver {
    packaged: HashMap<u32, ImageSource>,
}

impl PassthroughResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundled resource.
    pub fn with_packaged(mut self, id: u32, source: ImageSource) -> Self {
        self.packaged.insert(id, source);
        self
    }
}

impl AssetResolver for PassthroughResolver {
    fn resolve(&self, reference: &AssetRef) -> Option<ResolvedSource> {
        match reference {
            AssetRef::Packaged(id) => self.packaged.get(id).cloned().map(ResolvedSource::Single),
            AssetRef::Uri(source) => Some(ResolvedSource::Single(source.clone())),
            AssetRef::Variants(sources) => Some(ResolvedSource::Multiple(sources.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_packaged_id_resolves_to_nothing() {
        assert_eq!(PassthroughResolver::new().resolve(&AssetRef::Packaged(7)), None);
    }

    #[test]
    fn packaged_id_uses_table() {
        let icon = ImageSource::uri("asset:/icon.png").with_size(48.0, 48.0);
        let resolver = PassthroughResolver::new().with_packaged(1, icon.clone());
        assert_eq!(
            resolver.resolve(&AssetRef::Packaged(1)),
            Some(ResolvedSource::Single(icon))
        );
    }

    #[test]
    fn variants_pass_through_in_order() {
        let variants = vec![ImageSource::uri("a@1x"), ImageSource::uri("a@2x")];
        assert_eq!(
            PassthroughResolver::new().resolve(&AssetRef::Variants(variants.clone())),
            Some(ResolvedSource::Multiple(variants))
        );
    }
}
