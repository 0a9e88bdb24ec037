use crate::{
    metadata::{ClassDef, PropertyMetadata, PropertyMetadataMap},
    registry::{Category, MetadataValue, Registry},
};
use std::sync::Arc;

///
/// PropertyStore
///
/// Typed accessor for the property category. The stored map is replaced
/// wholesale on every write (copy-on-write), so a map handle returned by
/// an earlier read is never retroactively mutated.
///

pub struct PropertyStore;

impl PropertyStore {
    /// Insert one property's metadata under its name. Re-annotating the
    /// same name overwrites the prior descriptor.
    pub fn set_metadata(
        registry: &mut Registry,
        metadata: PropertyMetadata,
        class: &ClassDef,
        property: &str,
    ) {
        let mut map = Arc::unwrap_or_clone(Self::get_metadata(registry, class));
        map.insert(property.to_string(), metadata);

        registry.define(
            Category::Properties,
            class,
            MetadataValue::Properties(Arc::new(map)),
        );
    }

    /// Read the stored property map, or a fresh empty map when absent.
    #[must_use]
    pub fn get_metadata(registry: &Registry, class: &ClassDef) -> Arc<PropertyMetadataMap> {
        match registry.get_own(Category::Properties, class) {
            Some(MetadataValue::Properties(map)) => Arc::clone(map),
            _ => Arc::new(PropertyMetadataMap::new()),
        }
    }
}
