use crate::{
    metadata::{ClassDef, ModelMetadata},
    registry::{Category, MetadataValue, Registry},
};

///
/// ModelStore
///
/// Typed accessor for the model category. One whole-object slot per
/// class; a write replaces the previous object, never merges into it.
///

pub struct ModelStore;

impl ModelStore {
    /// Store model metadata for a class, overwriting any previous object.
    pub fn set_metadata(registry: &mut Registry, metadata: ModelMetadata, class: &ClassDef) {
        registry.define(Category::Model, class, MetadataValue::Model(metadata));
    }

    /// Read the stored model metadata, or `None` when the class was never
    /// annotated as a model. Callers use absence as that test.
    #[must_use]
    pub fn get_metadata<'a>(registry: &'a Registry, class: &ClassDef) -> Option<&'a ModelMetadata> {
        match registry.get_own(Category::Model, class)? {
            MetadataValue::Model(metadata) => Some(metadata),
            _ => None,
        }
    }
}
