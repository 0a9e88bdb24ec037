use crate::{
    metadata::{ClassDef, RelationMetadata, RelationMetadataMap},
    registry::{Category, MetadataValue, Registry},
};
use std::sync::Arc;

///
/// RelationStore
///
/// Relation-category twin of [`crate::store::PropertyStore`], with the
/// same copy-on-write contract.
///

pub struct RelationStore;

impl RelationStore {
    /// Insert one relation's metadata under its property name.
    pub fn set_metadata(
        registry: &mut Registry,
        metadata: RelationMetadata,
        class: &ClassDef,
        property: &str,
    ) {
        let mut map = Arc::unwrap_or_clone(Self::get_metadata(registry, class));
        map.insert(property.to_string(), metadata);

        registry.define(
            Category::Relations,
            class,
            MetadataValue::Relations(Arc::new(map)),
        );
    }

    /// Read the stored relation map, or a fresh empty map when absent.
    #[must_use]
    pub fn get_metadata(registry: &Registry, class: &ClassDef) -> Arc<RelationMetadataMap> {
        match registry.get_own(Category::Relations, class) {
            Some(MetadataValue::Relations(map)) => Arc::clone(map),
            _ => Arc::new(RelationMetadataMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PropertyStore;
    use serde_json::json;

    fn class(ident: &'static str) -> ClassDef {
        ClassDef {
            module_path: "relation_store_tests",
            ident,
        }
    }

    #[test]
    fn relation_and_property_slots_do_not_collide() {
        let mut registry = Registry::new();
        let class = class("Post");

        PropertyStore::set_metadata(&mut registry, json!({"type": "string"}), &class, "author");
        RelationStore::set_metadata(
            &mut registry,
            json!({"kind": "belongsTo", "model": "UserModel"}),
            &class,
            "author",
        );

        let properties = PropertyStore::get_metadata(&registry, &class);
        let relations = RelationStore::get_metadata(&registry, &class);

        assert_eq!(properties["author"], json!({"type": "string"}));
        assert_eq!(
            relations["author"],
            json!({"kind": "belongsTo", "model": "UserModel"})
        );
    }

    #[test]
    fn set_metadata_does_not_mutate_earlier_handles() {
        let mut registry = Registry::new();
        let class = class("Comment");

        let before = RelationStore::get_metadata(&registry, &class);
        RelationStore::set_metadata(
            &mut registry,
            json!({"kind": "belongsTo", "model": "PostModel"}),
            &class,
            "post",
        );

        assert!(before.is_empty());
        assert_eq!(RelationStore::get_metadata(&registry, &class).len(), 1);
    }
}
