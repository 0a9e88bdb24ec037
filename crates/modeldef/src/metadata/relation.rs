use std::collections::BTreeMap;

/// Opaque per-field descriptor of an association to another model (kind,
/// target model, foreign key). Not interpreted by the core.
pub type RelationMetadata = serde_json::Value;

/// Property-name keyed relation metadata for one class.
pub type RelationMetadataMap = BTreeMap<String, RelationMetadata>;
