use std::collections::BTreeMap;

/// Opaque per-field descriptor (type, default, constraints). The core
/// stores and returns it verbatim and never inspects its fields.
pub type PropertyMetadata = serde_json::Value;

/// Property-name keyed metadata for one class. Each name maps to at most
/// one descriptor; re-annotating a name overwrites it.
pub type PropertyMetadataMap = BTreeMap<String, PropertyMetadata>;
