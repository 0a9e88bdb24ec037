use crate::prelude::*;

///
/// ModelDefinition
///
/// The flattened union handed to the persistence/query engine: the
/// normalized model metadata plus the property and relation maps.
/// `properties` and `relations` are always present, empty or not, so
/// consumers see a stable shape.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    #[serde(default)]
    pub properties: PropertyMetadataMap,

    #[serde(default)]
    pub relations: RelationMetadataMap,
}
