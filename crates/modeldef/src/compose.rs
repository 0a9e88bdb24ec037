use crate::{
    error::NotAModelClassError,
    metadata::{ClassDef, ModelDefinition},
    registry::{Registry, registry_read},
    store::{ModelStore, PropertyStore, RelationStore},
};

/// Compose the full definition for a model class from the global
/// registry. This is the read path the persistence/query engine calls.
pub fn compose_definition(class: &ClassDef) -> Result<ModelDefinition, NotAModelClassError> {
    compose_definition_in(&registry_read(), class)
}

/// Compose a definition from an explicit registry instance.
///
/// Fails when the class was never registered as a model. The property and
/// relation maps default to empty and are always part of the definition;
/// cross-references between models are not checked here.
pub fn compose_definition_in(
    registry: &Registry,
    class: &ClassDef,
) -> Result<ModelDefinition, NotAModelClassError> {
    let model = ModelStore::get_metadata(registry, class)
        .cloned()
        .ok_or_else(|| NotAModelClassError(class.path()))?;

    let properties = PropertyStore::get_metadata(registry, class);
    let relations = RelationStore::get_metadata(registry, class);

    Ok(ModelDefinition {
        name: model.name,
        base: model.base,
        datasource: model.datasource,
        table_name: model.table_name,
        properties: properties.as_ref().clone(),
        relations: relations.as_ref().clone(),
    })
}
