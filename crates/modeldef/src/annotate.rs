//! Two-stage registration functions executed at class-declaration time.
//!
//! Each function takes caller-supplied metadata and returns a closure
//! applied to the actual declaration site, mirroring the shape of a
//! decorator. Side effects are confined to the registry; the error path
//! never writes.

use crate::{
    error::AttachmentError,
    metadata::{
        AttachmentSite, ModelMetadata, ModelOptions, PropertyMetadata, RelationMetadata, SiteKind,
    },
    registry::registry_write,
    store::{ModelStore, PropertyStore, RelationStore},
    table_name::derive_table_name,
};

/// Register a class as a model. Valid only on a constructor site.
///
/// `name` defaults to the declared class ident; `table_name`, when not
/// supplied, is derived from the final (possibly overridden) name.
pub fn model(
    options: Option<ModelOptions>,
) -> impl FnOnce(&AttachmentSite) -> Result<(), AttachmentError> {
    move |site| {
        if site.kind != SiteKind::Constructor {
            return Err(AttachmentError::NotAConstructor {
                class: site.class.path(),
                found: site.kind,
            });
        }

        let options = options.unwrap_or_default();
        let name = options.name.unwrap_or_else(|| site.class.ident.to_string());
        let table_name = options
            .table_name
            .unwrap_or_else(|| derive_table_name(&name));

        let metadata = ModelMetadata {
            name,
            base: options.base,
            datasource: options.datasource,
            table_name: Some(table_name),
        };
        ModelStore::set_metadata(&mut registry_write(), metadata, &site.class);

        Ok(())
    }
}

/// Attach property metadata to an instance property of the enclosing
/// class. The descriptor is stored verbatim under the property's name.
pub fn property(
    metadata: PropertyMetadata,
) -> impl FnOnce(&AttachmentSite) -> Result<(), AttachmentError> {
    move |site| {
        let property = instance_property_key("property", site)?;
        PropertyStore::set_metadata(&mut registry_write(), metadata, &site.class, property);

        Ok(())
    }
}

/// Attach relation metadata to an instance property of the enclosing
/// class. Identical contract to [`property`], written into the relation
/// category instead.
pub fn relation(
    metadata: RelationMetadata,
) -> impl FnOnce(&AttachmentSite) -> Result<(), AttachmentError> {
    move |site| {
        let property = instance_property_key("relation", site)?;
        RelationStore::set_metadata(&mut registry_write(), metadata, &site.class, property);

        Ok(())
    }
}

// Instance-property sites always carry a property key; every other site
// kind is rejected before anything is written.
fn instance_property_key<'a>(
    annotation: &'static str,
    site: &'a AttachmentSite,
) -> Result<&'a str, AttachmentError> {
    match (site.kind, site.property) {
        (SiteKind::InstanceProperty, Some(property)) => Ok(property),
        _ => Err(AttachmentError::NotAnInstanceProperty {
            annotation,
            class: site.class.path(),
            found: site.kind,
        }),
    }
}
