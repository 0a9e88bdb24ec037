mod def;
mod definition;
mod model;
mod property;
mod relation;
mod site;

pub use def::ClassDef;
pub use definition::ModelDefinition;
pub use model::{ModelMetadata, ModelOptions};
pub use property::{PropertyMetadata, PropertyMetadataMap};
pub use relation::{RelationMetadata, RelationMetadataMap};
pub use site::{AttachmentSite, SiteKind};
