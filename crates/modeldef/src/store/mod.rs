mod model;
mod property;
mod relation;

pub use model::ModelStore;
pub use property::PropertyStore;
pub use relation::RelationStore;
