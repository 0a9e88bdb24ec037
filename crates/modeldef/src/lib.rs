pub mod annotate;
pub mod compose;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod store;
pub mod table_name;

use crate::error::{AttachmentError, NotAModelClassError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        annotate::{model, property, relation},
        class_def,
        compose::{compose_definition, compose_definition_in},
        metadata::*,
        store::{ModelStore, PropertyStore, RelationStore},
        table_name::derive_table_name,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    AttachmentError(#[from] AttachmentError),

    #[error(transparent)]
    NotAModelClassError(#[from] NotAModelClassError),
}
