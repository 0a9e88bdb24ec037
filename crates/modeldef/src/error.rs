use crate::metadata::SiteKind;
use thiserror::Error as ThisError;

///
/// AttachmentError
///
/// An annotation closure was applied to a declaration site of the wrong
/// kind. Raised at declaration time; the registry is left untouched.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum AttachmentError {
    #[error("the `model` annotation is only supported on a class (applied to {found} of `{class}`)")]
    NotAConstructor { class: String, found: SiteKind },

    #[error(
        "the `{annotation}` annotation is only supported on an instance property (applied to {found} of `{class}`)"
    )]
    NotAnInstanceProperty {
        annotation: &'static str,
        class: String,
        found: SiteKind,
    },
}

///
/// NotAModelClassError
///
/// A definition was requested for a class never registered as a model.
///

#[derive(Debug, ThisError)]
#[error("`{0}` is not a model class")]
pub struct NotAModelClassError(pub String);
