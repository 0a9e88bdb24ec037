use crate::prelude::*;
use derive_more::Display;

///
/// SiteKind
///
/// Classification of a declaration site, standing in for what a
/// reflection runtime would report about an annotation target.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum SiteKind {
    Constructor,
    InstanceProperty,
    Other,
}

///
/// AttachmentSite
///
/// The declaration site an annotation closure is applied to. The
/// constructors below are the only sanctioned way to build one, so the
/// kind always matches the shape of the site.
///

#[derive(Clone, Copy, Debug)]
pub struct AttachmentSite {
    pub class: ClassDef,
    pub kind: SiteKind,
    pub property: Option<&'static str>,
}

impl AttachmentSite {
    /// The class constructor itself.
    #[must_use]
    pub const fn constructor(class: ClassDef) -> Self {
        Self {
            class,
            kind: SiteKind::Constructor,
            property: None,
        }
    }

    /// A named instance property of the class.
    #[must_use]
    pub const fn instance_property(class: ClassDef, property: &'static str) -> Self {
        Self {
            class,
            kind: SiteKind::InstanceProperty,
            property: Some(property),
        }
    }

    /// Any other site (static member, method, accessor).
    #[must_use]
    pub const fn other(class: ClassDef, property: Option<&'static str>) -> Self {
        Self {
            class,
            kind: SiteKind::Other,
            property,
        }
    }
}
