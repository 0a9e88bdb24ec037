use crate::prelude::*;

///
/// ClassDef
///
/// Stable identity token for a class-like declaration, captured at the
/// declaration site. Two declarations are the same class exactly when
/// their module path and ident match.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ClassDef {
    pub module_path: &'static str,
    pub ident: &'static str,
}

impl ClassDef {
    /// Fully qualified path used as the registry key.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.module_path, self.ident)
    }
}

/// Build a [`ClassDef`] for a type declared in the current module.
#[macro_export]
macro_rules! class_def {
    ($ident:ident) => {
        $crate::metadata::ClassDef {
            module_path: ::core::module_path!(),
            ident: ::core::stringify!($ident),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_module_path_and_ident() {
        let def = ClassDef {
            module_path: "app::models",
            ident: "UserModel",
        };

        assert_eq!(def.path(), "app::models::UserModel");
    }

    #[test]
    fn class_def_macro_captures_declaration_site() {
        let def = class_def!(ArticleModel);

        assert_eq!(def.ident, "ArticleModel");
        assert_eq!(def.module_path, module_path!());
    }
}
