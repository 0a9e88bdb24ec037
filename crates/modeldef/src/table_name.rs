use convert_case::{Case, Casing};

// Irregular nouns the suffix rules would get wrong.
const PLURAL_EXCEPTIONS: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("man", "men"),
    ("mouse", "mice"),
    ("person", "people"),
    ("status", "statuses"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Derive the default storage table/collection name for a model name.
///
/// The name is normalized to lower camel case, a trailing `Model` suffix
/// is stripped regardless of its casing, and the stem is pluralized.
/// Degenerate stems of two characters or fewer (`myModel` -> `my`) keep
/// the suffix and pluralize the full camel-cased name instead.
#[must_use]
pub fn derive_table_name(name: &str) -> String {
    // "UserModel" -> "userModel", "Article" -> "article"
    let cc_name = name.to_case(Case::Camel);

    // only a literal trailing "Model" is stripped
    match strip_model_suffix(&cc_name) {
        Some(stem) if stem.chars().count() > 2 => pluralize(stem),
        _ => pluralize(&cc_name),
    }
}

fn strip_model_suffix(name: &str) -> Option<&str> {
    let split = name.len().checked_sub("model".len())?;
    if !name.is_char_boundary(split) {
        return None;
    }

    let (stem, suffix) = name.split_at(split);
    suffix.eq_ignore_ascii_case("model").then_some(stem)
}

// Pluralize a singular noun with the small rule set table names need:
// regular +s, consonant+y -> ies, sibilant endings -> es, plus the
// exception table above.
fn pluralize(noun: &str) -> String {
    if let Some((_, plural)) = PLURAL_EXCEPTIONS
        .iter()
        .find(|(singular, _)| *singular == noun)
    {
        return (*plural).to_string();
    }

    if let Some(stem) = noun.strip_suffix('y') {
        if !stem.is_empty() && !stem.ends_with(is_vowel) {
            return format!("{stem}ies");
        }
    }

    if ends_with_sibilant(noun) {
        return format!("{noun}es");
    }

    format!("{noun}s")
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_with_sibilant(noun: &str) -> bool {
    noun.ends_with(['s', 'x', 'z']) || noun.ends_with("ch") || noun.ends_with("sh")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_model_suffix_and_pluralizes() {
        assert_eq!(derive_table_name("UserModel"), "users");
        assert_eq!(derive_table_name("ArticleModel"), "articles");
    }

    #[test]
    fn pluralizes_names_without_the_suffix() {
        assert_eq!(derive_table_name("Product"), "products");
    }

    #[test]
    fn replaces_consonant_y_with_ies() {
        assert_eq!(derive_table_name("CompanyModel"), "companies");
    }

    #[test]
    fn applies_irregular_noun_exceptions() {
        assert_eq!(derive_table_name("StatusModel"), "statuses");
        assert_eq!(derive_table_name("PersonModel"), "people");
    }

    #[test]
    fn keeps_the_suffix_when_the_stem_is_too_short() {
        assert_eq!(derive_table_name("MyModel"), "myModels");
        assert_eq!(derive_table_name("DoModel"), "doModels");
    }

    #[test]
    fn strips_the_suffix_case_insensitively() {
        assert_eq!(derive_table_name("Usermodel"), "users");
        assert_eq!(derive_table_name("USERMODEL"), "users");
    }

    #[test]
    fn ignores_a_non_trailing_model_substring() {
        assert_eq!(derive_table_name("RemodelAction"), "remodelActions");
    }

    #[test]
    fn appends_es_after_sibilant_endings() {
        assert_eq!(derive_table_name("BoxModel"), "boxes");
        assert_eq!(derive_table_name("BranchModel"), "branches");
        assert_eq!(derive_table_name("FlashModel"), "flashes");
    }

    #[test]
    fn keeps_vowel_y_endings_regular() {
        assert_eq!(derive_table_name("KeyModel"), "keys");
    }
}
