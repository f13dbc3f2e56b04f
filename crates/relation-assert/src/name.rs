//! Accessor naming conventions.

use crate::ModelType;

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Derives the default accessor name for a relation to `related`.
///
/// The related type's short name is converted to lower camel case and, when
/// `singular` is false, its last word is pluralized: `Comment` becomes
/// `comment` or `comments`, `BlogPost` becomes `blogPost` or `blogPosts`.
///
/// Word boundaries follow `heck`, so a leading acronym is lowercased as one
/// word: `HTMLParser` becomes `htmlParser`, not `hTMLParser`.
pub fn derive_method_name(related: &ModelType, singular: bool) -> String {
    let name = camel_case(related.short_name());

    if singular {
        name
    } else {
        pluralize(&name)
    }
}

pub fn camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Pluralizes the last word of an identifier and returns it in lower camel
/// case.
pub fn pluralize(name: &str) -> String {
    let snake = name.to_snake_case();

    let plural = match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralize_word(last)),
        None => pluralize_word(&snake),
    };

    plural.to_lower_camel_case()
}

fn pluralize_word(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Comment;
    struct BlogPost;

    #[test]
    fn singular() {
        assert_eq!(derive_method_name(&ModelType::of::<Comment>(), true), "comment");
        assert_eq!(
            derive_method_name(&ModelType::of::<BlogPost>(), true),
            "blogPost"
        );
    }

    #[test]
    fn plural() {
        assert_eq!(
            derive_method_name(&ModelType::of::<Comment>(), false),
            "comments"
        );
        assert_eq!(
            derive_method_name(&ModelType::of::<BlogPost>(), false),
            "blogPosts"
        );
    }

    #[test]
    fn leading_acronym() {
        #[allow(clippy::upper_case_acronyms)]
        struct HTMLParser;

        let ty = ModelType::of::<HTMLParser>();
        assert_eq!(derive_method_name(&ty, true), "htmlParser");
        assert_eq!(derive_method_name(&ty, false), "htmlParsers");
    }

    #[test]
    fn pluralize_irregular() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("salesPerson"), "salesPeople");
    }

    #[test]
    fn pluralize_uncountable() {
        assert_eq!(pluralize("equipment"), "equipment");
        assert_eq!(pluralize("sheep"), "sheep");
    }
}
