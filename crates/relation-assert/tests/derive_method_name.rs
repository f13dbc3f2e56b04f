mod models;

use models::*;
use pretty_assertions::assert_eq;
use relation_assert::{derive_method_name, name, ModelType};

mod shop {
    pub mod catalog {
        pub struct ProductCategory;
    }

    pub struct LineItem<T>(pub T);
}

#[test]
fn comment_singular_and_plural() {
    let ty = ModelType::of::<Comment>();

    assert_eq!(derive_method_name(&ty, true), "comment");
    assert_eq!(derive_method_name(&ty, false), "comments");
}

#[test]
fn qualified_name_uses_short_name() {
    let ty = ModelType::of::<shop::catalog::ProductCategory>();

    assert_eq!(ty.short_name(), "ProductCategory");
    assert_eq!(derive_method_name(&ty, true), "productCategory");
    assert_eq!(derive_method_name(&ty, false), "productCategories");
}

#[test]
fn generic_arguments_are_ignored() {
    let ty = ModelType::of::<shop::LineItem<Comment>>();

    assert_eq!(derive_method_name(&ty, true), "lineItem");
    assert_eq!(derive_method_name(&ty, false), "lineItems");
}

#[test]
fn irregular_plural() {
    assert_eq!(derive_method_name(&ModelType::of::<Person>(), false), "people");
}

#[test]
fn deterministic() {
    let ty = ModelType::of::<Image>();

    for singular in [true, false] {
        assert_eq!(
            derive_method_name(&ty, singular),
            derive_method_name(&ty, singular)
        );
    }
}

#[test]
fn camel_case_and_pluralize() {
    assert_eq!(name::camel_case("BlogPost"), "blogPost");
    assert_eq!(name::camel_case("blog_post"), "blogPost");
    assert_eq!(name::pluralize("blogPost"), "blogPosts");
    assert_eq!(name::pluralize("image"), "images");
}
