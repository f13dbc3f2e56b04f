mod models;

use models::*;
use relation_assert::RelationAssert;

#[test]
fn derives_singular_name() {
    RelationAssert::new(&Post).belongs_to::<Author>(None);
    RelationAssert::new(&Comment).belongs_to::<Post>(None);
}

#[test]
fn explicit_name_overrides_derivation() {
    RelationAssert::new(&Post).belongs_to::<Author>("writer");
}

#[test]
#[should_panic(expected = "relation kind mismatch on `author()`: expected belongs-to, found has-many")]
fn has_many_is_not_belongs_to() {
    RelationAssert::new(&Comment).belongs_to::<Author>(None);
}

#[test]
#[should_panic(expected = "related model mismatch on `writer()`")]
fn wrong_related_model() {
    RelationAssert::new(&Post).belongs_to::<Profile>("writer");
}

#[test]
#[should_panic(expected = "relation accessor `profile()` not found")]
fn derived_name_must_exist() {
    RelationAssert::new(&Comment).belongs_to::<Profile>(None);
}
