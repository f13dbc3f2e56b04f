//! Assertions for the relations a model declares.
//!
//! A test hands a model instance (the *subject*) to [`RelationAssert`] and
//! states which relations it expects:
//!
//! ```
//! # use relation_assert::relation::{BelongsTo, MorphMany, MorphTo};
//! # use relation_assert::{Relation, RelationAssert, Relations};
//! # struct Author;
//! # struct Image;
//! # struct Comment;
//! # impl Relations for Comment {
//! #     fn relation(&self, name: &str) -> Option<Box<dyn Relation>> {
//! #         match name {
//! #             "author" => Some(BelongsTo::<Author>::new().into()),
//! #             "commentable" => Some(MorphTo::new("commentable_type").into()),
//! #             "images" => Some(MorphMany::<Image>::new().into()),
//! #             _ => None,
//! #         }
//! #     }
//! # }
//! # let comment = Comment;
//! RelationAssert::new(&comment)
//!     .belongs_to::<Author>(None)
//!     .morphs_to("commentable", None)
//!     .morph_many::<Image>("images");
//! ```
//!
//! Each call looks up the relation accessor on the subject, then checks the
//! relation's kind and the model it points to. When no accessor name is
//! given, one is derived from the related model's type name.

mod assert;
pub use assert::RelationAssert;

pub mod check;

mod config;
pub use config::{Config, Number};

mod error;
pub use error::Error;

mod kind;
pub use kind::RelationKind;

mod model;
pub use model::ModelType;

pub mod name;
pub use name::derive_method_name;

pub mod relation;
pub use relation::Relation;

mod subject;
pub use subject::Relations;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
