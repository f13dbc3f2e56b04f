use crate::Relation;

/// A model whose relation accessors can be called by name.
///
/// This is the model under test. Implementations map each accessor name to
/// the relation that accessor returns:
///
/// ```
/// # use relation_assert::relation::{BelongsTo, MorphTo};
/// # use relation_assert::{Relation, RelationKind, Relations};
/// # struct Author;
/// struct Comment;
///
/// impl Relations for Comment {
///     fn relation(&self, name: &str) -> Option<Box<dyn Relation>> {
///         match name {
///             "author" => Some(BelongsTo::<Author>::new().into()),
///             "commentable" => Some(MorphTo::new("commentable_type").into()),
///             _ => None,
///         }
///     }
/// }
///
/// let author = Comment.relation("author").unwrap();
/// assert_eq!(author.kind(), RelationKind::BelongsTo);
/// assert!(Comment.relation("likes").is_none());
/// ```
pub trait Relations {
    /// Calls the zero-argument relation accessor called `name`.
    ///
    /// Returns `None` when the model has no such accessor.
    fn relation(&self, name: &str) -> Option<Box<dyn Relation>>;
}

impl<T: Relations + ?Sized> Relations for &T {
    fn relation(&self, name: &str) -> Option<Box<dyn Relation>> {
        (**self).relation(name)
    }
}

impl<T: Relations + ?Sized> Relations for Box<T> {
    fn relation(&self, name: &str) -> Option<Box<dyn Relation>> {
        (**self).relation(name)
    }
}
