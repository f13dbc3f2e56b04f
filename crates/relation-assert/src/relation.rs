/// Implements the shared parts of a descriptor that targets a single,
/// statically known model type.
macro_rules! typed_relation {
    ($name:ident, $kind:ident) => {
        impl<M: ?Sized> $name<M> {
            pub fn new() -> Self {
                Self {
                    _p: std::marker::PhantomData,
                }
            }
        }

        impl<M: ?Sized> Default for $name<M> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<M: ?Sized> Clone for $name<M> {
            fn clone(&self) -> Self {
                Self::new()
            }
        }

        impl<M: ?Sized> Copy for $name<M> {}

        impl<M: ?Sized + 'static> $crate::Relation for $name<M> {
            fn kind(&self) -> $crate::RelationKind {
                $crate::RelationKind::$kind
            }

            fn related(&self) -> Option<$crate::ModelType> {
                Some($crate::ModelType::of::<M>())
            }
        }

        impl<M: ?Sized> std::fmt::Debug for $name<M> {
            fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    fmt,
                    "{}<{}>",
                    stringify!($name),
                    $crate::model::short_name(std::any::type_name::<M>())
                )
            }
        }

        impl<M: ?Sized + 'static> From<$name<M>> for Box<dyn $crate::Relation> {
            fn from(value: $name<M>) -> Self {
                Box::new(value)
            }
        }
    };
}

mod belongs_to;
pub use belongs_to::BelongsTo;

mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod has_many;
pub use has_many::HasMany;

mod has_one;
pub use has_one::HasOne;

mod morph_many;
pub use morph_many::MorphMany;

mod morph_to;
pub use morph_to::MorphTo;

use crate::{ModelType, RelationKind};

/// A relation returned by a model's relation accessor.
///
/// ORM adapters implement this for their own relation objects. Hand-written
/// models can return one of the descriptors in this module instead.
pub trait Relation {
    fn kind(&self) -> RelationKind;

    /// The model on the other end of the relation.
    ///
    /// `None` when the target is only known at runtime, as for an unresolved
    /// [`MorphTo`].
    fn related(&self) -> Option<ModelType>;

    /// Name of the field storing the related model's type. Only polymorphic
    /// owner relations have one.
    fn morph_type(&self) -> Option<&str> {
        None
    }
}

impl<R: Relation + ?Sized> Relation for Box<R> {
    fn kind(&self) -> RelationKind {
        (**self).kind()
    }

    fn related(&self) -> Option<ModelType> {
        (**self).related()
    }

    fn morph_type(&self) -> Option<&str> {
        (**self).morph_type()
    }
}

impl<R: Relation + ?Sized> Relation for &R {
    fn kind(&self) -> RelationKind {
        (**self).kind()
    }

    fn related(&self) -> Option<ModelType> {
        (**self).related()
    }

    fn morph_type(&self) -> Option<&str> {
        (**self).morph_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Author;

    #[test]
    fn typed_descriptors() {
        let rel = BelongsTo::<Author>::new();
        assert_eq!(rel.kind(), RelationKind::BelongsTo);
        assert_eq!(rel.related(), Some(ModelType::of::<Author>()));
        assert_eq!(rel.morph_type(), None);
        assert_eq!(format!("{rel:?}"), "BelongsTo<Author>");

        assert_eq!(HasMany::<Author>::new().kind(), RelationKind::HasMany);
        assert_eq!(HasOne::<Author>::new().kind(), RelationKind::HasOne);
        assert_eq!(
            BelongsToMany::<Author>::new().kind(),
            RelationKind::BelongsToMany
        );
        assert_eq!(MorphMany::<Author>::new().kind(), RelationKind::MorphMany);
    }

    #[test]
    fn boxed_relation_delegates() {
        let rel: Box<dyn Relation> = MorphTo::new("commentable_type").into();
        assert_eq!(rel.kind(), RelationKind::MorphTo);
        assert_eq!(rel.related(), None);
        assert_eq!(rel.morph_type(), Some("commentable_type"));
    }
}
