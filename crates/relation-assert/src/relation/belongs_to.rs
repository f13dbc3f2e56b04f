use std::marker::PhantomData;

/// Inverse side of a `HasOne` or `HasMany`; the model holds the foreign key.
pub struct BelongsTo<M: ?Sized> {
    _p: PhantomData<fn() -> Box<M>>,
}

typed_relation!(BelongsTo, BelongsTo);
