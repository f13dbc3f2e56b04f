use std::marker::PhantomData;

/// Many-to-many relation through a pivot table.
pub struct BelongsToMany<M: ?Sized> {
    _p: PhantomData<fn() -> Box<M>>,
}

typed_relation!(BelongsToMany, BelongsToMany);
