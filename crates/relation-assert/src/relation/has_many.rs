use std::marker::PhantomData;

/// Associated models that reference this one.
pub struct HasMany<M: ?Sized> {
    _p: PhantomData<fn() -> Box<M>>,
}

typed_relation!(HasMany, HasMany);
