use std::marker::PhantomData;

/// Associated models that reference this one through a polymorphic key.
pub struct MorphMany<M: ?Sized> {
    _p: PhantomData<fn() -> Box<M>>,
}

typed_relation!(MorphMany, MorphMany);
