use std::marker::PhantomData;

/// A single associated model that references this one.
pub struct HasOne<M: ?Sized> {
    _p: PhantomData<fn() -> Box<M>>,
}

typed_relation!(HasOne, HasOne);
