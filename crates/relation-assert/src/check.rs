//! Relation checks that report failures as [`Error`] values.
//!
//! [`RelationAssert`](crate::RelationAssert) panics on the errors returned
//! here. Use these directly to inspect a failure instead of unwinding.

use crate::{
    derive_method_name, Config, Error, ModelType, Relation, RelationKind, Relations, Result,
};

use std::any;
use std::borrow::Cow;

/// Checks that `subject.method()` is a relation of `kind` to `related`.
pub fn has_relationship<S: Relations + ?Sized>(
    subject: &S,
    kind: RelationKind,
    related: ModelType,
    method: &str,
) -> Result<()> {
    tracing::debug!(
        subject = any::type_name::<S>(),
        method,
        %kind,
        %related,
        "checking relation"
    );

    let relation = call(subject, method)?;

    if relation.kind() != kind {
        return Err(Error::kind_mismatch(method, kind, relation.kind()));
    }

    let actual = relation.related();

    if actual != Some(related) {
        return Err(Error::related_mismatch(method, related, actual));
    }

    Ok(())
}

/// Checks a relation of `kind` to `related`, deriving the accessor name from
/// `related` when `name` is `None`.
pub fn relation<S: Relations + ?Sized>(
    subject: &S,
    config: &Config,
    kind: RelationKind,
    related: ModelType,
    name: Option<&str>,
) -> Result<()> {
    let method = method_name(config, kind, &related, name);
    has_relationship(subject, kind, related, &method)
}

/// Checks that `subject.method()` is a polymorphic owner relation whose
/// discriminator field is named after `morph_to`, or after `method` when
/// `morph_to` is `None` or empty.
pub fn morphs_to<S: Relations + ?Sized>(
    subject: &S,
    config: &Config,
    method: &str,
    morph_to: Option<&str>,
) -> Result<()> {
    tracing::debug!(
        subject = any::type_name::<S>(),
        method,
        morph_to,
        "checking polymorphic owner relation"
    );

    let relation = call(subject, method)?;

    if relation.kind() != RelationKind::MorphTo {
        return Err(Error::kind_mismatch(
            method,
            RelationKind::MorphTo,
            relation.kind(),
        ));
    }

    let morph_to = morph_to.filter(|name| !name.is_empty()).unwrap_or(method);
    let expected = config.morph_type_for(morph_to);

    match relation.morph_type() {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(Error::morph_type_mismatch(method, expected, actual)),
    }
}

/// The accessor name to check: `name` when given, otherwise the name derived
/// from `related` under `config`'s conventions. An empty name counts as not
/// given.
pub fn method_name<'a>(
    config: &Config,
    kind: RelationKind,
    related: &ModelType,
    name: Option<&'a str>,
) -> Cow<'a, str> {
    match name.filter(|name| !name.is_empty()) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(derive_method_name(
            related,
            config.number_for(kind).is_singular(),
        )),
    }
}

fn call<S: Relations + ?Sized>(subject: &S, method: &str) -> Result<Box<dyn Relation>> {
    subject
        .relation(method)
        .ok_or_else(|| Error::missing_accessor(any::type_name::<S>(), method))
}
