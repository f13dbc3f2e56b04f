use crate::{check, derive_method_name, Config, ModelType, RelationKind, Relations, Result};

/// Chainable relation assertions for a model under test.
///
/// Every assertion panics with a description of the mismatch when it does
/// not hold, failing the enclosing test at the caller's location.
///
/// Accessor names are optional for relations to a typed model. When omitted,
/// the name is derived from the related type: singular for
/// [`belongs_to`](Self::belongs_to), plural for everything else (see
/// [`Config::naming`] to change this).
pub struct RelationAssert<'a, S: ?Sized> {
    subject: &'a S,
    config: Config,
}

impl<'a, S: Relations + ?Sized> RelationAssert<'a, S> {
    pub fn new(subject: &'a S) -> Self {
        Self::with_config(subject, Config::default())
    }

    pub fn with_config(subject: &'a S, config: Config) -> Self {
        Self { subject, config }
    }

    pub fn subject(&self) -> &'a S {
        self.subject
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Asserts that `method` returns a relation of `kind` to `related`.
    #[track_caller]
    pub fn assert_has_relationship(
        &self,
        kind: RelationKind,
        related: ModelType,
        method: &str,
    ) -> &Self {
        ensure(check::has_relationship(self.subject, kind, related, method));
        self
    }

    #[track_caller]
    pub fn belongs_to<'n, M: ?Sized + 'static>(&self, name: impl Into<Option<&'n str>>) -> &Self {
        self.relation::<M>(RelationKind::BelongsTo, name.into())
    }

    #[track_caller]
    pub fn belongs_to_many<'n, M: ?Sized + 'static>(
        &self,
        name: impl Into<Option<&'n str>>,
    ) -> &Self {
        self.relation::<M>(RelationKind::BelongsToMany, name.into())
    }

    #[track_caller]
    pub fn has_many<'n, M: ?Sized + 'static>(&self, name: impl Into<Option<&'n str>>) -> &Self {
        self.relation::<M>(RelationKind::HasMany, name.into())
    }

    /// Asserts a has-one relation to `M`.
    ///
    /// The derived default name is plural, e.g. `profiles` for `Profile`.
    #[track_caller]
    pub fn has_one<'n, M: ?Sized + 'static>(&self, name: impl Into<Option<&'n str>>) -> &Self {
        self.relation::<M>(RelationKind::HasOne, name.into())
    }

    #[track_caller]
    pub fn morph_many<'n, M: ?Sized + 'static>(&self, name: impl Into<Option<&'n str>>) -> &Self {
        self.relation::<M>(RelationKind::MorphMany, name.into())
    }

    /// Asserts that `method` is a polymorphic owner relation whose type is
    /// stored in `<morph_to>_type`, or `<method>_type` when `morph_to` is
    /// `None`.
    #[track_caller]
    pub fn morphs_to<'n>(&self, method: &str, morph_to: impl Into<Option<&'n str>>) -> &Self {
        ensure(check::morphs_to(
            self.subject,
            &self.config,
            method,
            morph_to.into(),
        ));
        self
    }

    pub fn derive_method_name(&self, related: &ModelType, singular: bool) -> String {
        derive_method_name(related, singular)
    }

    #[track_caller]
    fn relation<M: ?Sized + 'static>(&self, kind: RelationKind, name: Option<&str>) -> &Self {
        ensure(check::relation(
            self.subject,
            &self.config,
            kind,
            ModelType::of::<M>(),
            name,
        ));
        self
    }
}

#[track_caller]
fn ensure(result: Result<()>) {
    if let Err(err) = result {
        tracing::debug!(%err, "relation assertion failed");
        panic!("{err}");
    }
}
