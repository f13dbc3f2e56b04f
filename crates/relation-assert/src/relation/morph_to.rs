use crate::{ModelType, Relation, RelationKind};

/// Polymorphic owner relation.
///
/// The owning model's type is only known per record, so the descriptor
/// carries the name of the discriminator field instead of a target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphTo {
    /// Field storing the owning model's type, e.g. `commentable_type`.
    morph_type: String,

    /// Set once the relation has been resolved against a concrete record.
    related: Option<ModelType>,
}

impl MorphTo {
    pub fn new(morph_type: impl Into<String>) -> Self {
        Self {
            morph_type: morph_type.into(),
            related: None,
        }
    }

    /// Returns the relation resolved to a concrete owner type.
    pub fn resolved<M: ?Sized + 'static>(mut self) -> Self {
        self.related = Some(ModelType::of::<M>());
        self
    }
}

impl Relation for MorphTo {
    fn kind(&self) -> RelationKind {
        RelationKind::MorphTo
    }

    fn related(&self) -> Option<ModelType> {
        self.related
    }

    fn morph_type(&self) -> Option<&str> {
        Some(&self.morph_type)
    }
}

impl From<MorphTo> for Box<dyn Relation> {
    fn from(value: MorphTo) -> Self {
        Box::new(value)
    }
}
