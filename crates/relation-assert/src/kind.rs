use std::fmt;

/// The category of a relation between two models.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// The model holds the foreign key of a single related model.
    BelongsTo,

    /// Many-to-many, through a pivot table.
    BelongsToMany,

    /// Any number of related models hold this model's key.
    HasMany,

    /// A single related model holds this model's key.
    HasOne,

    /// Polymorphic owner. The related model's type is stored in a
    /// discriminator field next to its key.
    MorphTo,

    /// Polymorphic has-many.
    MorphMany,
}

impl RelationKind {
    pub const ALL: [RelationKind; 6] = [
        Self::BelongsTo,
        Self::BelongsToMany,
        Self::HasMany,
        Self::HasOne,
        Self::MorphTo,
        Self::MorphMany,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BelongsTo => "belongs-to",
            Self::BelongsToMany => "belongs-to-many",
            Self::HasMany => "has-many",
            Self::HasOne => "has-one",
            Self::MorphTo => "morph-to",
            Self::MorphMany => "morph-many",
        }
    }

    pub fn is_polymorphic(self) -> bool {
        matches!(self, Self::MorphTo | Self::MorphMany)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::BelongsTo => 0,
            Self::BelongsToMany => 1,
            Self::HasMany => 2,
            Self::HasOne => 3,
            Self::MorphTo => 4,
            Self::MorphMany => 5,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
