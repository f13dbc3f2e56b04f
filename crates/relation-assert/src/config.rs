use crate::RelationKind;

/// Grammatical number of a derived accessor name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn is_singular(self) -> bool {
        matches!(self, Self::Singular)
    }
}

/// Naming conventions used when checking relations.
#[derive(Debug, Clone)]
pub struct Config {
    /// Appended to the morph name to get the discriminator field name.
    pub morph_type_suffix: String,

    /// Number of the derived accessor name, indexed by relation kind.
    naming: [Number; RelationKind::ALL.len()],
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix of polymorphic discriminator fields
    pub fn morph_type_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.morph_type_suffix = suffix.into();
        self
    }

    /// Set whether accessor names derived for `kind` are singular or plural
    pub fn naming(mut self, kind: RelationKind, number: Number) -> Self {
        self.naming[kind.index()] = number;
        self
    }

    /// Number used when deriving an accessor name for a relation of `kind`.
    pub fn number_for(&self, kind: RelationKind) -> Number {
        self.naming[kind.index()]
    }

    /// Discriminator field name for the polymorphic relation `name`.
    pub fn morph_type_for(&self, name: &str) -> String {
        format!("{name}{}", self.morph_type_suffix)
    }
}

impl Default for Config {
    /// Only belongs-to derives a singular name. Every other kind, has-one
    /// included, derives a plural one.
    fn default() -> Self {
        let mut naming = [Number::Plural; RelationKind::ALL.len()];
        naming[RelationKind::BelongsTo.index()] = Number::Singular;

        Self {
            morph_type_suffix: "_type".to_string(),
            naming,
        }
    }
}
