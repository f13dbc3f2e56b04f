use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a model type.
///
/// Two `ModelType`s are equal when they were created from the same Rust type.
/// The type name is only kept for display and for deriving accessor names.
#[derive(Copy, Clone)]
pub struct ModelType {
    id: TypeId,
    name: &'static str,
}

impl ModelType {
    pub fn of<M: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<M>(),
            name: any::type_name::<M>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, e.g. `app::models::Comment`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type name without its module path or generic arguments.
    ///
    /// `app::models::Comment` and `app::Page<app::Comment>` become
    /// `Comment` and `Page`.
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }
}

pub(crate) fn short_name(name: &str) -> &str {
    let name = name.trim_start_matches('&');
    let name = match name.find('<') {
        Some(pos) => &name[..pos],
        None => name,
    };

    name.rsplit("::").next().unwrap_or(name).trim()
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ModelType {}

impl Hash for ModelType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelType({})", self.name)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name)
    }
}
