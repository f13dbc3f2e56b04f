use super::Error;
use crate::RelationKind;

/// Error when an accessor returns a relation of the wrong kind.
#[derive(Debug)]
pub(super) struct KindMismatchError {
    method: Box<str>,
    expected: RelationKind,
    actual: RelationKind,
}

impl std::error::Error for KindMismatchError {}

impl core::fmt::Display for KindMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relation kind mismatch on `{}()`: expected {}, found {}",
            self.method, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a relation kind mismatch error.
    pub fn kind_mismatch(
        method: impl Into<String>,
        expected: RelationKind,
        actual: RelationKind,
    ) -> Error {
        Error::from(super::ErrorKind::KindMismatch(KindMismatchError {
            method: method.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a relation kind mismatch.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::KindMismatch(_))
    }
}
