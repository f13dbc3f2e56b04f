use super::Error;
use crate::ModelType;

/// Error when a relation points to a different model than expected.
///
/// `actual` is `None` when the relation could not name its target, as for a
/// polymorphic owner that has not been resolved.
#[derive(Debug)]
pub(super) struct RelatedMismatchError {
    method: Box<str>,
    expected: ModelType,
    actual: Option<ModelType>,
}

impl std::error::Error for RelatedMismatchError {}

impl core::fmt::Display for RelatedMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "related model mismatch on `{}()`: expected {}, ",
            self.method, self.expected
        )?;

        match self.actual {
            Some(actual) => write!(f, "found {actual}"),
            None => f.write_str("found an unresolved polymorphic target"),
        }
    }
}

impl Error {
    /// Creates a related model mismatch error.
    pub fn related_mismatch(
        method: impl Into<String>,
        expected: ModelType,
        actual: Option<ModelType>,
    ) -> Error {
        Error::from(super::ErrorKind::RelatedMismatch(RelatedMismatchError {
            method: method.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a related model mismatch.
    pub fn is_related_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RelatedMismatch(_))
    }
}
