use super::Error;

/// Error when a polymorphic owner relation stores its type in an unexpected
/// field.
#[derive(Debug)]
pub(super) struct MorphTypeMismatchError {
    method: Box<str>,
    expected: Box<str>,
    actual: Option<Box<str>>,
}

impl std::error::Error for MorphTypeMismatchError {}

impl core::fmt::Display for MorphTypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "morph type mismatch on `{}()`: expected `{}`, ",
            self.method, self.expected
        )?;

        match &self.actual {
            Some(actual) => write!(f, "found `{actual}`"),
            None => f.write_str("found none"),
        }
    }
}

impl Error {
    /// Creates a morph type mismatch error.
    pub fn morph_type_mismatch(
        method: impl Into<String>,
        expected: impl Into<String>,
        actual: Option<&str>,
    ) -> Error {
        Error::from(super::ErrorKind::MorphTypeMismatch(MorphTypeMismatchError {
            method: method.into().into(),
            expected: expected.into().into(),
            actual: actual.map(Into::into),
        }))
    }

    /// Returns `true` if this error is a morph type mismatch.
    pub fn is_morph_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MorphTypeMismatch(_))
    }
}
