use super::Error;

/// Error when the subject has no relation accessor with the requested name.
#[derive(Debug)]
pub(super) struct MissingAccessorError {
    subject: Box<str>,
    method: Box<str>,
}

impl std::error::Error for MissingAccessorError {}

impl core::fmt::Display for MissingAccessorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relation accessor `{}()` not found on `{}`",
            self.method, self.subject
        )
    }
}

impl Error {
    /// Creates a missing accessor error.
    ///
    /// `subject` is the type name of the model the accessor was called on.
    pub fn missing_accessor(subject: impl Into<String>, method: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingAccessor(MissingAccessorError {
            subject: subject.into().into(),
            method: method.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing accessor error.
    pub fn is_missing_accessor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingAccessor(_))
    }
}
