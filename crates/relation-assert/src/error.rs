mod kind_mismatch;
mod missing_accessor;
mod morph_type_mismatch;
mod related_mismatch;

use kind_mismatch::KindMismatchError;
use missing_accessor::MissingAccessorError;
use morph_type_mismatch::MorphTypeMismatchError;
use related_mismatch::RelatedMismatchError;
use std::sync::Arc;

/// A failed relation assertion.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", self.kind())
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    KindMismatch(KindMismatchError),
    RelatedMismatch(RelatedMismatchError),
    MorphTypeMismatch(MorphTypeMismatchError),
    MissingAccessor(MissingAccessorError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            KindMismatch(err) => core::fmt::Display::fmt(err, f),
            RelatedMismatch(err) => core::fmt::Display::fmt(err, f),
            MorphTypeMismatch(err) => core::fmt::Display::fmt(err, f),
            MissingAccessor(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}
