use super::Error;

/// Error when a builder method is invoked on a builder instance that already
/// ran a terminal operation.
#[derive(Debug)]
pub(super) struct BuilderFinished {
    method: Box<str>,
}

impl std::error::Error for BuilderFinished {}

impl core::fmt::Display for BuilderFinished {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "builder already finished: `{}` was called after a terminal operation; \
             derive a new query from an unfinished builder instead",
            self.method
        )
    }
}

impl Error {
    /// Creates a builder finished error naming the method that was rejected.
    pub fn builder_finished(method: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::BuilderFinished(BuilderFinished {
            method: method.into().into(),
        }))
    }

    /// Returns `true` if this error is a builder finished error.
    pub fn is_builder_finished(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::BuilderFinished(_)))
    }
}
