use super::Error;

/// Error when the value of a type-resolution column (or a concrete type on
/// write) cannot be mapped by the registered instance type resolver.
#[derive(Debug)]
pub(super) struct UnresolvedType {
    root: Box<str>,
    value: Box<str>,
}

impl std::error::Error for UnresolvedType {}

impl core::fmt::Display for UnresolvedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved type: `{}` could not be resolved for document `{}`; \
             register an InstanceTypeResolver for `{}` that maps it",
            self.value, self.root, self.root
        )
    }
}

impl Error {
    /// Creates an unresolved type error for the given root document and the
    /// offending value.
    pub fn unresolved_type(root: impl Into<String>, value: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedType(UnresolvedType {
            root: root.into().into(),
            value: value.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved type error.
    pub fn is_unresolved_type(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnresolvedType(_)))
    }
}
