use super::Error;

/// Error when a column value fails the constraints declared by its mapping.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// String or binary value longer than the column allows
    MaxLength {
        column: Box<str>,
        len: usize,
        max: usize,
    },

    /// `NULL` written to a non-nullable column
    NotNullable { column: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::MaxLength { column, len, max } => write!(
                f,
                "value for column `{column}` has length {len} which exceeds the maximum of {max}"
            ),
            ValidationErrorKind::NotNullable { column } => {
                write!(f, "column `{column}` is not nullable but the value is NULL")
            }
        }
    }
}

impl Error {
    /// Creates a max-length validation error.
    pub fn validation_max_length(column: impl Into<String>, len: usize, max: usize) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::MaxLength {
                column: column.into().into(),
                len,
                max,
            },
        }))
    }

    /// Creates a nullability validation error.
    pub fn validation_not_nullable(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::NotNullable {
                column: column.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Validation(_)))
    }
}
