use super::Error;

/// Error when a predicate expression cannot be translated to SQL.
///
/// The message names the construct that failed and lists what is supported so
/// the caller can rewrite the predicate.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    construct: Box<str>,
    supported: Box<str>,
}

impl std::error::Error for UnsupportedExpression {}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported expression: {} cannot be translated to SQL; supported: {}",
            self.construct, self.supported
        )
    }
}

impl Error {
    /// Creates an unsupported expression error.
    pub fn unsupported_expression(
        construct: impl Into<String>,
        supported: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression {
                construct: construct.into().into(),
                supported: supported.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnsupportedExpression(_)))
    }
}
