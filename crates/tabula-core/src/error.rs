mod builder_finished;
mod connection;
mod message;
mod row_materialization;
mod unresolved_type;
mod unsupported_expression;
mod validation;

use builder_finished::BuilderFinished;
use connection::ConnectionError;
use message::MessageError;
use row_materialization::RowMaterialization;
use unresolved_type::UnresolvedType;
use unsupported_expression::UnsupportedExpression;
use validation::ValidationError;

use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] formatted like `format!`.
#[macro_export]
macro_rules! bail {
    ($($fmt:tt)*) => {
        return Err($crate::err!($($fmt)*))
    };
}

/// Builds an ad-hoc [`Error`] formatted like `format!`.
#[macro_export]
macro_rules! err {
    ($($fmt:tt)*) => {
        $crate::Error::from_args(format_args!($($fmt)*))
    };
}

/// Error type shared by every tabula crate.
///
/// An error is a chain: each link carries one kind, and [`context`] pushes a
/// new link in front of the existing one. The type is a single pointer wide
/// so `Result<T>` stays small on the read path.
///
/// [`context`]: Error::context
#[derive(Clone)]
pub struct Error {
    link: Option<Arc<Link>>,
}

#[derive(Debug)]
struct Link {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps `self` as the cause of `outer`.
    ///
    /// The chain displays outermost first, so the most recent context leads
    /// and the root cause comes last.
    #[inline(always)]
    pub fn context(self, outer: impl IntoError) -> Error {
        self.wrap(outer.into_error())
    }

    #[cold]
    #[inline(never)]
    fn wrap(self, outer: Error) -> Error {
        let kind = match outer.link.map(Arc::try_unwrap) {
            Some(Ok(link)) => link.kind,
            // Still referenced elsewhere; only its message can be moved
            Some(Err(shared)) => ErrorKind::Message(MessageError::adhoc(shared.kind.to_string())),
            None => ErrorKind::Unknown,
        };

        Error {
            link: Some(Arc::new(Link {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// The innermost error of the chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn cause(&self) -> Option<&Error> {
        self.link.as_deref()?.cause.as_ref()
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| err.cause())
    }

    fn kind(&self) -> &ErrorKind {
        match &self.link {
            Some(link) => &link.kind,
            None => &ErrorKind::Unknown,
        }
    }

    /// Whether any link of the chain satisfies `f`.
    fn any(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().map(Error::kind).any(f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Connection(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{}", err.kind())?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.chain().map(Error::kind))
                .finish()
        } else {
            write!(f, "{self}")
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    BuilderFinished(BuilderFinished),
    Connection(ConnectionError),
    Message(MessageError),
    RowMaterialization(RowMaterialization),
    UnresolvedType(UnresolvedType),
    UnsupportedExpression(UnsupportedExpression),
    Validation(ValidationError),
    Unknown,
}

impl ErrorKind {
    fn as_display(&self) -> Option<&dyn core::fmt::Display> {
        let err: &dyn core::fmt::Display = match self {
            ErrorKind::Anyhow(err) => err,
            ErrorKind::BuilderFinished(err) => err,
            ErrorKind::Connection(err) => err,
            ErrorKind::Message(err) => err,
            ErrorKind::RowMaterialization(err) => err,
            ErrorKind::UnresolvedType(err) => err,
            ErrorKind::UnsupportedExpression(err) => err,
            ErrorKind::Validation(err) => err,
            ErrorKind::Unknown => return None,
        };
        Some(err)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.as_display() {
            Some(err) => core::fmt::Display::fmt(err, f),
            None => f.write_str("unknown tabula error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            link: Some(Arc::new(Link { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        ErrorKind::Anyhow(err).into()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        anyhow::Error::new(err).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::serialization(err.to_string())
    }
}

/// Conversion accepted by [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
