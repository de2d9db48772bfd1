use super::{Error, ErrorKind};

/// Failure reported by the [`Connection`](crate::Connection) that executed
/// a command. The driver's own error chain is flattened into the message.
#[derive(Debug)]
pub(super) struct ConnectionError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.inner)
    }
}

impl core::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.inner)?;
        for cause in std::iter::successors(self.inner.source(), |err| err.source()) {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl Error {
    pub fn connection(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Connection(ConnectionError {
            inner: Box::new(err),
        }))
    }

    pub fn is_connection(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::Connection(_)))
    }
}
