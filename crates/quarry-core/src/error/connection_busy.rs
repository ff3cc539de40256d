use super::Error;

/// Error when a connection is still busy with another operation.
///
/// Some asynchronous drivers refuse to start a command while a previous one
/// has not been fully consumed. The schema resolver retries once on a freshly
/// opened connection when it sees this error.
#[derive(Debug)]
pub(super) struct ConnectionBusy {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionBusy {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionBusy {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection busy: {}", self.inner)
    }
}

impl Error {
    /// Creates a connection busy error wrapping the driver's error.
    pub fn connection_busy(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ConnectionBusy(ConnectionBusy {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connection busy error.
    pub fn is_connection_busy(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionBusy(_))
    }
}
