mod adhoc;
mod cancelled;
mod connection_busy;
mod driver_operation_failed;
mod invalid_configuration;
mod not_found;
mod unsupported_expression;
mod unsupported_operation;

use adhoc::AdhocError;
use cancelled::Cancelled;
use connection_busy::ConnectionBusy;
use driver_operation_failed::DriverOperationFailed;
use invalid_configuration::InvalidConfiguration;
use not_found::NotFound;
use std::sync::Arc;
use unsupported_expression::UnsupportedExpression;
use unsupported_operation::UnsupportedOperation;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Quarry.
///
/// The error is a single pointer wide. Every error carries a kind and an
/// optional cause, forming a chain that is displayed outermost first.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared_message(&shared))),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Creates an ad-hoc error from format arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    /// Returns the innermost error of the chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

fn shared_message(inner: &ErrorInner) -> String {
    inner.kind.to_string()
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::ConnectionBusy(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnsupportedExpression(UnsupportedExpression),
    UnsupportedOperation(UnsupportedOperation),
    InvalidConfiguration(InvalidConfiguration),
    NotFound(NotFound),
    ConnectionBusy(ConnectionBusy),
    Cancelled(Cancelled),
    DriverOperationFailed(DriverOperationFailed),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnsupportedExpression(err) => core::fmt::Display::fmt(err, f),
            UnsupportedOperation(err) => core::fmt::Display::fmt(err, f),
            InvalidConfiguration(err) => core::fmt::Display::fmt(err, f),
            NotFound(err) => core::fmt::Display::fmt(err, f),
            ConnectionBusy(err) => core::fmt::Display::fmt(err, f),
            Cancelled(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown quarry error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let top = err!("resolving table `Person`");

        let chained = root.context(top);
        assert_eq!(chained.to_string(), "resolving table `Person`: root cause");
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn unsupported_expression() {
        let err = Error::unsupported_expression("Closure(v => v)");
        assert!(err.is_unsupported_expression());
        assert!(!err.is_unsupported_operation());
        assert_eq!(err.to_string(), "unsupported expression: Closure(v => v)");
    }

    #[test]
    fn unsupported_operation() {
        let err = Error::unsupported_operation("table hints are not supported by PostgreSQL");
        assert!(err.is_unsupported_operation());
        assert_eq!(
            err.to_string(),
            "unsupported operation: table hints are not supported by PostgreSQL"
        );
    }

    #[test]
    fn invalid_configuration() {
        let err = Error::invalid_configuration("the table name must not be empty");
        assert!(err.is_invalid_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration: the table name must not be empty"
        );
    }

    #[test]
    fn not_found_keeps_kind_through_context() {
        let err = Error::not_found("no columns for table `Missing`")
            .context(err!("resolving database fields"));

        assert!(err.root().is_not_found());
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "resolving database fields: not found: no columns for table `Missing`"
        );
    }

    #[test]
    fn connection_busy_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::WouldBlock, "operation in progress");
        let err = Error::connection_busy(io);

        assert!(err.is_connection_busy());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "connection busy: operation in progress");
    }

    #[test]
    fn cancelled() {
        let err = Error::cancelled();
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "operation cancelled");
    }
}
