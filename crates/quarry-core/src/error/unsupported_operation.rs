use super::Error;

/// Error when the target dialect cannot render a requested statement.
///
/// This occurs when:
/// - Table hints are passed to a dialect without hint support
/// - A batch exceeds the dialect's statement or parameter limits
/// - A batched update needs several statements per round-trip but the
///   dialect allows only one
/// - Directional (output) parameters are used where the dialect has none
#[derive(Debug)]
pub(super) struct UnsupportedOperation {
    message: Box<str>,
}

impl std::error::Error for UnsupportedOperation {}

impl core::fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported operation error.
    pub fn unsupported_operation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(UnsupportedOperation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported operation error.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperation(_))
    }
}
