use super::Error;

/// Error when the catalog returns no columns for a requested table.
#[derive(Debug)]
pub(super) struct NotFound {
    message: Box<str>,
}

impl std::error::Error for NotFound {}

impl core::fmt::Display for NotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not found: {}", self.message)
    }
}

impl Error {
    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFound {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }
}
