use super::Error;

/// Error when a single-row lookup returns no results.
#[derive(Debug)]
pub(super) struct RecordNotFoundError {
    pub(super) context: Box<str>,
}

impl std::error::Error for RecordNotFoundError {}

impl core::fmt::Display for RecordNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record not found: {}", self.context)
    }
}

impl Error {
    /// Creates a record-not-found error with context describing the lookup.
    pub fn record_not_found(context: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::RecordNotFound(RecordNotFoundError {
            context: context.into(),
        }))
    }

    /// Returns `true` if this error is a record-not-found error.
    pub fn is_record_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordNotFound(_))
    }
}
