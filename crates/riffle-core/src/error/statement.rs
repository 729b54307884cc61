use super::Error;

/// Error when a statement cannot be rendered to SQL.
#[derive(Debug)]
pub(super) struct StatementError {
    pub(super) message: Box<str>,
}

impl std::error::Error for StatementError {}

impl core::fmt::Display for StatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed statement: {}", self.message)
    }
}

impl Error {
    /// Creates a statement-assembly error.
    pub fn statement(message: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::Statement(StatementError {
            message: message.into(),
        }))
    }

    /// Returns `true` if this error is a statement-assembly error.
    pub fn is_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Statement(_))
    }
}
