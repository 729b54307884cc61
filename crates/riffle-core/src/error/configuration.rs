use super::Error;

/// Error when a caller supplies an invalid combination of options.
///
/// Configuration errors are reported before any statement is executed.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    pub(super) message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Configuration(_))
    }
}
