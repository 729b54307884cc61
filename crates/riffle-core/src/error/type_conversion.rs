use super::Error;
use crate::stmt::Value;

/// Error when a value cannot be converted to the requested Rust type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    pub(super) found: &'static str,
    pub(super) target: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.found, self.target)
    }
}

impl Error {
    /// Creates a type conversion error for `value` failing to convert to `target`.
    pub fn type_conversion(value: &Value, target: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            found: value.kind(),
            target,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
