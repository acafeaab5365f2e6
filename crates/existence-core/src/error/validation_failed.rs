use super::Error;

/// Error returned by `validate` style entry points when a record carries
/// validation errors. Holds the full messages at the time of the check.
#[derive(Debug)]
pub(super) struct ValidationFailed {
    messages: Vec<String>,
}

impl std::error::Error for ValidationFailed {}

impl core::fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "validation failed: {}", self.messages.join(", "))
    }
}

impl Error {
    pub fn validation_failed(messages: Vec<String>) -> Error {
        Error::from(super::ErrorKind::ValidationFailed(ValidationFailed {
            messages,
        }))
    }

    pub fn is_validation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ValidationFailed(_))
    }
}
