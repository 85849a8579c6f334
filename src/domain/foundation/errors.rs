//! Error types for the emitter.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller errors
    InvalidConfiguration,

    // Codec errors
    SerializationFailure,

    // Infrastructure errors
    TransportFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorCode::SerializationFailure => "SERIALIZATION_FAILURE",
            ErrorCode::TransportFailure => "TRANSPORT_FAILURE",
        };
        write!(f, "{}", s)
    }
}

/// Failure reported by a message bus when publishing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
    /// The bus could not be reached (connection lost, timeout).
    #[error("message bus unavailable: {0}")]
    Unavailable(String),

    /// The bus refused the publish.
    #[error("publish rejected: {0}")]
    Rejected(String),
}

/// Errors surfaced by the emitter.
///
/// Nothing is retried; every error is handed back to the caller as is.
#[derive(Debug, Error)]
pub enum EmitterError {
    /// A flag name outside `json`, `volatile`, `broadcast` was used.
    #[error("Invalid socket.io flag used: {0}")]
    InvalidFlag(String),

    /// The MessagePack packer rejected an event payload.
    #[error("failed to pack event: {0}")]
    Pack(#[from] rmp_serde::encode::Error),

    /// The JSON encoder rejected a control request.
    #[error("failed to encode request: {0}")]
    Json(#[from] serde_json::Error),

    /// The message bus failed to publish.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl EmitterError {
    /// Creates an invalid flag error.
    pub fn invalid_flag(flag: impl Into<String>) -> Self {
        EmitterError::InvalidFlag(flag.into())
    }

    /// Returns the category of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EmitterError::InvalidFlag(_) => ErrorCode::InvalidConfiguration,
            EmitterError::Pack(_) | EmitterError::Json(_) => ErrorCode::SerializationFailure,
            EmitterError::Publish(_) => ErrorCode::TransportFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_flag_displays_flag_name() {
        let err = EmitterError::invalid_flag("wtf");
        assert_eq!(format!("{}", err), "Invalid socket.io flag used: wtf");
    }

    #[test]
    fn invalid_flag_is_a_configuration_error() {
        assert_eq!(
            EmitterError::invalid_flag("wtf").code(),
            ErrorCode::InvalidConfiguration
        );
    }

    #[test]
    fn publish_error_converts_to_transport_failure() {
        let err: EmitterError = PublishError::Unavailable("connection reset".to_string()).into();
        assert_eq!(err.code(), ErrorCode::TransportFailure);
        assert_eq!(
            format!("{}", err),
            "message bus unavailable: connection reset"
        );
    }

    #[test]
    fn json_error_is_a_serialization_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EmitterError = json_err.into();
        assert_eq!(err.code(), ErrorCode::SerializationFailure);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(
            format!("{}", ErrorCode::InvalidConfiguration),
            "INVALID_CONFIGURATION"
        );
        assert_eq!(format!("{}", ErrorCode::TransportFailure), "TRANSPORT_FAILURE");
    }
}
