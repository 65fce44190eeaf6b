//! Error types for dashboard model and client operations.
//!
//! This module provides one error type shared by the model crate and the HTTP
//! client, including error codes for logs and HTTP status code mapping.

use thiserror::Error;

/// Main error type for Grafana operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Root bytes are not valid JSON
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A recognized field holds a value of an unsupported shape
    #[error("Type mismatch at `{path}`: {message}")]
    FieldTypeMismatch {
        /// Dotted path of the offending field
        path: String,
        /// Decoder message
        message: String,
    },

    /// A decoded value could not be serialized again
    #[error("Encode failure: {0}")]
    EncodeFailure(String),

    /// Grafana is unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or rejected credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Conflict error
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Version mismatch reported by the server
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for Grafana operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a field-scoped mismatch.
    #[must_use]
    pub fn mismatch(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldTypeMismatch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedDocument(_) => "MALFORMED_DOCUMENT",
            Self::FieldTypeMismatch { .. } => "FIELD_TYPE_MISMATCH",
            Self::EncodeFailure(_) => "ENCODE_FAILURE",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::PreconditionFailed(_) => "PRECONDITION_FAILED",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
        }
    }

    /// Returns true if this error should be logged as a serious error.
    ///
    /// Rejections Grafana reports on purpose (missing dashboards, version
    /// conflicts, bad credentials) are not.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(
            self,
            Self::EncodeFailure(_)
                | Self::ConfigError(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout(_)
                | Self::HttpError(_)
        )
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => {
                Self::MalformedDocument(err.to_string())
            }
            Category::Data => Self::mismatch("", err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::MalformedDocument("test".to_string()).error_code(),
            "MALFORMED_DOCUMENT"
        );
        assert_eq!(
            Error::mismatch("panels.id", "bad").error_code(),
            "FIELD_TYPE_MISMATCH"
        );
        assert_eq!(
            Error::EncodeFailure("test".to_string()).error_code(),
            "ENCODE_FAILURE"
        );
        assert_eq!(
            Error::ServiceUnavailable("test".to_string()).error_code(),
            "SERVICE_UNAVAILABLE"
        );
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::HttpError("test".to_string()).error_code(),
            "HTTP_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            Error::Unauthorized("test".to_string()).error_code(),
            "UNAUTHORIZED"
        );
        assert_eq!(
            Error::InvalidRequest("test".to_string()).error_code(),
            "INVALID_REQUEST"
        );
        assert_eq!(
            Error::ValidationError("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(Error::Conflict("test".to_string()).error_code(), "CONFLICT");
        assert_eq!(
            Error::PreconditionFailed("test".to_string()).error_code(),
            "PRECONDITION_FAILED"
        );
        assert_eq!(
            Error::InvalidEndpoint("test".to_string()).error_code(),
            "INVALID_ENDPOINT"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("dashboard".to_string());
        assert_eq!(err.to_string(), "Not found: dashboard");

        let err = Error::mismatch("panels.targets.refId", "expected a string");
        assert_eq!(
            err.to_string(),
            "Type mismatch at `panels.targets.refId`: expected a string"
        );
    }

    #[test]
    fn test_should_log() {
        assert!(Error::EncodeFailure("test".to_string()).should_log());
        assert!(Error::ConfigError("test".to_string()).should_log());
        assert!(Error::ServiceUnavailable("test".to_string()).should_log());
        assert!(Error::Timeout("test".to_string()).should_log());

        assert!(!Error::NotFound("test".to_string()).should_log());
        assert!(!Error::mismatch("a", "b").should_log());
        assert!(!Error::Conflict("test".to_string()).should_log());
        assert!(!Error::PreconditionFailed("test".to_string()).should_log());
        assert!(!Error::Unauthorized("test".to_string()).should_log());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_syntax_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_from_serde_json_data_error() {
        let err = serde_json::from_str::<u32>("\"text\"").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::FieldTypeMismatch { .. }));
    }

    #[test]
    fn test_error_partial_eq() {
        let err1 = Error::NotFound("test".to_string());
        let err2 = Error::NotFound("test".to_string());
        let err3 = Error::NotFound("other".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
