//! Backend client error types.

use thiserror::Error;

use crate::application::ports::BackendError;

/// Errors from the backend HTTP client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or no response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error(
        "HTTP {status}{}",
        message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided reason (`detail`, `message` or `error`), else the body text.
        message: Option<String>,
    },

    /// Success response with a body that did not decode.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The request could not be assembled.
    #[error("could not build request: {0}")]
    Request(String),

    /// Base URL is unusable.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// A local file could not be read.
    #[error("could not read {path}: {message}")]
    Io {
        /// File path.
        path: String,
        /// Error details.
        message: String,
    },
}

impl From<ApiError> for BackendError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(message) => Self::Connection { message },
            ApiError::Status { status, message } => Self::Status { status, message },
            ApiError::Decode(message) => Self::InvalidResponse { message },
            ApiError::Request(message) | ApiError::InvalidUrl(message) => {
                Self::Configuration { message }
            }
            ApiError::Io { path, message } => Self::LocalFile { path, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_to_backend_error_status() {
        let err = ApiError::Status {
            status: 422,
            message: Some("bad trade type".to_string()),
        };
        assert_eq!(
            BackendError::from(err),
            BackendError::Status {
                status: 422,
                message: Some("bad trade type".to_string()),
            }
        );
    }

    #[test]
    fn api_error_to_backend_error_network() {
        let backend: BackendError = ApiError::Network("connection refused".to_string()).into();
        assert!(matches!(backend, BackendError::Connection { .. }));
    }

    #[test]
    fn api_error_to_backend_error_decode() {
        let backend: BackendError = ApiError::Decode("expected array".to_string()).into();
        assert!(matches!(backend, BackendError::InvalidResponse { .. }));
    }

    #[test]
    fn api_error_to_backend_error_io() {
        let backend: BackendError = ApiError::Io {
            path: "a.pdf".to_string(),
            message: "not found".to_string(),
        }
        .into();
        assert!(matches!(backend, BackendError::LocalFile { .. }));
    }

    #[test]
    fn status_display() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
