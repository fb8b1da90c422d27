//! Backend port error.

/// Failure talking to the platform backend, as seen by use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("could not reach the backend: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error(
        "request failed with status {status}{}",
        message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided reason, when there was one.
        message: Option<String>,
    },

    /// A success response whose body could not be understood.
    #[error("unexpected response from the backend: {message}")]
    InvalidResponse {
        /// Error details.
        message: String,
    },

    /// A local file to send could not be read.
    #[error("could not read {path}: {message}")]
    LocalFile {
        /// Offending path.
        path: String,
        /// Error details.
        message: String,
    },

    /// The client is misconfigured (bad base URL and the like).
    #[error("invalid client configuration: {message}")]
    Configuration {
        /// Error details.
        message: String,
    },
}

impl BackendError {
    /// Whether the backend rejected the credentials or token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
