//! Session Store Port
//!
//! Persistence for the login session between console runs.

use crate::domain::session::Session;

/// Session store error.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// Reading or writing the backing storage failed.
    #[error("session storage error: {message}")]
    Storage {
        /// Error details.
        message: String,
    },

    /// Stored data could not be decoded.
    #[error("stored session is corrupt: {message}")]
    Corrupt {
        /// Error details.
        message: String,
    },
}

/// Port for loading and persisting the session.
pub trait SessionStore: Send + Sync {
    /// Load the stored session; anonymous when nothing is stored.
    fn load(&self) -> Result<Session, SessionStoreError>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Forget the stored session.
    fn clear(&self) -> Result<(), SessionStoreError>;
}
