//! Auth Port (Driven Port)

use async_trait::async_trait;

use super::BackendError;
use crate::domain::session::LoginResponse;

/// Port for exchanging credentials for a bearer token.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Log in with username and password.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, BackendError>;
}
