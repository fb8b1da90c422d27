//! Dependency Injection Container
//!
//! Loads the session once and wires the backend adapter into the use cases.

use std::sync::Arc;

use crate::application::ports::{SessionStore, SessionStoreError};
use crate::application::use_cases::{
    ChatSession, CrawlPageController, DocumentTools, RagWorkspace,
};
use crate::domain::session::Session;
use crate::infrastructure::backend::{ApiError, PlatformBackendAdapter};
use crate::infrastructure::session::FileSessionStore;

use super::settings::ConsoleConfig;

/// Failure while assembling the container.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The session file could not be read.
    #[error(transparent)]
    Session(#[from] SessionStoreError),
    /// The HTTP client could not be built.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Dependency injection container.
pub struct Container {
    config: ConsoleConfig,
    session_store: FileSessionStore,
    session: Session,
    backend: Arc<PlatformBackendAdapter>,
}

impl Container {
    /// Load the stored session and build the backend adapter.
    ///
    /// A corrupt session file is treated as logged out.
    pub fn from_config(config: ConsoleConfig) -> Result<Self, BootstrapError> {
        let session_store = FileSessionStore::new(config.session_file.clone());
        let session = match session_store.load() {
            Ok(session) => session,
            Err(SessionStoreError::Corrupt { message }) => {
                tracing::warn!(%message, "ignoring unreadable session file");
                Session::anonymous()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(
            admin = session.is_admin(),
            user = session.username().unwrap_or("-"),
            "session loaded"
        );

        let backend = Arc::new(PlatformBackendAdapter::new(&config.api, &session)?);
        Ok(Self {
            config,
            session_store,
            session,
            backend,
        })
    }

    /// Configuration the container was built from.
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Session loaded at startup.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Where the session is persisted.
    pub fn session_store(&self) -> &dyn SessionStore {
        &self.session_store
    }

    /// Shared backend adapter.
    pub fn backend(&self) -> Arc<PlatformBackendAdapter> {
        Arc::clone(&self.backend)
    }

    /// Use case for the crawling screen.
    pub fn crawl_page(&self) -> CrawlPageController<PlatformBackendAdapter> {
        CrawlPageController::new(self.backend())
    }

    /// Use case for the document panel.
    pub fn rag_workspace(&self) -> RagWorkspace<PlatformBackendAdapter> {
        RagWorkspace::new(self.backend(), self.session.clone())
    }

    /// Use case for the PDF summary and scraper tools.
    pub fn document_tools(&self) -> DocumentTools<PlatformBackendAdapter> {
        DocumentTools::new(self.backend())
    }

    /// New conversation using `model`, or the configured default.
    pub fn chat_session(&self, model: Option<&str>) -> ChatSession<PlatformBackendAdapter> {
        let model = model.unwrap_or(&self.config.default_model);
        ChatSession::new(self.backend(), model)
    }
}
