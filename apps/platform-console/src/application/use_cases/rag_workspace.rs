//! RAG Workspace Use Case
//!
//! Document listing for everyone, upload and delete for admins.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::{BackendError, Confirmation, RagPort};
use crate::domain::rag::{UploadedFile, is_pdf_name, sort_newest_first};
use crate::domain::session::Session;

/// Errors from workspace operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    /// The action needs a logged-in session.
    #[error("log in as an administrator first")]
    NotAdmin,

    /// Only PDF files can be indexed.
    #[error("only PDF files can be uploaded (got '{file_name}')")]
    NotPdf {
        /// Rejected file name.
        file_name: String,
    },

    /// The backend call failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Use case behind the document panel.
pub struct RagWorkspace<R>
where
    R: RagPort,
{
    rag: Arc<R>,
    session: Session,
}

impl<R> RagWorkspace<R>
where
    R: RagPort,
{
    /// Create a workspace acting with `session`.
    pub const fn new(rag: Arc<R>, session: Session) -> Self {
        Self { rag, session }
    }

    /// Whether upload and delete are available.
    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Indexed files, newest upload first.
    pub async fn list_files(&self) -> Result<Vec<UploadedFile>, WorkspaceError> {
        let mut files = self.rag.list_files().await?;
        sort_newest_first(&mut files);
        tracing::debug!(count = files.len(), "listed indexed files");
        Ok(files)
    }

    /// Upload a PDF for indexing.
    pub async fn upload(&self, path: &Path) -> Result<Confirmation, WorkspaceError> {
        self.require_admin()?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_pdf_name(&file_name) {
            return Err(WorkspaceError::NotPdf { file_name });
        }

        tracing::info!(file = %file_name, "uploading document");
        let confirmation = self.rag.upload_file(path).await?;
        Ok(confirmation)
    }

    /// Remove an indexed file.
    pub async fn delete(&self, file_name: &str) -> Result<Confirmation, WorkspaceError> {
        self.require_admin()?;
        tracing::info!(file = %file_name, "deleting document");
        Ok(self.rag.delete_file(file_name).await?)
    }

    fn require_admin(&self) -> Result<(), WorkspaceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(WorkspaceError::NotAdmin)
        }
    }
}
