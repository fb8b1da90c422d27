//! RAG Port (Driven Port)
//!
//! Interface to the document index and question answering service.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use super::BackendError;
use crate::domain::rag::UploadedFile;

/// Acknowledgement returned by upload and delete.
///
/// The backend's confirmation body is loosely specified; only a message is
/// picked out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Confirmation {
    /// Human-readable status line.
    #[serde(default)]
    pub message: Option<String>,
}

/// Port for RAG document and chat operations.
#[async_trait]
pub trait RagPort: Send + Sync {
    /// Files currently indexed, in server order.
    async fn list_files(&self) -> Result<Vec<UploadedFile>, BackendError>;

    /// Upload the file at `path` for indexing.
    async fn upload_file(&self, path: &Path) -> Result<Confirmation, BackendError>;

    /// Remove an indexed file by name.
    async fn delete_file(&self, file_name: &str) -> Result<Confirmation, BackendError>;

    /// Ask a question with the given generation model; returns the answer text.
    async fn ask(&self, query: &str, model: &str) -> Result<String, BackendError>;
}
