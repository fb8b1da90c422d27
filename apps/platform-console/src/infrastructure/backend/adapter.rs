//! Platform backend adapter implementing the crawling, RAG, document tool
//! and auth ports.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::api_types::{
    AskRequest, AskResponse, FilesResponse, LoginRequest, ScrapeRequest, ScrapeResponse,
    SummaryResponse,
};
use super::config::ApiConfig;
use super::error::ApiError;
use super::http_client::PlatformHttpClient;
use crate::application::ports::{
    AuthPort, BackendError, Confirmation, CrawlingPort, DocumentToolsPort, RagPort,
};
use crate::domain::crawling::{CrawlRequest, CrawlResults};
use crate::domain::rag::UploadedFile;
use crate::domain::session::{LoginResponse, Session};

const LOGIN_PATH: &str = "/api/auth/login";
const FILES_PATH: &str = "/api/rag/files";
const UPLOAD_PATH: &str = "/api/rag/upload";
const DELETE_PATH: &str = "/api/rag/delete";
const ASK_PATH: &str = "/api/rag/ask";
const SUMMARY_PATH: &str = "/pdf-summary";
const SCRAPE_PATH: &str = "/scrape";

/// Backend adapter.
///
/// Implements `CrawlingPort`, `RagPort`, `DocumentToolsPort` and `AuthPort`
/// over one HTTP client.
#[derive(Debug, Clone)]
pub struct PlatformBackendAdapter {
    client: PlatformHttpClient,
}

impl PlatformBackendAdapter {
    /// Create an adapter acting with `session`.
    pub fn new(config: &ApiConfig, session: &Session) -> Result<Self, ApiError> {
        Ok(Self {
            client: PlatformHttpClient::new(config, session)?,
        })
    }

    /// Underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &PlatformHttpClient {
        &self.client
    }
}

#[async_trait]
impl CrawlingPort for PlatformBackendAdapter {
    async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlResults, BackendError> {
        let site = request.site();
        let payload: Value = self
            .client
            .get(site.endpoint(), &request.query_pairs(), false)
            .await?;

        let results = CrawlResults::from_payload(site, payload)
            .map_err(|e| ApiError::Decode(format!("{site} rows: {e}")))?;
        tracing::debug!(site = %site, rows = results.len(), "decoded crawl results");
        Ok(results)
    }
}

#[async_trait]
impl RagPort for PlatformBackendAdapter {
    async fn list_files(&self) -> Result<Vec<UploadedFile>, BackendError> {
        let response: FilesResponse = self.client.post(FILES_PATH, None::<&()>, true).await?;
        Ok(response.files.unwrap_or_default())
    }

    async fn upload_file(&self, path: &Path) -> Result<Confirmation, BackendError> {
        let form = pdf_form(path).await?;
        let body: Value = self.client.post_multipart(UPLOAD_PATH, form, true).await?;
        Ok(confirmation_from(body))
    }

    async fn delete_file(&self, file_name: &str) -> Result<Confirmation, BackendError> {
        let body: Value = self.client.delete(DELETE_PATH, file_name, true).await?;
        Ok(confirmation_from(body))
    }

    async fn ask(&self, query: &str, model: &str) -> Result<String, BackendError> {
        let request = AskRequest { query, model };
        let response: AskResponse = self.client.post(ASK_PATH, Some(&request), false).await?;
        response.answer.ok_or_else(|| BackendError::InvalidResponse {
            message: "answer missing from response".to_string(),
        })
    }
}

#[async_trait]
impl DocumentToolsPort for PlatformBackendAdapter {
    async fn summarize_pdf(&self, path: &Path) -> Result<String, BackendError> {
        let form = pdf_form(path).await?;
        let response: SummaryResponse =
            self.client.post_multipart(SUMMARY_PATH, form, false).await?;
        response.summary.ok_or_else(|| BackendError::InvalidResponse {
            message: "summary missing from response".to_string(),
        })
    }

    async fn scrape(&self, url: &str, keyword: &str) -> Result<String, BackendError> {
        let request = ScrapeRequest { url, keyword };
        let response: ScrapeResponse = self.client.post(SCRAPE_PATH, Some(&request), false).await?;
        response.result.ok_or_else(|| BackendError::InvalidResponse {
            message: "result missing from response".to_string(),
        })
    }
}

#[async_trait]
impl AuthPort for PlatformBackendAdapter {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, BackendError> {
        let request = LoginRequest { username, password };
        let response: LoginResponse = self.client.post(LOGIN_PATH, Some(&request), false).await?;
        tracing::info!(username = %response.user.username, "logged in");
        Ok(response)
    }
}

/// Read the PDF at `path` into a multipart form with a single `file` part.
async fn pdf_form(path: &Path) -> Result<Form, ApiError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| ApiError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::debug!(file = %file_name, bytes = bytes.len(), "attaching pdf");
    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/pdf")
        .map_err(|e| ApiError::Request(e.to_string()))?;
    Ok(Form::new().part("file", part))
}

/// Pick the message out of a loosely-shaped confirmation body.
fn confirmation_from(body: Value) -> Confirmation {
    serde_json::from_value(body).unwrap_or_default()
}
