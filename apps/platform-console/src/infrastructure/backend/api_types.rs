//! Backend API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::rag::UploadedFile;

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Ask request body.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
    pub model: &'a str,
}

/// Ask response.
#[derive(Debug, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// PDF summary response.
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Scrape request body. The keyword is always sent, empty when unused.
#[derive(Debug, Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub keyword: &'a str,
}

/// Scrape response.
#[derive(Debug, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub result: Option<String>,
}

/// File list response. A missing or null list means no files.
#[derive(Debug, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub files: Option<Vec<UploadedFile>>,
}

/// Error body. FastAPI-style servers put the reason in `detail`, which may
/// be a string or a structured validation report.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable reason in the body.
    pub fn into_message(self) -> Option<String> {
        let detail = self.detail.and_then(|d| match d {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });
        detail
            .or(self.message)
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
