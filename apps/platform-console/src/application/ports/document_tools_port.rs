//! Document Tools Port (Driven Port)
//!
//! One-shot helpers the backend offers next to the RAG index: summarising
//! a PDF and scraping a web page.

use std::path::Path;

use async_trait::async_trait;

use super::BackendError;

/// Port for the stand-alone document helpers.
#[async_trait]
pub trait DocumentToolsPort: Send + Sync {
    /// Summarise the PDF at `path`. Nothing is indexed.
    async fn summarize_pdf(&self, path: &Path) -> Result<String, BackendError>;

    /// Scrape `url`, optionally focusing on `keyword` (empty for none).
    async fn scrape(&self, url: &str, keyword: &str) -> Result<String, BackendError>;
}
