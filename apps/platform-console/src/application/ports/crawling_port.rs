//! Crawling Port (Driven Port)
//!
//! Interface to the external crawling service.

use async_trait::async_trait;

use super::BackendError;
use crate::domain::crawling::{CrawlRequest, CrawlResults};

/// Port for running one crawl.
#[async_trait]
pub trait CrawlingPort: Send + Sync {
    /// Run the crawl described by `request`.
    ///
    /// The returned set is tagged with `request.site()`.
    async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlResults, BackendError>;
}
