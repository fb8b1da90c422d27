//! Crawl Page Use Case
//!
//! Owns the state behind the crawling screen: the current result set, the
//! loading flag and the last error. Every submission takes a sequence
//! number; only the response to the latest submission may touch state.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::application::forms::{CrawlingForm, FormError};
use crate::application::ports::CrawlingPort;
use crate::domain::crawling::{CrawlRequest, CrawlResults, CrawlSite};

/// Point-in-time copy of the page state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    /// Site of the latest submission.
    pub site: CrawlSite,
    /// Result rows; empty while loading or after a failure.
    pub results: CrawlResults,
    /// Whether a request is in flight.
    pub is_loading: bool,
    /// Failure from the latest request.
    pub error: Option<String>,
}

#[derive(Debug)]
struct PageState {
    site: CrawlSite,
    results: CrawlResults,
    is_loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl Default for PageState {
    fn default() -> Self {
        let site = CrawlSite::default();
        Self {
            site,
            results: CrawlResults::empty(site),
            is_loading: false,
            error: None,
            latest_seq: 0,
        }
    }
}

/// Use case behind the crawling screen.
pub struct CrawlPageController<C>
where
    C: CrawlingPort,
{
    crawler: Arc<C>,
    state: Mutex<PageState>,
}

impl<C> CrawlPageController<C>
where
    C: CrawlingPort,
{
    /// Create a controller with empty state.
    pub fn new(crawler: Arc<C>) -> Self {
        Self {
            crawler,
            state: Mutex::new(PageState::default()),
        }
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.state.lock();
        PageSnapshot {
            site: state.site,
            results: state.results.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    /// Validate `form` and run the crawl it describes.
    ///
    /// Nothing is sent when the form is invalid or a crawl is already running.
    pub async fn submit_form(&self, form: &CrawlingForm) -> Result<PageSnapshot, FormError> {
        let request = form.submit(self.is_loading(), std::convert::identity)?;
        Ok(self.submit(request).await)
    }

    /// Run one crawl and fold its outcome into the page state.
    ///
    /// Returns the state as it stands once this call's response was handled.
    pub async fn submit(&self, request: CrawlRequest) -> PageSnapshot {
        let site = request.site();
        let seq = {
            let mut state = self.state.lock();
            state.latest_seq += 1;
            state.site = site;
            state.results = CrawlResults::empty(site);
            state.error = None;
            state.is_loading = true;
            state.latest_seq
        };

        tracing::info!(site = %site, seq, "starting crawl");
        let outcome = self.crawler.crawl(&request).await;

        {
            let mut state = self.state.lock();
            if state.latest_seq != seq {
                tracing::debug!(
                    site = %site,
                    seq,
                    latest = state.latest_seq,
                    "discarding stale crawl response"
                );
            } else {
                match outcome {
                    Ok(results) => {
                        tracing::info!(site = %site, rows = results.len(), "crawl finished");
                        state.results = results;
                    }
                    Err(e) => {
                        tracing::warn!(site = %site, error = %e, "crawl failed");
                        state.error = Some(e.to_string());
                    }
                }
                state.is_loading = false;
            }
        }

        self.snapshot()
    }
}
