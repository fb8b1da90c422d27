//! Document Tools Use Case
//!
//! PDF summary and page scraping. Both are open to anonymous users; a
//! failed call is reported with a fixed message telling the user to check
//! that the server is up.

use std::path::Path;
use std::sync::Arc;

use reqwest::Url;
use thiserror::Error;

use crate::application::ports::DocumentToolsPort;
use crate::domain::rag::is_pdf_name;

/// Shown in place of a summary when the call fails.
pub const SUMMARY_FAILURE_MESSAGE: &str = "에러가 발생했습니다. 서버가 실행 중인지 확인해주세요.";

/// Shown in place of a scrape result when the call fails.
pub const SCRAPE_FAILURE_MESSAGE: &str = "에러 발생! 서버가 켜져 있는지 확인해주세요.";

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolInputError {
    /// Only PDF files can be summarised.
    #[error("only PDF files can be summarised (got '{file_name}')")]
    NotPdf {
        /// Rejected file name.
        file_name: String,
    },

    /// The scrape target is not an absolute http(s) URL.
    #[error("enter an http(s) URL to scrape (got '{input}')")]
    InvalidUrl {
        /// What the user typed.
        input: String,
    },
}

/// What a tool call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Text returned by the service.
    Completed(String),
    /// The call failed. `notice` is the user-facing message, `error` the cause.
    Failed {
        /// Fixed message to show instead of a result.
        notice: &'static str,
        /// Underlying error text.
        error: String,
    },
}

impl ToolOutcome {
    /// Text to show the user.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Completed(text) => text,
            Self::Failed { notice, .. } => notice,
        }
    }
}

/// Use case behind the PDF summary and scraper screens.
pub struct DocumentTools<T>
where
    T: DocumentToolsPort,
{
    tools: Arc<T>,
}

impl<T> DocumentTools<T>
where
    T: DocumentToolsPort,
{
    /// Create the use case over `tools`.
    pub const fn new(tools: Arc<T>) -> Self {
        Self { tools }
    }

    /// Summarise a PDF.
    pub async fn summarize(&self, path: &Path) -> Result<ToolOutcome, ToolInputError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_pdf_name(&file_name) {
            return Err(ToolInputError::NotPdf { file_name });
        }

        tracing::info!(file = %file_name, "summarising document");
        Ok(match self.tools.summarize_pdf(path).await {
            Ok(summary) => ToolOutcome::Completed(summary),
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "pdf summary failed");
                ToolOutcome::Failed {
                    notice: SUMMARY_FAILURE_MESSAGE,
                    error: e.to_string(),
                }
            }
        })
    }

    /// Scrape a page, optionally looking for `keyword`.
    pub async fn scrape(&self, url: &str, keyword: &str) -> Result<ToolOutcome, ToolInputError> {
        let url = url.trim();
        let target = Url::parse(url)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .ok_or_else(|| ToolInputError::InvalidUrl {
                input: url.to_string(),
            })?;
        let keyword = keyword.trim();

        tracing::info!(url = %target, keyword, "scraping page");
        Ok(match self.tools.scrape(url, keyword).await {
            Ok(result) => ToolOutcome::Completed(result),
            Err(e) => {
                tracing::error!(url = %target, error = %e, "scrape failed");
                ToolOutcome::Failed {
                    notice: SCRAPE_FAILURE_MESSAGE,
                    error: e.to_string(),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;
    use crate::application::ports::BackendError;

    #[derive(Default)]
    struct MockTools {
        fail: bool,
        summarised: Mutex<Vec<PathBuf>>,
        scraped: Mutex<Vec<(String, String)>>,
    }

    impl MockTools {
        fn reply(&self, text: &str) -> Result<String, BackendError> {
            if self.fail {
                Err(BackendError::Connection {
                    message: "refused".to_string(),
                })
            } else {
                Ok(text.to_string())
            }
        }
    }

    #[async_trait]
    impl DocumentToolsPort for MockTools {
        async fn summarize_pdf(&self, path: &Path) -> Result<String, BackendError> {
            self.summarised.lock().push(path.to_path_buf());
            self.reply("요약: 세 줄")
        }

        async fn scrape(&self, url: &str, keyword: &str) -> Result<String, BackendError> {
            self.scraped.lock().push((url.to_string(), keyword.to_string()));
            self.reply("<h1>Example</h1>")
        }
    }

    #[tokio::test]
    async fn summary_text_is_returned() {
        let tools = Arc::new(MockTools::default());
        let use_case = DocumentTools::new(Arc::clone(&tools));

        let outcome = use_case.summarize(Path::new("/tmp/Report.PDF")).await.unwrap();

        assert_eq!(outcome, ToolOutcome::Completed("요약: 세 줄".to_string()));
        assert_eq!(tools.summarised.lock().len(), 1);
    }

    #[tokio::test]
    async fn non_pdf_summary_never_reaches_backend() {
        let tools = Arc::new(MockTools::default());
        let use_case = DocumentTools::new(Arc::clone(&tools));

        let result = use_case.summarize(Path::new("/tmp/notes.txt")).await;

        assert_eq!(
            result,
            Err(ToolInputError::NotPdf {
                file_name: "notes.txt".to_string()
            })
        );
        assert!(tools.summarised.lock().is_empty());
    }

    #[tokio::test]
    async fn failures_show_the_fixed_notices() {
        let tools = Arc::new(MockTools {
            fail: true,
            ..MockTools::default()
        });
        let use_case = DocumentTools::new(tools);

        let summary = use_case.summarize(Path::new("a.pdf")).await.unwrap();
        assert_eq!(summary.text(), SUMMARY_FAILURE_MESSAGE);
        assert!(matches!(
            summary,
            ToolOutcome::Failed { ref error, .. } if error == "could not reach the backend: refused"
        ));

        let scrape = use_case.scrape("https://example.com", "").await.unwrap();
        assert_eq!(scrape.text(), SCRAPE_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn scrape_trims_inputs_and_allows_empty_keyword() {
        let tools = Arc::new(MockTools::default());
        let use_case = DocumentTools::new(Arc::clone(&tools));

        let outcome = use_case.scrape("  https://example.com/news ", "   ").await.unwrap();

        assert_eq!(outcome.text(), "<h1>Example</h1>");
        assert_eq!(
            tools.scraped.lock().as_slice(),
            [("https://example.com/news".to_string(), String::new())]
        );
    }

    #[tokio::test]
    async fn bad_url_never_reaches_backend() {
        let tools = Arc::new(MockTools::default());
        let use_case = DocumentTools::new(Arc::clone(&tools));

        for input in [
            "",
            "example.com",
            "ftp://example.com/file",
            "mailto:someone@example.com",
        ] {
            let result = use_case.scrape(input, "키워드").await;
            assert!(
                matches!(result, Err(ToolInputError::InvalidUrl { .. })),
                "{input:?} should be rejected"
            );
        }
        assert!(tools.scraped.lock().is_empty());
    }
}
