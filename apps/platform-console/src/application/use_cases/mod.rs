//! Application Use Cases
//!
//! Use cases drive the ports on behalf of the console commands.

mod chat_session;
mod crawl_page;
mod document_tools;
mod rag_workspace;

pub use chat_session::{APOLOGY_MESSAGE, ChatSession, LOADING_MESSAGES, SendOutcome};
pub use crawl_page::{CrawlPageController, PageSnapshot};
pub use document_tools::{
    DocumentTools, SCRAPE_FAILURE_MESSAGE, SUMMARY_FAILURE_MESSAGE, ToolInputError, ToolOutcome,
};
pub use rag_workspace::{RagWorkspace, WorkspaceError};
