//! Application Ports (Driven)
//!
//! Interfaces to the systems the console talks to:
//! - `CrawlingPort`: the crawling service
//! - `RagPort`: document index and question answering
//! - `AuthPort`: login
//! - `DocumentToolsPort`: PDF summary and page scraping
//! - `SessionStore`: where the bearer token lives between runs

mod auth_port;
mod backend_error;
mod crawling_port;
mod document_tools_port;
mod rag_port;
mod session_store_port;

pub use auth_port::AuthPort;
pub use backend_error::BackendError;
pub use crawling_port::CrawlingPort;
pub use document_tools_port::DocumentToolsPort;
pub use rag_port::{Confirmation, RagPort};
pub use session_store_port::{SessionStore, SessionStoreError};
