//! Platform Backend Adapter
//!
//! reqwest-based implementation of the crawling, RAG and auth ports:
//! - One HTTP wrapper that owns header construction and error mapping
//! - Bearer token injected only on auth-flagged calls
//! - No retries; every failure surfaces to the caller

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::PlatformBackendAdapter;
pub use config::{ApiConfig, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use http_client::{PlatformHttpClient, REQUEST_ID_HEADER};
