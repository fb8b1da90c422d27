#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Platform Console - RAG and Crawling Client
//!
//! Typed client for the platform backend plus the terminal console built
//! on it. The backend offers retrieval-augmented chat over uploaded PDFs
//! and a crawling service for three public sites.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Value objects with no I/O
//!   - `crawling`: Sites, requests, result records
//!   - `rag`: Indexed documents, chat messages, answer sections
//!   - `session`: Login state
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: Crawling, RAG, document tool, auth and session store interfaces
//!   - `forms`: Crawling request form with clamping and validation
//!   - `render`: Result tables and number formatting
//!   - `use_cases`: Crawl page, document workspace, chat session, document tools
//!
//! - **Infrastructure**: Adapters and plumbing
//!   - `backend`: reqwest client for the platform API
//!   - `session`: JSON file session store
//!   - `config`: Environment settings and dependency injection
//!   - `telemetry`: tracing subscriber setup
//!   - `terminal`: Table and JSON output
//!
//! - **CLI**: clap subcommands driving the use cases
//!
//! # Data Flow
//!
//! ```text
//! CLI args ──► CrawlingForm ──► CrawlPageController ──► PlatformBackendAdapter ──► GET /api/crawl/*
//!                                      │
//!                                      └──► render_results ──► TableWriter ──► stdout
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Value objects with no I/O.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and plumbing.
pub mod infrastructure;

/// Command-line interface.
pub mod cli;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::crawling::{
    CrawlRequest, CrawlResults, CrawlSite, FinanceItem, MarketplaceItem, RealEstateItem,
    TradeType,
};
pub use domain::rag::{AnswerSection, ChatMessage, ChatRole, UploadedFile, parse_answer};
pub use domain::session::{LoginResponse, Session, User};

// Application
pub use application::forms::{CrawlingForm, FormError};
pub use application::ports::{
    AuthPort, BackendError, CrawlingPort, DocumentToolsPort, RagPort, SessionStore,
};
pub use application::render::{RenderedResults, render_results};
pub use application::use_cases::{
    ChatSession, CrawlPageController, DocumentTools, PageSnapshot, RagWorkspace, ToolOutcome,
};

// Infrastructure
pub use infrastructure::backend::{ApiConfig, ApiError, PlatformBackendAdapter};
pub use infrastructure::config::{ConfigError, ConsoleConfig, Container};
pub use infrastructure::session::FileSessionStore;
