//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer, plus the
//! console's own plumbing:
//!
//! - **Driven Adapters (Outbound)**
//!   - `backend/`: reqwest client for the RAG, crawling and auth endpoints
//!   - `session/`: JSON file session store
//!
//! - **Plumbing**
//!   - `config/`: environment settings and the dependency container
//!   - `telemetry/`: tracing subscriber setup
//!   - `terminal/`: table and JSON writers

pub mod backend;
pub mod config;
pub mod session;
pub mod telemetry;
pub mod terminal;
