//! Domain Layer
//!
//! Value objects and records shared by every other layer. Nothing here
//! performs I/O.
//!
//! - `crawling`: sites, validated requests, result records
//! - `rag`: indexed documents, chat messages, answer sections
//! - `session`: login state

pub mod crawling;
pub mod rag;
pub mod session;
