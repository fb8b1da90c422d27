//! Session Store Adapters
//!
//! File-backed implementation of `SessionStore`.

mod file_store;

pub use file_store::FileSessionStore;
