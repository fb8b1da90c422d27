//! Console Configuration
//!
//! Environment-backed settings and the dependency container built from them.

mod container;
mod settings;

pub use container::{BootstrapError, Container};
pub use settings::{
    ConfigError, ConsoleConfig, DEFAULT_SESSION_FILE, ENV_API_URL, ENV_DEFAULT_MODEL,
    ENV_HTTP_TIMEOUT_SECS, ENV_NO_COLOR, ENV_SESSION_FILE,
};
