//! Tracing Setup
//!
//! Logs go to stderr so stdout carries only tables and JSON.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: extra filter directives (default: `platform_console=info`)

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directive applied unless `RUST_LOG` says otherwise.
pub const DEFAULT_DIRECTIVE: &str = "platform_console=info";

/// Directive used with `--verbose`.
pub const VERBOSE_DIRECTIVE: &str = "platform_console=debug";

/// Initialize tracing with the default directive.
pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE);
}

/// Initialize tracing with `directive` as the crate's base level.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_with_directive(directive: &str) {
    let env_filter = build_filter(directive);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

#[allow(clippy::expect_used)]
fn build_filter(directive: &str) -> EnvFilter {
    let base = directive.parse().unwrap_or_else(|_| {
        DEFAULT_DIRECTIVE
            .parse()
            .expect("static directive 'platform_console=info' is valid")
    });
    EnvFilter::from_default_env()
        .add_directive(base)
        .add_directive(
            "hyper=warn"
                .parse()
                .expect("static directive 'hyper=warn' is valid"),
        )
        .add_directive(
            "reqwest=warn"
                .parse()
                .expect("static directive 'reqwest=warn' is valid"),
        )
}

// =============================================================================
// Tests
// =============================================================================
