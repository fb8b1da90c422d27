//! Platform Console Binary
//!
//! Terminal client for the platform RAG and crawling services.
//!
//! # Usage
//!
//! ```bash
//! platform-console crawl finance --pages 3
//! platform-console crawl marketplace --keyword 노트북 --max-items 20
//! platform-console crawl real-estate --complex-no 102737 --trade-type lease
//! platform-console login --username admin
//! platform-console files list
//! platform-console ask "What does the report conclude?"
//! platform-console chat --model gemma-3-12b
//! platform-console summarize ./report.pdf
//! platform-console scrape --url https://example.com --keyword 가격
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `PLATFORM_API_URL`: Backend base URL, e.g. <http://localhost:8000>
//!
//! ## Optional
//! - `PLATFORM_HTTP_TIMEOUT_SECS`: Request timeout (default: 60)
//! - `PLATFORM_SESSION_FILE`: Session file path (default: .platform-console/session.json)
//! - `PLATFORM_DEFAULT_MODEL`: Chat model id (default: llama-3.1)
//! - `PLATFORM_PASSWORD`: Password for `login`
//! - `NO_COLOR`: Disable ANSI colors
//! - `RUST_LOG`: Log filter (default: platform_console=info)

use anyhow::Result;
use clap::Parser;
use platform_console::cli::{self, Cli, Commands};
use platform_console::domain::rag::DEFAULT_CHAT_MODEL;
use platform_console::infrastructure::config::{ConsoleConfig, Container};
use platform_console::infrastructure::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let cli = Cli::parse();
    if cli.verbose {
        telemetry::init_with_directive(telemetry::VERBOSE_DIRECTIVE);
    } else {
        telemetry::init();
    }

    if matches!(cli.command, Commands::Models) {
        let default_model = ConsoleConfig::from_env()
            .map_or_else(|_| DEFAULT_CHAT_MODEL.to_string(), |c| c.default_model);
        return cli::chat::models(&default_model);
    }

    let mut config = ConsoleConfig::from_env()?;
    if cli.no_color {
        config.color = false;
    }
    tracing::debug!(
        base_url = config.api.base_url(),
        session_file = %config.session_file.display(),
        "configuration loaded"
    );
    let container = Container::from_config(config)?;

    match cli.command {
        Commands::Login(args) => cli::auth::login(args, &container).await,
        Commands::Logout => cli::auth::logout(&container),
        Commands::Whoami => cli::auth::whoami(&container),
        Commands::Files(cmd) => cli::files::execute(cmd, &container).await,
        Commands::Ask(args) => cli::chat::ask(args, &container).await,
        Commands::Chat(args) => cli::chat::chat(args, &container).await,
        Commands::Crawl(cmd) => cli::crawl::execute(cmd, &container).await,
        Commands::Summarize(args) => cli::tools::summarize(args, &container).await,
        Commands::Scrape(args) => cli::tools::scrape(args, &container).await,
        // Answered before configuration is loaded.
        Commands::Models => Ok(()),
    }
}

/// Load `.env` from the current directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
