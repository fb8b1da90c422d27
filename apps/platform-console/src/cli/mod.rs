//! Command-line interface
//!
//! Provides the console's subcommands.

pub mod auth;
pub mod chat;
pub mod crawl;
pub mod files;
pub mod tools;

use clap::{Args, Parser, Subcommand};

/// Platform Console CLI
#[derive(Parser)]
#[command(name = "platform-console")]
#[command(about = "Terminal client for the platform RAG and crawling services")]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login(auth::LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// Manage indexed documents
    #[command(subcommand)]
    Files(files::FilesCommands),
    /// Ask the RAG service one question
    Ask(chat::AskArgs),
    /// Interactive chat with the RAG service
    Chat(chat::ChatArgs),
    /// List available chat models
    Models,
    /// Run a crawl and show the results
    #[command(subcommand)]
    Crawl(crawl::CrawlCommands),
    /// Summarise a PDF without indexing it
    Summarize(tools::SummarizeArgs),
    /// Scrape a web page through the backend
    Scrape(tools::ScrapeArgs),
}

/// Output format shared by listing commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
