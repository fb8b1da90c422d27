//! Crawl commands

use std::io::Write;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use tracing::{info, warn};

use super::OutputArgs;
use crate::application::forms::CrawlingForm;
use crate::application::render::render_results;
use crate::domain::crawling::{CrawlSite, MARKETPLACE_ITEMS_DEFAULT};
use crate::infrastructure::config::Container;
use crate::infrastructure::terminal::{TableWriter, write_json};

/// Crawl subcommands
#[derive(Subcommand)]
pub enum CrawlCommands {
    /// Naver Finance market-cap listing
    Finance(FinanceArgs),
    /// Coupang product search
    Marketplace(MarketplaceArgs),
    /// Naver Real Estate listings for one complex
    RealEstate(RealEstateArgs),
}

/// Arguments for the finance crawl
#[derive(Args)]
pub struct FinanceArgs {
    /// Listing pages to crawl (1-10)
    #[arg(long, short, default_value = "1", allow_hyphen_values = true)]
    pub pages: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the marketplace crawl
#[derive(Args)]
pub struct MarketplaceArgs {
    /// Search keyword
    #[arg(long, short)]
    pub keyword: String,

    /// Maximum products to return (1-50)
    #[arg(long, short, default_value_t = MARKETPLACE_ITEMS_DEFAULT.to_string(), allow_hyphen_values = true)]
    pub max_items: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the real-estate crawl
#[derive(Args)]
pub struct RealEstateArgs {
    /// Apartment complex number
    #[arg(long, short)]
    pub complex_no: String,

    /// Transaction kind: sale (A1), lease (B1) or monthly (B2)
    #[arg(long, short, default_value = "sale")]
    pub trade_type: String,

    /// Result page
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub page: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute crawl commands
pub async fn execute(cmd: CrawlCommands, container: &Container) -> Result<()> {
    let (form, output) = build_form(cmd)?;
    let page = container.crawl_page();

    info!(site = %form.site(), "crawling {}", form.site().label());
    let snapshot = page.submit_form(&form).await?;
    if let Some(error) = snapshot.error {
        bail!("crawl failed: {error}");
    }

    let mut stdout = std::io::stdout().lock();
    if output.json {
        write_json(&mut stdout, &snapshot.results)?;
    } else {
        let rendered = render_results(&snapshot.results);
        TableWriter::new(container.config().color).write_results(&mut stdout, &rendered)?;
        if !rendered.is_placeholder() {
            writeln!(stdout, "\n{} rows", snapshot.results.len())?;
        }
    }
    Ok(())
}

/// Fill a form from arguments, the way a user would type them in.
fn build_form(cmd: CrawlCommands) -> Result<(CrawlingForm, OutputArgs)> {
    let mut form = CrawlingForm::default();
    let output = match cmd {
        CrawlCommands::Finance(args) => {
            form.select_site(CrawlSite::Finance);
            note_clamp("pages", &args.pages, form.set_pages_input(&args.pages)?);
            args.output
        }
        CrawlCommands::Marketplace(args) => {
            form.select_site(CrawlSite::Marketplace);
            form.set_keyword(&args.keyword)?;
            note_clamp("max-items", &args.max_items, form.set_max_items_input(&args.max_items)?);
            args.output
        }
        CrawlCommands::RealEstate(args) => {
            form.select_site(CrawlSite::RealEstate);
            form.set_complex_no(&args.complex_no)?;
            form.set_trade_type_input(&args.trade_type)?;
            note_clamp("page", &args.page, form.set_page_input(&args.page)?);
            args.output
        }
    };
    Ok((form, output))
}

fn note_clamp(field: &str, requested: &str, applied: u32) {
    if requested.trim() != applied.to_string() {
        warn!(field, requested, applied, "value out of range, adjusted");
    }
}
