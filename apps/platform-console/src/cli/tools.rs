//! PDF summary and scrape commands

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use crossterm::style::Stylize;

use crate::application::use_cases::ToolOutcome;
use crate::infrastructure::config::Container;

/// Arguments for `summarize`
#[derive(Args)]
pub struct SummarizeArgs {
    /// Path to a PDF file
    pub path: PathBuf,

    /// Print the summary without a heading
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `scrape`
#[derive(Args)]
pub struct ScrapeArgs {
    /// Page to scrape (http or https)
    #[arg(long, short)]
    pub url: String,

    /// Keyword to look for on the page
    #[arg(long, short, default_value = "")]
    pub keyword: String,

    /// Print the result without a heading
    #[arg(long)]
    pub raw: bool,
}

/// Summarise a PDF without indexing it.
pub async fn summarize(args: SummarizeArgs, container: &Container) -> Result<()> {
    eprintln!("요약 중...");
    let outcome = container.document_tools().summarize(&args.path).await?;
    finish(&outcome, "요약 결과", args.raw, container.config().color)
}

/// Scrape a page through the backend.
pub async fn scrape(args: ScrapeArgs, container: &Container) -> Result<()> {
    eprintln!("스크래핑 중...");
    let outcome = container
        .document_tools()
        .scrape(&args.url, &args.keyword)
        .await?;
    finish(&outcome, "스크래핑 결과", args.raw, container.config().color)
}

fn finish(outcome: &ToolOutcome, title: &str, raw: bool, color: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_outcome(&mut stdout, outcome, title, raw, color)?;
    drop(stdout);
    if let ToolOutcome::Failed { error, .. } = outcome {
        bail!("{error}");
    }
    Ok(())
}

/// Write the returned text, or the failure notice, under `title`.
fn write_outcome(
    out: &mut impl Write,
    outcome: &ToolOutcome,
    title: &str,
    raw: bool,
    color: bool,
) -> std::io::Result<()> {
    let text = outcome.text();
    if raw || matches!(outcome, ToolOutcome::Failed { .. }) {
        return writeln!(out, "{text}");
    }
    if color {
        writeln!(out, "{}", title.bold())?;
    } else {
        writeln!(out, "{title}")?;
    }
    if text.trim().is_empty() {
        writeln!(out, "-")
    } else {
        writeln!(out, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::SCRAPE_FAILURE_MESSAGE;

    fn written(outcome: &ToolOutcome, raw: bool) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, outcome, "요약 결과", raw, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn result_is_written_under_its_heading() {
        let outcome = ToolOutcome::Completed("첫째 줄\n둘째 줄".to_string());
        assert_eq!(written(&outcome, false), "요약 결과\n첫째 줄\n둘째 줄\n");
        assert_eq!(written(&outcome, true), "첫째 줄\n둘째 줄\n");
    }

    #[test]
    fn empty_result_shows_a_dash() {
        let outcome = ToolOutcome::Completed("  ".to_string());
        assert_eq!(written(&outcome, false), "요약 결과\n-\n");
    }

    #[test]
    fn failure_writes_only_the_notice() {
        let outcome = ToolOutcome::Failed {
            notice: SCRAPE_FAILURE_MESSAGE,
            error: "could not reach the backend: refused".to_string(),
        };
        assert_eq!(written(&outcome, false), format!("{SCRAPE_FAILURE_MESSAGE}\n"));
    }
}
