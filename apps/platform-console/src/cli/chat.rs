//! Chat commands

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;
use crossterm::style::Stylize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::use_cases::{APOLOGY_MESSAGE, LOADING_MESSAGES, SendOutcome};
use crate::domain::rag::{AnswerSection, CHAT_MODELS, find_model, parse_answer};
use crate::infrastructure::config::Container;

/// Arguments for `ask`
#[derive(Args)]
pub struct AskArgs {
    /// Question to send
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Model id (see `models`)
    #[arg(long, short)]
    pub model: Option<String>,

    /// Print the answer unformatted
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `chat`
#[derive(Args)]
pub struct ChatArgs {
    /// Model id (see `models`)
    #[arg(long, short)]
    pub model: Option<String>,
}

/// Ask a single question.
pub async fn ask(args: AskArgs, container: &Container) -> Result<()> {
    let model = checked_model(args.model.as_deref())?;
    let session = container.chat_session(model);
    let query = args.query.join(" ");
    let color = container.config().color;

    loading_line(0, color)?;
    match session.send(&query).await {
        SendOutcome::Answered(answer) => {
            let mut stdout = std::io::stdout().lock();
            if args.raw {
                writeln!(stdout, "{answer}")?;
            } else {
                write_answer(&mut stdout, &answer, color)?;
            }
            Ok(())
        }
        SendOutcome::Failed(error) => {
            println!("{APOLOGY_MESSAGE}");
            bail!(error)
        }
        SendOutcome::Ignored => bail!("question is empty"),
    }
}

/// Interactive conversation; one question per line, `/exit` to leave.
pub async fn chat(args: ChatArgs, container: &Container) -> Result<()> {
    let model = checked_model(args.model.as_deref())?;
    let session = container.chat_session(model);
    let color = container.config().color;

    eprintln!("Chatting with {} (type /exit to quit)", session.model());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut turn = 0usize;

    loop {
        eprint!("> ");
        std::io::stderr().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if matches!(line, "/exit" | "/quit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        loading_line(turn, color)?;
        turn += 1;
        let outcome = session.send(line).await;
        let mut stdout = std::io::stdout().lock();
        match outcome {
            SendOutcome::Answered(answer) => write_answer(&mut stdout, &answer, color)?,
            SendOutcome::Failed(error) => {
                tracing::debug!(%error, "answer replaced by apology");
                writeln!(stdout, "{APOLOGY_MESSAGE}")?;
            }
            SendOutcome::Ignored => {}
        }
        writeln!(stdout)?;
    }

    tracing::debug!(messages = session.history().len(), "chat ended");
    Ok(())
}

/// Print the model catalog.
pub fn models(default_model: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for model in &CHAT_MODELS {
        let marker = if model.id == default_model { "*" } else { " " };
        writeln!(
            stdout,
            "{marker} {:<16} {:<16} {}",
            model.id, model.name, model.description
        )?;
    }
    Ok(())
}

fn checked_model(model: Option<&str>) -> Result<Option<&str>> {
    match model {
        Some(id) if find_model(id).is_none() => {
            let known: Vec<&str> = CHAT_MODELS.iter().map(|m| m.id).collect();
            bail!("unknown model '{id}' (available: {})", known.join(", "))
        }
        other => Ok(other),
    }
}

fn loading_line(turn: usize, color: bool) -> Result<()> {
    let message = LOADING_MESSAGES[turn % LOADING_MESSAGES.len()];
    let mut stderr = std::io::stderr();
    if color {
        writeln!(stderr, "{}", message.dim())?;
    } else {
        writeln!(stderr, "{message}")?;
    }
    Ok(())
}

/// Write an answer split into its labelled sections.
fn write_answer(out: &mut impl Write, answer: &str, color: bool) -> std::io::Result<()> {
    for (i, section) in parse_answer(answer).into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        match section {
            AnswerSection::KeyPoints(text) => {
                heading(out, "핵심내용", color)?;
                writeln!(out, "{text}")?;
            }
            AnswerSection::Details(text) => {
                heading(out, "상세내용", color)?;
                writeln!(out, "{text}")?;
            }
            AnswerSection::Sources(sources) => {
                heading(out, "출처", color)?;
                for source in sources {
                    writeln!(out, "- {source}")?;
                }
            }
            AnswerSection::Text(text) => writeln!(out, "{text}")?,
        }
    }
    Ok(())
}

fn heading(out: &mut impl Write, title: &str, color: bool) -> std::io::Result<()> {
    if color {
        writeln!(out, "{}", title.bold())
    } else {
        writeln!(out, "{title}")
    }
}
