//! Document commands

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::OutputArgs;
use crate::application::ports::Confirmation;
use crate::application::render::Cell;
use crate::domain::rag::UploadedFile;
use crate::infrastructure::config::Container;
use crate::infrastructure::terminal::{TableWriter, write_json};

const FILE_HEADERS: [&str; 5] = ["Name", "Uploaded", "Size", "LLM", "Embedding"];

/// Document subcommands
#[derive(Subcommand)]
pub enum FilesCommands {
    /// List indexed documents, newest first
    List(OutputArgs),
    /// Upload a PDF for indexing (requires login)
    Upload(UploadArgs),
    /// Remove an indexed document (requires login)
    Delete(DeleteArgs),
}

/// Arguments for `files upload`
#[derive(Args)]
pub struct UploadArgs {
    /// Path to a PDF file
    pub path: PathBuf,
}

/// Arguments for `files delete`
#[derive(Args)]
pub struct DeleteArgs {
    /// Indexed file name
    pub name: String,
}

/// Execute document commands
pub async fn execute(cmd: FilesCommands, container: &Container) -> Result<()> {
    let workspace = container.rag_workspace();

    match cmd {
        FilesCommands::List(output) => {
            let files = workspace.list_files().await?;
            let mut stdout = std::io::stdout().lock();
            if output.json {
                write_json(&mut stdout, &files)?;
            } else {
                let writer = TableWriter::new(container.config().color);
                if files.is_empty() {
                    writer.write_notice(&mut stdout, "No documents uploaded.")?;
                } else {
                    writer.write_table(&mut stdout, &FILE_HEADERS, &file_rows(&files))?;
                }
            }
        }
        FilesCommands::Upload(args) => {
            let confirmation = workspace.upload(&args.path).await?;
            writeln!(std::io::stdout(), "{}", confirmation_text(confirmation, "Uploaded"))?;
        }
        FilesCommands::Delete(args) => {
            let confirmation = workspace.delete(&args.name).await?;
            writeln!(std::io::stdout(), "{}", confirmation_text(confirmation, "Deleted"))?;
        }
    }
    Ok(())
}

fn file_rows(files: &[UploadedFile]) -> Vec<Vec<Cell>> {
    files
        .iter()
        .map(|f| {
            vec![
                Cell::plain(f.name.as_str()),
                Cell::plain(f.uploaded_on_display()),
                Cell::plain(f.size_display()),
                Cell::plain(f.llm_model.as_deref().unwrap_or("-")),
                Cell::plain(f.embedding_model.as_deref().unwrap_or("-")),
            ]
        })
        .collect()
}

fn confirmation_text(confirmation: Confirmation, fallback: &str) -> String {
    confirmation
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fill_missing_models_with_dash() {
        let files = vec![UploadedFile {
            name: "report.pdf".to_string(),
            uploaded_at: "2023-10-01T09:30:00Z".to_string(),
            size: 1_048_576.0,
            llm_model: Some("llama-3.1".to_string()),
            embedding_model: None,
        }];
        let rows = file_rows(&files);
        let texts: Vec<&str> = rows[0].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["report.pdf", "2023-10-01", "1.00 MB", "llama-3.1", "-"]);
    }

    #[test]
    fn confirmation_falls_back_when_blank() {
        let blank = Confirmation {
            message: Some(" ".to_string()),
        };
        assert_eq!(confirmation_text(blank, "Deleted"), "Deleted");
        let sent = Confirmation {
            message: Some("파일이 삭제되었습니다".to_string()),
        };
        assert_eq!(confirmation_text(sent, "Deleted"), "파일이 삭제되었습니다");
    }
}
