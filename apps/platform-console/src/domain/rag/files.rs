//! Documents indexed by the RAG service.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A document the RAG service has indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name; also the delete key.
    pub name: String,
    /// Upload time as sent by the server (ISO 8601).
    #[serde(default)]
    pub uploaded_at: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: f64,
    /// Generation model bound to the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_model: Option<String>,
    /// Embedding model used to index the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
}

impl UploadedFile {
    /// Parsed upload time, if the server sent something recognisable.
    ///
    /// Timestamps without an offset are taken as UTC.
    #[must_use]
    pub fn uploaded_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.uploaded_at.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }

    /// Size in megabytes with two decimals, e.g. `"2.50 MB"`.
    #[must_use]
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size / BYTES_PER_MB)
    }

    /// Upload date as `YYYY-MM-DD`, or the raw value when unparsable.
    #[must_use]
    pub fn uploaded_on_display(&self) -> String {
        self.uploaded_at_utc().map_or_else(
            || {
                if self.uploaded_at.is_empty() {
                    "-".to_string()
                } else {
                    self.uploaded_at.clone()
                }
            },
            |dt| dt.format("%Y-%m-%d").to_string(),
        )
    }
}

/// Sort newest upload first; unparsable timestamps go last, ties keep order.
pub fn sort_newest_first(files: &mut [UploadedFile]) {
    files.sort_by(|a, b| match (a.uploaded_at_utc(), b.uploaded_at_utc()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Whether `file_name` names a PDF (case-insensitive extension check).
#[must_use]
pub fn is_pdf_name(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, uploaded_at: &str) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            uploaded_at: uploaded_at.to_string(),
            size: 2.5 * BYTES_PER_MB,
            llm_model: None,
            embedding_model: None,
        }
    }

    #[test]
    fn sorts_newest_first_with_garbage_last() {
        let mut files = vec![
            file("old.pdf", "2023-09-28T15:45:00Z"),
            file("bad.pdf", "yesterday"),
            file("new.pdf", "2023-10-01T09:30:00"),
        ];
        sort_newest_first(&mut files);
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["new.pdf", "old.pdf", "bad.pdf"]);
    }

    #[test]
    fn size_and_date_display() {
        let f = file("report.pdf", "2023-10-01T09:30:00+09:00");
        assert_eq!(f.size_display(), "2.50 MB");
        assert_eq!(f.uploaded_on_display(), "2023-10-01");
        assert_eq!(file("x.pdf", "").uploaded_on_display(), "-");
    }

    #[test]
    fn pdf_extension_check_ignores_case() {
        assert!(is_pdf_name("Report.PDF"));
        assert!(!is_pdf_name("notes.txt"));
        assert!(!is_pdf_name("pdf"));
    }
}
