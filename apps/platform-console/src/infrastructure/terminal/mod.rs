//! Terminal Output
//!
//! Aligned, optionally colored tables and JSON on any `io::Write`.
//! Column widths are measured in terminal cells: Hangul and other wide
//! characters take two.

use std::io::{self, Write};

use crossterm::style::Stylize;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::render::{Cell, RenderedResults, Tone};

/// Widest a column may grow before cells are cut.
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 40;

const COLUMN_GAP: &str = "  ";

/// Writes tables to a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TableWriter {
    color: bool,
    max_column_width: usize,
}

impl TableWriter {
    /// Writer with colors on or off.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self {
            color,
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
        }
    }

    /// Set the column width cap.
    #[must_use]
    pub const fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Write crawl results: a table, or the placeholder line.
    pub fn write_results(
        &self,
        out: &mut impl Write,
        rendered: &RenderedResults,
    ) -> io::Result<()> {
        match rendered {
            RenderedResults::Placeholder { message } => self.write_notice(out, message),
            RenderedResults::Table { headers, rows } => self.write_table(out, headers, rows),
        }
    }

    /// Write a dimmed single-line notice.
    pub fn write_notice(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", message.dim())
        } else {
            writeln!(out, "{message}")
        }
    }

    /// Write `rows` under `headers`, columns padded to a common width.
    pub fn write_table(
        &self,
        out: &mut impl Write,
        headers: &[&str],
        rows: &[Vec<Cell>],
    ) -> io::Result<()> {
        let cells: Vec<Vec<(String, Tone)>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| (truncate_to_width(&c.text, self.max_column_width), c.tone))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| display_width(h).min(self.max_column_width))
            .collect();
        for row in &cells {
            for (i, (text, _)) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(display_width(text));
                }
            }
        }

        let header_line = join_padded(
            headers
                .iter()
                .map(|h| truncate_to_width(h, self.max_column_width)),
            &widths,
        );
        if self.color {
            writeln!(out, "{}", header_line.as_str().bold())?;
        } else {
            writeln!(out, "{header_line}")?;
        }
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(out, "{}", rule.join(COLUMN_GAP))?;

        for row in &cells {
            let mut line = String::new();
            for (i, (text, tone)) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str(COLUMN_GAP);
                }
                let width = widths.get(i).copied().unwrap_or_else(|| display_width(text));
                let padded = pad(text, width);
                line.push_str(&self.paint(&padded, *tone));
            }
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        match (self.color, tone) {
            (true, Tone::Up) => text.red().to_string(),
            (true, Tone::Down) => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Terminal cells needed to show `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `max` cells, marking the cut with `…`.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let text = text.replace(['\n', '\r', '\t'], " ");
    if display_width(&text) <= max {
        return text;
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn join_padded(items: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let parts: Vec<String> = items
        .zip(widths)
        .map(|(text, width)| pad(&text, *width))
        .collect();
    parts.join(COLUMN_GAP).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn render(writer: TableWriter, headers: &[&str], rows: &[Vec<Cell>]) -> String {
        let mut out = Vec::new();
        writer.write_table(&mut out, headers, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test_case("abc", 3 ; "ascii")]
    #[test_case("삼성전자", 8 ; "hangul")]
    #[test_case("84.9㎡", 6 ; "square metre sign")]
    #[test_case("▲ 1,500", 7 ; "triangle is narrow")]
    #[test_case("", 0 ; "empty")]
    fn widths(text: &str, expected: usize) {
        assert_eq!(display_width(text), expected);
    }

    #[test]
    fn truncation_respects_cell_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        let cut = truncate_to_width("가나다라마", 6);
        assert_eq!(cut, "가나…");
        assert!(display_width(&cut) <= 6);
    }

    #[test]
    fn columns_align_with_wide_text() {
        let rows = vec![
            vec![Cell::plain("삼성전자"), Cell::plain("71,200")],
            vec![Cell::plain("LG"), Cell::plain("98,000")],
        ];
        let text = render(TableWriter::new(false), &["Name", "Price"], &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name      Price");
        assert_eq!(lines[1], "--------  ------");
        assert_eq!(lines[2], "삼성전자  71,200");
        assert_eq!(lines[3], "LG        98,000");
    }

    #[test]
    fn colors_only_when_enabled() {
        let rows = vec![vec![
            Cell::toned("▲ 100", Tone::Up),
            Cell::toned("▼ 5", Tone::Down),
        ]];
        let plain = render(TableWriter::new(false), &["A", "B"], &rows);
        assert!(!plain.contains('\x1b'));

        let colored = render(TableWriter::new(true), &["A", "B"], &rows);
        assert!(colored.contains(&"▲ 100".red().to_string()));
        assert!(colored.contains(&"▼ 5".blue().to_string()));
    }

    #[test]
    fn placeholder_is_a_single_line() {
        let mut out = Vec::new();
        TableWriter::new(false)
            .write_results(
                &mut out,
                &RenderedResults::Placeholder {
                    message: "No crawl results.".to_string(),
                },
            )
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No crawl results.\n");
    }

    #[test]
    fn json_output_is_pretty() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
