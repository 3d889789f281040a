// src/csv.rs
// Delimited-text codec for the export file.
//
// A cell is quoted when it holds the separator, a quote or a line break, and
// also when it is the only, empty cell of its row: an unquoted empty line
// would read back as a blank line and vanish.
use std::borrow::Cow;
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Writing ---------------- */

fn encode_cell(cell: &str, sep: char, lone: bool) -> Cow<'_, str> {
    let special = cell.chars().any(|c| c == sep || matches!(c, '"' | '\n' | '\r'));
    if special || (lone && cell.is_empty()) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// One row as a line, without the line terminator.
pub fn encode_row(row: &[String], sep: char) -> String {
    let lone = row.len() == 1;
    let mut line = s!();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            line.push(sep);
        }
        line.push_str(&encode_cell(cell, sep, lone));
    }
    line
}

/// Write a single row to any writer, newline-terminated.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    writeln!(w, "{}", encode_row(row, sep))
}

/// Header (if any) followed by every row, as one string.
pub fn rows_to_string(headers: &[String], rows: &[Vec<String>], sep: char) -> String {
    let header = (!headers.is_empty()).then_some(headers);
    let mut out = s!();
    for row in header.into_iter().chain(rows.iter().map(Vec::as_slice)) {
        out.push_str(&encode_row(row, sep));
        out.push('\n');
    }
    out
}

/* ---------------- Parsing ---------------- */

/// Accumulates the cells of the row being read.
#[derive(Default)]
struct RowBuf {
    cells: Vec<String>,
    cell: String,
    /// A quote was seen somewhere in the row, so it is not a blank line.
    quoted: bool,
}

impl RowBuf {
    fn end_cell(&mut self) {
        self.cells.push(take(&mut self.cell));
    }

    /// Close the row; `None` for a blank line.
    fn end_row(&mut self) -> Option<Vec<String>> {
        self.end_cell();
        let blank = !self.quoted && self.cells.len() == 1 && self.cells[0].is_empty();
        self.quoted = false;
        let cells = take(&mut self.cells);
        (!blank).then_some(cells)
    }
}

/// Parse delimited text back into rows. Tolerates CRLF and a missing final
/// newline; unquoted blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut buf = RowBuf::default();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    buf.cell.push('"');
                }
                '"' => in_quotes = false,
                _ => buf.cell.push(ch),
            }
            continue;
        }
        match ch {
            '"' => {
                in_quotes = true;
                buf.quoted = true;
            }
            c if c == sep => buf.end_cell(),
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                rows.extend(buf.end_row());
            }
            _ => buf.cell.push(ch),
        }
    }

    if buf.quoted || !buf.cell.is_empty() || !buf.cells.is_empty() {
        rows.extend(buf.end_row());
    }
    rows
}
