//! Flat-file sink. Plain comma-separated UTF-8 with standard quoting; the
//! reader half exists so the round-trip property is checked with the same
//! rules the writer uses.

use std::fs;
use std::io::{self, Write};
use std::mem::take;
use std::path::Path;

use crate::record::Catalog;

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{SEP}")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Serializes the catalog: header row in canonical order, one row per
/// record.
pub fn to_csv_string(catalog: &Catalog) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let headers: Vec<String> = catalog.headers().iter().map(|h| h.to_string()).collect();
    let _ = write_row(&mut buf, &headers);
    for record in catalog.records() {
        let _ = write_row(&mut buf, &record.field_values());
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Writes the catalog to `path`, replacing any existing file.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> io::Result<()> {
    fs::write(path, to_csv_string(catalog))
}

/// Minimal CSV parser (quotes + CRLF tolerant), the writer's inverse.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

// ── Tests ──
