//! Table detection: recover grid-like data from extracted page text.
//!
//! ## Why text-based detection?
//!
//! PDF has no table markup — a "table" is just text drawn at aligned
//! coordinates, and the text extractor renders that alignment as runs of
//! spaces. This module looks for the footprint such grids leave in the
//! per-page text: consecutive lines that split into the same number of
//! cells on tab or multi-space gaps. The first row of a run becomes the
//! header row, the rest become data.
//!
//! This is a pass-through formatter over what the extractor produced, with
//! no accuracy guarantee beyond the alignment heuristic. Column order
//! follows the page; table order follows page order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// A cell gap: a tab, or two-plus consecutive spaces.
///
/// Single spaces stay inside a cell so multi-word headers ("Unit Price")
/// survive, which is exactly how aligned columns come out of the extractor.
static RE_CELL_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+| {2,}").unwrap());

/// Minimum rows (header included) before a run of aligned lines counts as a
/// table. A single aligned line is far more likely to be a heading with
/// wide spacing than a one-row table.
const MIN_ROWS: usize = 2;

/// Minimum columns per row. One-column "tables" are indistinguishable from
/// plain paragraphs.
const MIN_COLS: usize = 2;

/// One detected table: column headers plus row data.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtractedTable {
    /// Cell texts of the first row of the run.
    pub headers: Vec<String>,
    /// Remaining rows; numeric-looking cells are serialized as JSON numbers,
    /// everything else as strings.
    pub data: Vec<Vec<Value>>,
}

/// Detect tables across all pages, in page order.
pub fn detect_tables(pages: &[String]) -> Vec<ExtractedTable> {
    pages.iter().flat_map(|page| detect_in_page(page)).collect()
}

/// Detect tables within a single page's text.
fn detect_in_page(page: &str) -> Vec<ExtractedTable> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<String>> = Vec::new();

    for line in page.lines() {
        match split_cells(line) {
            // A row extends the current run only when its column count
            // matches; a mismatch closes the run and starts a new one.
            Some(cells) => {
                if let Some(first) = run.first() {
                    if cells.len() != first.len() {
                        flush_run(&mut run, &mut tables);
                    }
                }
                run.push(cells);
            }
            None => flush_run(&mut run, &mut tables),
        }
    }
    flush_run(&mut run, &mut tables);

    tables
}

/// Split a line into cells on gap separators; `None` when the line is not a
/// candidate row.
fn split_cells(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cells: Vec<String> = RE_CELL_GAP
        .split(trimmed)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();
    if cells.len() >= MIN_COLS {
        Some(cells)
    } else {
        None
    }
}

/// Close the current run: emit it as a table if it is tall enough.
fn flush_run(run: &mut Vec<Vec<String>>, tables: &mut Vec<ExtractedTable>) {
    if run.len() >= MIN_ROWS {
        let mut rows = std::mem::take(run);
        let headers = rows.remove(0);
        let data = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| parse_scalar(&cell)).collect())
            .collect();
        tables.push(ExtractedTable { headers, data });
    } else {
        run.clear();
    }
}

/// Coerce a cell to the narrowest JSON scalar: integer, then float, then
/// string. Non-finite floats fall back to strings since JSON has no NaN.
fn parse_scalar(cell: &str) -> Value {
    if let Ok(i) = cell.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = cell.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    Value::from(cell)
}
