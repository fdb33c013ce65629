//! Text extraction: page-by-page plain text via the `pdf-extract` crate.
//!
//! The parser owns all the hard parts (content streams, font encodings,
//! layout). This module only turns its per-page output into the response
//! shape: every page contributes its text followed by exactly one newline,
//! in page order.

use crate::error::ExtractError;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;

/// Extract the text of every page, in page order.
///
/// Fails with [`ExtractError::Extraction`] when the bytes are not a
/// parseable PDF (corrupt file, encrypted document, unsupported feature) —
/// the upstream error is recorded as detail but never classified further.
/// The parser aborts (panics) on some malformed inputs instead of returning
/// an error; those aborts are caught and reported the same way.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let parsed = catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|panic| ExtractError::Extraction {
        detail: panic_detail(panic),
    })?;

    let pages = parsed.map_err(|e| ExtractError::Extraction {
        detail: e.to_string(),
    })?;
    debug!("extracted {} pages", pages.len());
    Ok(pages)
}

/// Recover the payload of a parser abort for the log.
fn panic_detail(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("parser aborted: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("parser aborted: {s}")
    } else {
        "parser aborted".to_string()
    }
}

/// Join page texts into the response `text` field.
///
/// Each page's text ends with exactly one `\n`: trailing newlines the parser
/// may have emitted are collapsed first, so an N-page document always yields
/// N newline-terminated segments.
pub fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page.trim_end_matches('\n'));
        text.push('\n');
    }
    text
}
