//! Extraction pipeline: PDF bytes in, [`ExtractionResult`] out.
//!
//! ```text
//! bytes
//!  │
//!  ├─ 1. Magic    verify the %PDF header
//!  ├─ 2. Text     per-page plain text via pdf-extract (CPU-bound,
//!  │              spawn_blocking)
//!  ├─ 3. Tables   alignment heuristic over the page texts (optional)
//!  └─ 4. Result   { text, tables? }
//! ```
//!
//! Everything is in-memory and request-scoped: no temp files, no state
//! shared between requests, so concurrent extractions cannot interfere.

pub mod tables;
pub mod text;

use crate::error::ExtractError;
use crate::validate;
use serde::Serialize;
use tracing::info;

pub use tables::ExtractedTable;

/// Result of extracting one document.
///
/// Constructed once per request and serialized straight into the response
/// body; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// All page texts concatenated in page order, one trailing newline per
    /// page.
    pub text: String,
    /// Detected tables, present only when table extraction is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<ExtractedTable>>,
}

/// Extract text (and optionally tables) from PDF bytes.
///
/// Synchronous and CPU-bound; HTTP handlers should call
/// [`extract_document_blocking`] instead so the parse does not stall the
/// async runtime.
pub fn extract_document(bytes: &[u8], with_tables: bool) -> Result<ExtractionResult, ExtractError> {
    validate::validate_magic(bytes)?;

    let pages = text::extract_pages(bytes)?;
    let tables = with_tables.then(|| tables::detect_tables(&pages));
    let text = text::join_pages(&pages);

    info!(
        pages = pages.len(),
        chars = text.len(),
        tables = tables.as_ref().map(|t| t.len()).unwrap_or(0),
        "extraction complete"
    );

    Ok(ExtractionResult { text, tables })
}

/// Run [`extract_document`] on the blocking thread pool.
///
/// Parsing a large PDF can take hundreds of milliseconds of pure CPU;
/// `spawn_blocking` keeps the tokio reactor free to accept other requests
/// meanwhile.
pub async fn extract_document_blocking(
    bytes: Vec<u8>,
    with_tables: bool,
) -> Result<ExtractionResult, ExtractError> {
    tokio::task::spawn_blocking(move || extract_document(&bytes, with_tables))
        .await
        .map_err(|e| ExtractError::Internal(format!("extraction task panicked: {e}")))?
}
