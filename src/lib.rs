//! # pdf-text-api
//!
//! HTTP service that turns uploaded PDF files into plain text and tabular
//! data, returned as JSON.
//!
//! ## Why this crate?
//!
//! Frontend applications often need quick document-to-text conversion
//! without shipping PDF tooling to the browser or installing it on every
//! client machine. This service keeps the parsing server-side behind one
//! multipart endpoint: upload a PDF, get back `{text, tables}`.
//!
//! ## Pipeline Overview
//!
//! ```text
//! POST /extract-text (multipart "file")
//!  │
//!  ├─ 1. Validate  field present, filename non-empty, .pdf extension
//!  ├─ 2. Magic     %PDF header check on the bytes
//!  ├─ 3. Text      per-page extraction via pdf-extract (spawn_blocking)
//!  ├─ 4. Tables    alignment heuristic over the page texts (optional)
//!  └─ 5. JSON      { text, tables? }  — 400 / 500 on failure
//! ```
//!
//! Every request is independent and fully in-memory: no temp files, no
//! state carried between requests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_text_api::{api, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::builder()
//!         .port(8000)
//!         .allowed_origin("http://localhost:3000")
//!         .build()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf-text-api` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when embedding only the library:
//! ```toml
//! pdf-text-api = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod validate;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ServerConfig, ServerConfigBuilder, DEFAULT_MAX_UPLOAD_BYTES};
pub use error::ExtractError;
pub use extract::{extract_document, ExtractedTable, ExtractionResult};
