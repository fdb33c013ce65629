//! Error types for the pdf-text-api library.
//!
//! One tagged enum covers both failure modes so the HTTP layer can map each
//! variant to a status code deterministically:
//!
//! * **Validation** variants ([`ExtractError::MissingFile`],
//!   [`ExtractError::EmptyFilename`], [`ExtractError::NotPdf`],
//!   [`ExtractError::Upload`]) — the client sent a bad request. Mapped to
//!   HTTP 400 with the variant's short message verbatim.
//!
//! * **Extraction** variants ([`ExtractError::Extraction`],
//!   [`ExtractError::Internal`]) — the upload was well-formed but parsing
//!   failed. Mapped to HTTP 500. The library-level detail (which may contain
//!   internal parser state) is logged, never returned to the client;
//!   [`ExtractError::client_message`] produces the sanitized body text.

use thiserror::Error;

/// All errors produced while handling one extraction request.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Validation errors (client-caused, HTTP 400) ───────────────────────
    /// The multipart form had no `file` field.
    #[error("No file provided")]
    MissingFile,

    /// The `file` field was present but carried an empty filename.
    #[error("No file selected")]
    EmptyFilename,

    /// The filename does not end in `.pdf`.
    #[error("File must be a PDF")]
    NotPdf,

    /// The multipart body itself could not be read.
    #[error("Malformed upload: {detail}")]
    Upload { detail: String },

    // ── Extraction errors (server-side, HTTP 500) ─────────────────────────
    /// The PDF library rejected the document (corrupt, encrypted,
    /// unsupported feature). Not classified further — the upstream parser
    /// gives no stable taxonomy.
    #[error("Failed to extract text from PDF: {detail}")]
    Extraction { detail: String },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExtractError {
    /// True when the error is the client's fault and should map to HTTP 400.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingFile
                | ExtractError::EmptyFilename
                | ExtractError::NotPdf
                | ExtractError::Upload { .. }
        )
    }

    /// Message safe to return to the client.
    ///
    /// Validation messages are short and fixed, so they go out verbatim.
    /// Extraction detail can echo internal parser state, so only a generic
    /// sentence is surfaced; the full [`std::fmt::Display`] form belongs in
    /// the server log.
    pub fn client_message(&self) -> String {
        if self.is_client_error() {
            return self.to_string();
        }
        match self {
            ExtractError::Extraction { .. } => "Failed to extract text from PDF".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_verbatim() {
        assert_eq!(ExtractError::MissingFile.client_message(), "No file provided");
        assert_eq!(ExtractError::EmptyFilename.client_message(), "No file selected");
        assert_eq!(ExtractError::NotPdf.client_message(), "File must be a PDF");
    }

    #[test]
    fn extraction_detail_is_not_leaked() {
        let e = ExtractError::Extraction {
            detail: "xref table at offset 0x41 is garbage".into(),
        };
        let msg = e.client_message();
        assert!(!msg.contains("xref"), "leaked: {msg}");
        assert_eq!(msg, "Failed to extract text from PDF");
    }

    #[test]
    fn client_error_classification() {
        assert!(ExtractError::MissingFile.is_client_error());
        assert!(ExtractError::Upload {
            detail: "truncated".into()
        }
        .is_client_error());
        assert!(!ExtractError::Internal("boom".into()).is_client_error());
        assert!(!ExtractError::Extraction { detail: "bad".into() }.is_client_error());
    }
}
