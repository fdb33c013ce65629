//! Upload validation: reject bad uploads before the parser ever sees them.
//!
//! Three filename checks guard the endpoint (absent field, empty name, wrong
//! extension) and each maps to a fixed HTTP 400 message the frontend relies
//! on. The separate magic-byte check catches files that merely *claim* to be
//! PDFs; that one surfaces as an extraction failure (HTTP 500) because by
//! then the upload itself was well-formed.

use crate::error::ExtractError;

/// First bytes of every PDF document.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Validate the filename of the uploaded `file` field.
///
/// * `None` — the field was missing entirely.
/// * `Some("")` — a field was sent with no file chosen.
/// * not ending in `.pdf` — wrong file type.
///
/// The extension comparison is exact (no case folding), matching the
/// service's documented contract.
pub fn validate_filename(filename: Option<&str>) -> Result<(), ExtractError> {
    let name = filename.ok_or(ExtractError::MissingFile)?;
    if name.is_empty() {
        return Err(ExtractError::EmptyFilename);
    }
    if !name.ends_with(".pdf") {
        return Err(ExtractError::NotPdf);
    }
    Ok(())
}

/// Verify the uploaded bytes start with the `%PDF` magic.
///
/// Renamed `.docx` files and truncated uploads fail here with a clean error
/// instead of a confusing message from deep inside the parser.
pub fn validate_magic(bytes: &[u8]) -> Result<(), ExtractError> {
    if bytes.len() < PDF_MAGIC.len() || &bytes[..PDF_MAGIC.len()] != PDF_MAGIC {
        let head: Vec<u8> = bytes.iter().take(4).copied().collect();
        return Err(ExtractError::Extraction {
            detail: format!("missing %PDF magic, first bytes: {head:?}"),
        });
    }
    Ok(())
}
