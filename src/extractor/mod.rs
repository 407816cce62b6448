//! Document text extraction.
//!
//! Turns raw document bytes into plain text plus a digest of the source
//! bytes, dispatching on the filename extension. Extraction failures surface
//! unchanged; nothing here retries or substitutes partial output.

mod pdf;
mod txt;

use std::path::Path;

use thiserror::Error;

use crate::digest;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

/// Plain text pulled out of a document, with the SHA-256 of the raw bytes.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub sha256: String,
}

/// Extract text from document bytes based on the filename extension.
///
/// PDFs go through the PDF library; text and markdown are decoded as UTF-8
/// with invalid sequences replaced. Anything else is refused rather than
/// guessed at.
pub fn extract(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, ExtractionError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match ext.as_str() {
        "pdf" => pdf::extract_pdf(bytes)?,
        "txt" | "text" | "md" | "markdown" => txt::extract_txt(bytes),
        other => return Err(ExtractionError::UnsupportedType(other.to_string())),
    };

    Ok(ExtractedDocument {
        text,
        sha256: digest::sha256_hex(bytes),
    })
}
