use super::ExtractionError;

/// Extract text from an in-memory PDF. Encrypted or malformed documents fail.
pub(crate) fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    // The extraction library separates pages with form feeds; the chunking
    // cascade only understands line breaks.
    Ok(text.replace('\x0C', "\n"))
}
