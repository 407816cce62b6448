// Public API exports
pub mod chunker;
pub mod digest;
pub mod extractor;

// Re-export main types for convenience
pub use chunker::{
    chunk_text, chunk_text_by_words, chunk_with_config, ChunkConfig, ChunkError,
    DEFAULT_CHUNK_OVERLAP_WORDS, DEFAULT_CHUNK_SIZE_WORDS,
};

pub use digest::sha256_hex;

pub use extractor::{extract, ExtractedDocument, ExtractionError};
