//! Cascading text chunking engine.
//!
//! Splits long documents into bounded-size, overlapping chunks suitable for
//! embedding or indexing. Natural boundaries win: paragraph breaks are tried
//! first, then line breaks, with a fixed-width sliding window as the last
//! resort. Adjacent chunks repeat a configurable amount of trailing context.

mod config;
mod splitter;
mod words;


pub use config::{ChunkConfig, ChunkError};
pub use splitter::{chunk_text, chunk_with_config};
pub use words::chunk_text_by_words;

/// Default chunk size in words.
pub const DEFAULT_CHUNK_SIZE_WORDS: usize = 300;

/// Default overlap between adjacent chunks, in words.
pub const DEFAULT_CHUNK_OVERLAP_WORDS: usize = 50;
