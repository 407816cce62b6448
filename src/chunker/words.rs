//! Word-count chunking on top of the character pipeline.
//!
//! Word counts are converted to character counts with an average word length
//! estimated from a bounded sample of the text. The estimate is approximate:
//! callers asking for N-word chunks get chunks near N words, not exactly N.

use super::config::{ChunkConfig, ChunkError};
use super::splitter::chunk_text;

/// Characters sampled from the front of the text for the estimate.
const SAMPLE_LEN: usize = 500;

/// Assumed average word length when the sample contains no words.
const DEFAULT_AVG_WORD_LEN: usize = 6;

/// Split `text` into chunks of roughly `chunk_size_words` words, with roughly
/// `chunk_overlap_words` words of trailing context repeated between adjacent
/// chunks. Delegates to [`chunk_text`] after unit conversion.
pub fn chunk_text_by_words(
    text: &str,
    chunk_size_words: usize,
    chunk_overlap_words: usize,
) -> Result<Vec<String>, ChunkError> {
    // Validate in word units so errors report the caller's numbers.
    ChunkConfig::new(chunk_size_words, chunk_overlap_words)?;

    let avg_word_len = estimate_avg_word_len(text);
    chunk_text(
        text,
        chunk_size_words * avg_word_len,
        chunk_overlap_words * avg_word_len,
    )
}

/// Estimate the average word length of `text` from its first [`SAMPLE_LEN`]
/// characters.
///
/// A word start is a whitespace to non-whitespace transition. The `+ 1`
/// accounts for the separator character each word drags along.
fn estimate_avg_word_len(text: &str) -> usize {
    let mut sample_len = 0usize;
    let mut word_count = 0usize;
    let mut in_word = false;

    for ch in text.chars().take(SAMPLE_LEN) {
        sample_len += 1;
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            word_count += 1;
        }
    }

    if word_count == 0 {
        DEFAULT_AVG_WORD_LEN
    } else {
        sample_len / word_count + 1
    }
}
