//! Separator cascade splitting, greedy merging, and the fixed-width fallback.

use super::config::{ChunkConfig, ChunkError};

/// Separator tiers in priority order: paragraph breaks, then line breaks.
const SEPARATOR_TIERS: [&str; 2] = ["\n\n", "\n"];

/// Split `text` into chunks of at most `chunk_size` characters, with
/// `chunk_overlap` characters of the end of each chunk repeated at the start
/// of the next.
///
/// Paragraph boundaries are preferred over line boundaries, and a fixed-width
/// window is used only when neither separator divides the text. A chunk may
/// exceed `chunk_size` when a single unbroken segment is itself larger than
/// the limit; segments are emitted whole rather than cut mid-text.
pub fn chunk_text(
    text: &str,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Result<Vec<String>, ChunkError> {
    let config = ChunkConfig::new(chunk_size, chunk_overlap)?;
    Ok(chunk_with_config(text, &config))
}

/// Chunk with an already-validated configuration.
pub fn chunk_with_config(text: &str, config: &ChunkConfig) -> Vec<String> {
    // Already small enough: single chunk, no tier runs.
    if char_len(text) <= config.chunk_size() {
        return vec![text.to_string()];
    }

    for separator in SEPARATOR_TIERS {
        let segments = split_on_separator(text, separator);
        // A lone segment means this separator never divided the text.
        if segments.len() < 2 {
            continue;
        }
        let chunks = merge_segments(&segments, separator, config);
        if !chunks.is_empty() {
            return chunks;
        }
    }

    sliding_window(text, config)
}

/// Split on every occurrence of `separator`, keeping interior empty pieces so
/// separator runs survive rejoining. A single trailing empty piece (text
/// ending in the separator) is dropped.
fn split_on_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut segments: Vec<&str> = text.split(separator).collect();
    if segments.len() > 1 && segments.last().copied() == Some("") {
        segments.pop();
    }
    segments
}

/// Greedily pack segments into chunks, rejoining adjacent segments with
/// `separator`.
///
/// The running buffer is emitted once appending the next segment would push it
/// past `chunk_size`, and the next buffer is seeded with the emitted chunk's
/// trailing `chunk_overlap` characters when the chunk is strictly longer than
/// the overlap. Segments are never split here: one segment larger than
/// `chunk_size` becomes one oversized chunk.
fn merge_segments(segments: &[&str], separator: &str, config: &ChunkConfig) -> Vec<String> {
    let sep_len = char_len(separator);
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;

    for segment in segments {
        let seg_len = char_len(segment);

        if !buffer.is_empty() && buffer_len + sep_len + seg_len > config.chunk_size() {
            let overlap = config.chunk_overlap();
            let (carry, carry_len) = if overlap > 0 && buffer_len > overlap {
                (tail_chars(&buffer, overlap).to_string(), overlap)
            } else {
                (String::new(), 0)
            };
            chunks.push(std::mem::replace(&mut buffer, carry));
            buffer_len = carry_len;
        }

        if buffer.is_empty() {
            buffer.push_str(segment);
            buffer_len = seg_len;
        } else {
            buffer.push_str(separator);
            buffer.push_str(segment);
            buffer_len += sep_len + seg_len;
        }
    }

    if !buffer.is_empty() {
        chunks.push(buffer);
    }
    chunks
}

/// Terminal tier: fixed-width windows advanced by `stride` characters. The
/// last window may be shorter than `chunk_size`. Terminates because a
/// validated config always has a positive stride.
fn sliding_window(text: &str, config: &ChunkConfig) -> Vec<String> {
    let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let total = starts.len();
    let stride = config.stride();

    let mut chunks = Vec::with_capacity(total / stride + 1);
    let mut start = 0;
    while start < total {
        let end = start + config.chunk_size();
        let byte_start = starts[start];
        let byte_end = if end < total { starts[end] } else { text.len() };
        chunks.push(text[byte_start..byte_end].to_string());
        start += stride;
    }
    chunks
}

/// Number of characters in `s`.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The last `n` characters of `s`, or all of `s` if it is shorter.
fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}

#[cfg(test)]
mod splitter_tests {
    use super::*;

    fn config(size: usize, overlap: usize) -> ChunkConfig {
        ChunkConfig::new(size, overlap).unwrap()
    }

    #[test]
    fn split_keeps_interior_empty_segments() {
        assert_eq!(split_on_separator("a\n\n\n\nb", "\n\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_drops_trailing_empty_segment() {
        assert_eq!(split_on_separator("a\n\nb\n\n", "\n\n"), vec!["a", "b"]);
        assert_eq!(split_on_separator("a\n\n", "\n\n"), vec!["a"]);
    }

    #[test]
    fn split_without_separator_yields_whole_text() {
        assert_eq!(split_on_separator("no breaks here", "\n\n"), vec!["no breaks here"]);
    }

    #[test]
    fn split_with_leading_separator_keeps_empty_head() {
        assert_eq!(split_on_separator("\n\nb", "\n\n"), vec!["", "b"]);
    }

    #[test]
    fn merge_packs_segments_up_to_the_limit() {
        let chunks = merge_segments(&["one", "two", "three"], "\n", &config(8, 0));
        assert_eq!(chunks, vec!["one\ntwo", "three"]);
    }

    #[test]
    fn merge_counts_the_separator_against_the_limit() {
        // "one" + "\n" + "two" is 7 characters; a limit of 6 forces a flush.
        let chunks = merge_segments(&["one", "two"], "\n", &config(6, 0));
        assert_eq!(chunks, vec!["one", "two"]);
    }

    #[test]
    fn merge_seeds_next_buffer_with_overlap_tail() {
        let first = "a".repeat(30);
        let second = "b".repeat(30);
        let chunks = merge_segments(&[first.as_str(), second.as_str()], "\n", &config(40, 10));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], first);
        assert_eq!(chunks[1], format!("{}\n{}", "a".repeat(10), second));
    }

    #[test]
    fn merge_skips_overlap_when_chunk_is_not_longer_than_it() {
        // The emitted chunk has exactly overlap-many characters; nothing carries.
        let chunks = merge_segments(&["abcde", "fghij"], "\n", &config(7, 5));
        assert_eq!(chunks, vec!["abcde", "fghij"]);
    }

    #[test]
    fn merge_of_empty_segments_yields_no_chunks() {
        let chunks = merge_segments(&["", ""], "\n\n", &config(10, 0));
        assert!(chunks.is_empty());
    }

    #[test]
    fn window_advances_by_stride() {
        let text: String = ('a'..='z').cycle().take(100).collect();
        let chunks = sliding_window(&text, &config(40, 10));
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], text[0..40]);
        assert_eq!(chunks[1], text[30..70]);
        assert_eq!(chunks[2], text[60..100]);
        assert_eq!(chunks[3], text[90..100]);
    }

    #[test]
    fn window_handles_multi_byte_characters() {
        let text = "é".repeat(10);
        let chunks = sliding_window(&text, &config(4, 1));
        assert_eq!(chunks[0], "é".repeat(4));
        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
    }

    #[test]
    fn tail_chars_takes_the_suffix() {
        assert_eq!(tail_chars("abcdef", 2), "ef");
        assert_eq!(tail_chars("abc", 10), "abc");
        assert_eq!(tail_chars("abc", 0), "");
        assert_eq!(tail_chars("héllo", 4), "éllo");
    }
}
