//! Chunking parameters and their validation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk size must be at least 1")]
    ZeroChunkSize,
    #[error("chunk overlap ({overlap}) must be smaller than chunk size ({size})")]
    OverlapTooLarge { overlap: usize, size: usize },
}

/// Validated chunking parameters.
///
/// Sizes count characters (Unicode scalar values), not bytes. Construction
/// rejects `chunk_overlap >= chunk_size`; a validated config therefore always
/// has a positive window stride.
#[derive(Debug, Clone, Copy)]
pub struct ChunkConfig {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl ChunkConfig {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, ChunkError> {
        if chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if chunk_overlap >= chunk_size {
            return Err(ChunkError::OverlapTooLarge {
                overlap: chunk_overlap,
                size: chunk_size,
            });
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Maximum characters per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Characters of trailing context repeated into the next chunk.
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Advance distance of the fixed-width window.
    pub(crate) fn stride(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn accepts_valid_parameters() {
        let config = ChunkConfig::new(300, 50).unwrap();
        assert_eq!(config.chunk_size(), 300);
        assert_eq!(config.chunk_overlap(), 50);
        assert_eq!(config.stride(), 250);
    }

    #[test]
    fn accepts_zero_overlap() {
        assert!(ChunkConfig::new(100, 0).is_ok());
    }

    #[test]
    fn rejects_zero_chunk_size() {
        assert_eq!(ChunkConfig::new(0, 0).unwrap_err(), ChunkError::ZeroChunkSize);
    }

    #[test]
    fn rejects_overlap_equal_to_size() {
        let err = ChunkConfig::new(100, 100).unwrap_err();
        assert_eq!(
            err,
            ChunkError::OverlapTooLarge {
                overlap: 100,
                size: 100
            }
        );
    }

    #[test]
    fn rejects_overlap_larger_than_size() {
        let err = ChunkConfig::new(100, 150).unwrap_err();
        assert_eq!(
            err,
            ChunkError::OverlapTooLarge {
                overlap: 150,
                size: 100
            }
        );
    }
}
