//! SHA-256 content digests.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a byte buffer.
///
/// Deterministic and infallible; used to fingerprint source documents for
/// dedup and citation ids.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
