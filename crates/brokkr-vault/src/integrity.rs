//! Integrity tagging for serialized payloads.
//!
//! The tag is a SHA-256 digest prepended to the payload. It is attached
//! before compression so the digest covers the content as serialized,
//! and verified after decompression on the read path. A mismatch means
//! corruption or tampering, reported distinctly from format and I/O
//! errors.

use brokkr_core::{Error, Result};
use sha2::{Digest, Sha256};

/// Size of the digest prefix in bytes
pub const DIGEST_SIZE: usize = 32;

/// Prepends the digest of `payload`, producing a self-describing tagged
/// blob.
pub fn attach_digest(payload: &[u8]) -> Vec<u8> {
    let digest = Sha256::digest(payload);
    let mut tagged = Vec::with_capacity(DIGEST_SIZE + payload.len());
    tagged.extend_from_slice(&digest);
    tagged.extend_from_slice(payload);
    tagged
}

/// Splits the digest prefix from a tagged blob, recomputes the digest over
/// the payload, and compares. Returns the payload on match.
pub fn split_and_verify(tagged: &[u8]) -> Result<&[u8]> {
    if tagged.len() < DIGEST_SIZE {
        return Err(Error::Integrity);
    }
    let (tag, payload) = tagged.split_at(DIGEST_SIZE);
    let digest = Sha256::digest(payload);
    if tag != digest.as_slice() {
        return Err(Error::Integrity);
    }
    Ok(payload)
}
