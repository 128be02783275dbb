//! Compression for tagged settings payloads.
//!
//! Gzip via flate2. Compression runs before encryption on the write path
//! because ciphertext does not compress. Decompression drains the stream
//! to its CRC-validated end; truncated or invalid input fails outright,
//! never as a silent partial result.

use brokkr_core::{Error, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Default compression level (6 = balanced speed/ratio).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Compresses a byte buffer with gzip.
pub fn compress_bytes(bytes: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(bytes)
        .map_err(|e| Error::io("gzip stream", e))?;
    encoder.finish().map_err(|e| Error::io("gzip stream", e))
}

/// Decompresses a gzip buffer, failing on truncated or corrupt streams.
pub fn decompress_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(Error::decompression)?;
    Ok(out)
}
