//! Canonical byte encoding for settings mappings.
//!
//! The encoding is JSON. Key order in the output may vary between
//! writes; consumers must treat it as irrelevant. Decoding anything that
//! is not a mapping of string keys to settings values fails as malformed
//! data, never as a partial result.

use brokkr_core::{Error, Result, SettingsMap};

/// Encodes a settings mapping to its canonical byte form.
pub fn encode_settings(settings: &SettingsMap) -> Result<Vec<u8>> {
    serde_json::to_vec(settings).map_err(Error::MalformedData)
}

/// Decodes the canonical byte form back into a settings mapping.
pub fn decode_settings(bytes: &[u8]) -> Result<SettingsMap> {
    serde_json::from_slice(bytes).map_err(Error::MalformedData)
}
