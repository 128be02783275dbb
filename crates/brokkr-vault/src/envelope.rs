//! The sealed envelope for one profile's settings.
//!
//! Write path: encode -> attach digest -> compress -> encrypt.
//! Read path: decrypt -> decompress -> verify digest -> decode.
//!
//! The stage order is fixed. Tagging precedes compression so the digest
//! covers the serialized content itself; compression precedes encryption
//! because encrypted bytes are incompressible. The read path stops at the
//! first failing stage and never yields a partial mapping.

use crate::cipher::SettingsCipher;
use crate::codec;
use crate::compression::{self, DEFAULT_COMPRESSION_LEVEL};
use crate::integrity;
use brokkr_core::{MasterKey, Result, SettingsMap};

/// Seals settings mappings into on-disk blobs and opens them back up.
pub struct EnvelopeCodec {
    cipher: SettingsCipher,
    compression_level: u32,
}

impl EnvelopeCodec {
    /// Creates a codec sealing under `key` at the default compression
    /// level.
    pub fn new(key: &MasterKey) -> Self {
        Self {
            cipher: SettingsCipher::new(key),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Sets the compression level (1-9).
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.clamp(1, 9);
        self
    }

    /// Runs the full write path, producing the persisted blob.
    pub fn seal(&self, settings: &SettingsMap) -> Result<Vec<u8>> {
        let encoded = codec::encode_settings(settings)?;
        let tagged = integrity::attach_digest(&encoded);
        let compressed = compression::compress_bytes(&tagged, self.compression_level)?;
        self.cipher.encrypt(&compressed)
    }

    /// Runs the full read path, reporting the first failing stage:
    /// decryption, then decompression, then integrity, then decoding.
    pub fn open(&self, blob: &[u8]) -> Result<SettingsMap> {
        let compressed = self.cipher.decrypt(blob)?;
        let tagged = compression::decompress_bytes(&compressed)?;
        let payload = integrity::split_and_verify(&tagged)?;
        codec::decode_settings(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brokkr_core::{Error, SettingValue};

    fn sample() -> SettingsMap {
        let mut display = SettingsMap::new();
        display.insert("fullscreen".to_string(), SettingValue::from(false));
        display.insert("scale".to_string(), SettingValue::from_f64(1.25).unwrap());

        let mut settings = SettingsMap::new();
        settings.insert("theme".to_string(), SettingValue::from("solarized"));
        settings.insert("retries".to_string(), SettingValue::from(3i64));
        settings.insert("display".to_string(), SettingValue::from(display));
        settings
    }

    #[test]
    fn test_seal_open_round_trip() {
        let codec = EnvelopeCodec::new(&MasterKey::from_bytes([1u8; 32]));
        let blob = codec.seal(&sample()).unwrap();
        assert_eq!(codec.open(&blob).unwrap(), sample());
    }

    #[test]
    fn test_empty_mapping_round_trip() {
        let codec = EnvelopeCodec::new(&MasterKey::from_bytes([1u8; 32]));
        let blob = codec.seal(&SettingsMap::new()).unwrap();
        assert_eq!(codec.open(&blob).unwrap(), SettingsMap::new());
    }

    #[test]
    fn test_wrong_key_fails_at_decryption() {
        let blob = EnvelopeCodec::new(&MasterKey::from_bytes([1u8; 32]))
            .seal(&sample())
            .unwrap();
        let other = EnvelopeCodec::new(&MasterKey::from_bytes([2u8; 32]));
        assert!(matches!(other.open(&blob).unwrap_err(), Error::Decryption));
    }

    #[test]
    fn test_any_single_byte_flip_fails() {
        let codec = EnvelopeCodec::new(&MasterKey::from_bytes([1u8; 32]));
        let blob = codec.seal(&sample()).unwrap();
        for i in 0..blob.len() {
            let mut tampered = blob.clone();
            tampered[i] ^= 0x01;
            assert!(
                codec.open(&tampered).is_err(),
                "flip at offset {i} went undetected"
            );
        }
    }

    #[test]
    fn test_compression_level_is_clamped() {
        let codec =
            EnvelopeCodec::new(&MasterKey::from_bytes([1u8; 32])).with_compression_level(99);
        let blob = codec.seal(&sample()).unwrap();
        assert_eq!(codec.open(&blob).unwrap(), sample());
    }
}
