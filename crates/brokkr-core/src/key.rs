//! Master key loading and handling.
//!
//! The key is per-store configuration supplied at construction; it is
//! never a process-wide constant. Accepted sources: raw bytes, base64
//! text, an environment variable, or a key file holding the base64 form.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::Rng;
use std::fmt;
use std::path::Path;
use zeroize::Zeroizing;

/// Size of the cipher key in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// The 256-bit key that seals and opens a store's profile envelopes.
///
/// Key material is zeroized on drop and redacted from `Debug` output.
#[derive(Clone)]
pub struct MasterKey {
    bytes: Zeroizing<[u8; KEY_SIZE]>,
}

impl MasterKey {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
        rand::rng().fill_bytes(bytes.as_mut());
        Self { bytes }
    }

    /// Create a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Parse a key from its base64 form.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let decoded = Zeroizing::new(
            BASE64
                .decode(encoded.trim())
                .map_err(|e| Error::invalid_config(format!("key is not valid base64: {e}")))?,
        );
        let bytes: [u8; KEY_SIZE] = decoded.as_slice().try_into().map_err(|_| {
            Error::invalid_config(format!(
                "key must decode to exactly {KEY_SIZE} bytes, got {}",
                decoded.len()
            ))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Load a key from an environment variable containing the base64 form.
    pub fn from_env(var: &str) -> Result<Self> {
        let encoded = std::env::var(var)
            .map_err(|_| Error::invalid_config(format!("environment variable {var} not set")))?;
        Self::from_base64(&encoded)
    }

    /// Load a key from a file containing the base64 form.
    pub fn from_key_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_base64(&content)
    }

    /// Returns the base64 form, suitable for a key file.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.bytes.as_ref())
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        let key = MasterKey::generate();
        let restored = MasterKey::from_base64(&key.to_base64()).unwrap();
        assert_eq!(key.as_bytes(), restored.as_bytes());
    }

    #[test]
    fn test_from_base64_rejects_wrong_length() {
        let err = MasterKey::from_base64(&BASE64.encode([0u8; 16])).unwrap_err();
        assert!(err.to_string().contains("32 bytes"));
    }

    #[test]
    fn test_from_base64_rejects_garbage() {
        assert!(MasterKey::from_base64("not base64 at all!").is_err());
    }

    #[test]
    fn test_from_key_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("master.key");
        let key = MasterKey::generate();
        std::fs::write(&path, format!("{}\n", key.to_base64())).unwrap();

        let restored = MasterKey::from_key_file(&path).unwrap();
        assert_eq!(key.as_bytes(), restored.as_bytes());
    }

    #[test]
    fn test_missing_key_file_is_io_failure() {
        let err = MasterKey::from_key_file(Path::new("/nonexistent/master.key")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = MasterKey::from_bytes([7u8; KEY_SIZE]);
        assert_eq!(format!("{key:?}"), "MasterKey(..)");
    }

    #[test]
    fn test_generate_is_random() {
        assert_ne!(
            MasterKey::generate().as_bytes(),
            MasterKey::generate().as_bytes()
        );
    }
}
