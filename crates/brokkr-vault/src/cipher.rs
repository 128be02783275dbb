//! Authenticated encryption for compressed settings payloads.
//!
//! ChaCha20-Poly1305 under the store's master key. Every encryption uses
//! a fresh random 96-bit nonce, prepended to the ciphertext; nothing is
//! ever encrypted under a fixed IV. The AEAD rejects wrong keys and
//! tampered ciphertext outright, so a successful decrypt of garbage is
//! not possible; the integrity tag downstream still covers the
//! decompressed payload independently.

use brokkr_core::{Error, MasterKey, Result};
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::Rng;

/// Size of the nonce in bytes (96 bits for ChaCha20-Poly1305)
pub const NONCE_SIZE: usize = 12;

/// Seals and opens byte blobs under a fixed key.
pub struct SettingsCipher {
    cipher: ChaCha20Poly1305,
}

impl SettingsCipher {
    /// Creates a cipher from the store's master key.
    pub fn new(key: &MasterKey) -> Self {
        Self {
            cipher: ChaCha20Poly1305::new(Key::from_slice(key.as_bytes())),
        }
    }

    /// Encrypts `plaintext`, returning `nonce || ciphertext`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|_| Error::invalid_config("payload exceeds the cipher's size limit"))?;

        let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    /// Decrypts a `nonce || ciphertext` blob. Any rejection by the AEAD
    /// (wrong key, truncation, tampering) is a decryption failure.
    pub fn decrypt(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        if bytes.len() < NONCE_SIZE {
            return Err(Error::Decryption);
        }
        let (nonce_bytes, ciphertext) = bytes.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);
        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| Error::Decryption)
    }
}
