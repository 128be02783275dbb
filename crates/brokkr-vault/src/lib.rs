//! # brokkr-vault
//!
//! The persistence pipeline for Brokkr settings profiles. A profile's
//! mapping is serialized, tagged with an integrity digest, compressed,
//! and encrypted into a single on-disk blob; reading reverses the stages
//! and reports the first failure distinctly (decryption, decompression,
//! integrity, decoding).

pub mod cipher;
pub mod codec;
pub mod compression;
pub mod envelope;
pub mod integrity;
pub mod storage;

pub use cipher::{SettingsCipher, NONCE_SIZE};
pub use compression::DEFAULT_COMPRESSION_LEVEL;
pub use envelope::EnvelopeCodec;
pub use integrity::DIGEST_SIZE;
pub use storage::{ProfileStorage, PROFILE_EXT};
