//! Error types for the Brokkr settings crates

use std::path::Path;
use thiserror::Error;

/// Result type alias using brokkr-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the persistence pipeline and backup subsystem.
///
/// Every pipeline stage reports its own kind so callers can tell
/// "corrupted/tampered" apart from "wrong format" or "missing file".
/// Nothing is downgraded to a default value; recovery policy belongs to
/// the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// File operation failed at the OS level
    #[error("I/O failure on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Ciphertext rejected by the authenticated cipher (wrong key,
    /// truncation, or tampering)
    #[error("decryption failed: ciphertext rejected")]
    Decryption,

    /// Truncated or invalid compressed stream
    #[error("decompression failed: {source}")]
    Decompression {
        #[source]
        source: std::io::Error,
    },

    /// Digest mismatch or malformed tagged blob
    #[error("integrity check failed: digest mismatch")]
    Integrity,

    /// Decoded bytes are not a settings mapping
    #[error("malformed settings data: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// Backup requested for a profile with no live settings file
    #[error("no settings file to back up for profile '{profile}'")]
    SourceMissing { profile: String },

    /// Recovery requested with an empty backup set
    #[error("no backups available for profile '{profile}'")]
    NoBackupsAvailable { profile: String },

    /// Rename or create target already exists
    #[error("profile '{name}' already exists")]
    NameConflict { name: String },

    /// Profile name is empty or not usable as a file name
    #[error("invalid profile name: '{name}'")]
    InvalidName { name: String },

    /// Bad key material or store configuration
    #[error("invalid store configuration: {message}")]
    InvalidConfig { message: String },

    /// Prune or delete sweep finished, but some entries could not be removed
    #[error("backup sweep for profile '{profile}' incomplete: {failed} entries could not be removed")]
    BackupSweepIncomplete {
        profile: String,
        failed: usize,
        failures: Vec<String>,
    },

    /// Rename sweep finished, but some entries were left under the old name
    #[error("backup rename '{old}' -> '{new}' incomplete: {failed} entries could not be moved")]
    BackupRenameIncomplete {
        old: String,
        new: String,
        failed: usize,
        failures: Vec<String>,
    },
}

impl Error {
    /// Create an I/O error carrying the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a decompression error from the underlying stream error
    pub fn decompression(source: std::io::Error) -> Self {
        Self::Decompression { source }
    }

    /// Create a source missing error
    pub fn source_missing(profile: impl Into<String>) -> Self {
        Self::SourceMissing {
            profile: profile.into(),
        }
    }

    /// Create a no backups available error
    pub fn no_backups(profile: impl Into<String>) -> Self {
        Self::NoBackupsAvailable {
            profile: profile.into(),
        }
    }

    /// Create a name conflict error
    pub fn name_conflict(name: impl Into<String>) -> Self {
        Self::NameConflict { name: name.into() }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// True if this is an I/O failure caused by a missing file, e.g. a load
    /// of a profile that was never saved
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
