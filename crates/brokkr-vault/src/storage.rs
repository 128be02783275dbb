//! On-disk profile storage.
//!
//! The live blob for a profile lives at `<storage_dir>/<name>.json`. The
//! extension is nominal/legacy: once sealed, the content is the envelope
//! blob, not literal JSON. Writes land in a temporary file in the same
//! directory and are renamed into place, so an interrupted save never
//! leaves a truncated live file.

use crate::envelope::EnvelopeCodec;
use brokkr_core::{Error, Result, SettingsMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Extension of live profile files
pub const PROFILE_EXT: &str = "json";

/// Owns the storage directory and the envelope codec for one store.
pub struct ProfileStorage {
    storage_dir: PathBuf,
    codec: EnvelopeCodec,
}

impl ProfileStorage {
    /// Creates storage rooted at `storage_dir`. The directory is expected
    /// to exist; the store layer creates it at construction.
    pub fn new(storage_dir: impl Into<PathBuf>, codec: EnvelopeCodec) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            codec,
        }
    }

    /// Returns the storage directory.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Returns the canonical path of a profile's live file.
    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.storage_dir.join(format!("{name}.{PROFILE_EXT}"))
    }

    /// True if a live file exists for `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.profile_path(name).is_file()
    }

    /// Seals `settings` and atomically replaces the profile's live file.
    pub fn write_profile(&self, name: &str, settings: &SettingsMap) -> Result<()> {
        let blob = self.codec.seal(settings)?;
        let path = self.profile_path(name);

        let mut tmp =
            NamedTempFile::new_in(&self.storage_dir).map_err(|e| Error::io(&self.storage_dir, e))?;
        tmp.write_all(&blob).map_err(|e| Error::io(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| Error::io(&path, e.error))?;

        debug!("wrote profile '{}' ({} bytes)", name, blob.len());
        Ok(())
    }

    /// Reads and opens the profile's live file. A missing file surfaces as
    /// an I/O failure with the not-found kind preserved.
    pub fn read_profile(&self, name: &str) -> Result<SettingsMap> {
        self.read_blob(&self.profile_path(name))
    }

    /// Opens an arbitrary envelope blob file. Used by backup recovery,
    /// which shares this read path.
    pub fn read_blob(&self, path: &Path) -> Result<SettingsMap> {
        let blob = fs::read(path).map_err(|e| Error::io(path, e))?;
        self.codec.open(&blob)
    }

    /// Removes the profile's live file.
    pub fn remove_profile(&self, name: &str) -> Result<()> {
        let path = self.profile_path(name);
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))
    }

    /// Moves the live file from `old` to `new` without opening it.
    pub fn rename_profile(&self, old: &str, new: &str) -> Result<()> {
        let from = self.profile_path(old);
        let to = self.profile_path(new);
        fs::rename(&from, &to).map_err(|e| Error::io(&from, e))
    }

    /// Lists the names of all stored profiles, sorted. Foreign files in
    /// the storage directory are ignored.
    pub fn list_profiles(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let dir = match fs::read_dir(&self.storage_dir) {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(Error::io(&self.storage_dir, e)),
        };
        for entry in dir {
            let entry = entry.map_err(|e| Error::io(&self.storage_dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(PROFILE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
