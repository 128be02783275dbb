//! The outward-facing profile store.
//!
//! Thin composition over the persistence pipeline and the backup
//! manager. The store owns its state and is passed by reference to
//! callers; there are no ambient singletons. Every operation runs on the
//! calling thread to completion, serialized per profile name behind a
//! mutex so concurrent saves and backups of the same profile cannot
//! interleave.

use crate::export;
use crate::names::validate_profile_name;
use brokkr_backup::{BackupEntry, BackupManager};
use brokkr_core::{Error, Result, SettingsMap, StoreConfig};
use brokkr_vault::{EnvelopeCodec, ProfileStorage};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Named-profile settings store with backup rotation.
pub struct ProfileStore {
    storage: ProfileStorage,
    backups: BackupManager,
    max_backups: usize,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ProfileStore {
    /// Opens a store, creating the storage and backup directories if
    /// they do not exist yet.
    pub fn open(config: StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.storage_dir).map_err(|e| Error::io(&config.storage_dir, e))?;
        fs::create_dir_all(&config.backup_dir).map_err(|e| Error::io(&config.backup_dir, e))?;

        let codec = EnvelopeCodec::new(&config.master_key);
        Ok(Self {
            storage: ProfileStorage::new(config.storage_dir, codec),
            backups: BackupManager::new(config.backup_dir),
            max_backups: config.max_backups,
            locks: Mutex::new(HashMap::new()),
        })
    }

    fn profile_lock(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(name.to_string()).or_default())
    }

    /// Seals and writes the profile's settings, creating the profile on
    /// first save.
    pub fn save(&self, name: &str, settings: &SettingsMap) -> Result<()> {
        validate_profile_name(name)?;
        let lock = self.profile_lock(name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.storage.write_profile(name, settings)
    }

    /// Loads the profile's settings. A profile that was never saved
    /// surfaces as an I/O failure with the not-found kind preserved;
    /// no default mapping is ever substituted.
    pub fn load(&self, name: &str) -> Result<SettingsMap> {
        validate_profile_name(name)?;
        let lock = self.profile_lock(name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.storage.read_profile(name)
    }

    /// Removes the profile's live file and its whole backup set. Once
    /// deleted, the profile is unrecoverable. Deleting a profile that
    /// does not exist is a no-op.
    pub fn delete(&self, name: &str) -> Result<()> {
        validate_profile_name(name)?;
        let lock = self.profile_lock(name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        match self.storage.remove_profile(name) {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
        let removed = self.backups.delete_backups(name)?;
        info!("deleted profile '{}' and {} backups", name, removed);
        Ok(())
    }

    /// Renames a profile and its backup set. The live-file rename happens
    /// first; if moving the backup set then fails part-way, the profile
    /// stays addressable under the new name and the aggregate error names
    /// the entries left behind, repairable via [`Self::list_backups`].
    pub fn rename(&self, old: &str, new: &str) -> Result<()> {
        validate_profile_name(old)?;
        validate_profile_name(new)?;
        if old == new {
            return Ok(());
        }

        // Lock both names in a fixed order
        let (first, second) = if old < new { (old, new) } else { (new, old) };
        let first_lock = self.profile_lock(first);
        let second_lock = self.profile_lock(second);
        let _first = first_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _second = second_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if self.storage.exists(new) {
            return Err(Error::name_conflict(new));
        }
        self.storage.rename_profile(old, new)?;
        info!("renamed profile '{}' to '{}'", old, new);
        self.backups.rename_backups(old, new)?;
        Ok(())
    }

    /// Snapshots the profile's live blob, then prunes the backup set to
    /// the configured retention cap.
    pub fn backup(&self, name: &str) -> Result<BackupEntry> {
        validate_profile_name(name)?;
        let lock = self.profile_lock(name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let entry = self.backups.create_backup(&self.storage, name)?;
        let pruned = self.backups.prune_backups(name, self.max_backups)?;
        if !pruned.is_empty() {
            debug!("evicted {} backups past the retention cap", pruned.len());
        }
        Ok(entry)
    }

    /// Decodes the most recent backup of the profile. The live file is
    /// left untouched; call [`Self::save`] with the result to make the
    /// recovered mapping active.
    pub fn recover(&self, name: &str) -> Result<SettingsMap> {
        validate_profile_name(name)?;
        let lock = self.profile_lock(name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.backups.recover_latest(&self.storage, name)
    }

    /// Lists the profile's backups, ascending by timestamp.
    pub fn list_backups(&self, name: &str) -> Result<Vec<BackupEntry>> {
        validate_profile_name(name)?;
        self.backups.list_backups(name)
    }

    /// True if the profile has a live file.
    pub fn exists(&self, name: &str) -> bool {
        self.storage.exists(name)
    }

    /// Lists the names of all stored profiles, sorted.
    pub fn list_profiles(&self) -> Result<Vec<String>> {
        self.storage.list_profiles()
    }

    /// Writes `settings` as a plain, unencrypted export file.
    pub fn export_plain(&self, settings: &SettingsMap, path: &Path) -> Result<()> {
        export::export_plain(settings, path)
    }

    /// Reads a plain export file back into a settings mapping.
    pub fn import_plain(&self, path: &Path) -> Result<SettingsMap> {
        export::import_plain(path)
    }
}
