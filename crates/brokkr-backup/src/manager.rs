//! Backup creation, rotation, and recovery.
//!
//! The manager works on raw envelope blobs: snapshots are byte-for-byte
//! copies of the live file, never opened while copying. Only recovery
//! runs the pipeline's read path, through the storage it is given.
//!
//! Sweeps (prune, delete, rename) are best-effort: a failure on one
//! entry is logged and the sweep continues, and an aggregate error is
//! returned after the sweep if anything failed.

use crate::entry::{backup_file_name, parse_backup_path, BackupEntry};
use brokkr_core::{Error, Result, SettingsMap};
use brokkr_vault::ProfileStorage;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Manages the timestamped backup set for each profile name.
pub struct BackupManager {
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Creates a manager rooted at `backup_dir`. The directory is
    /// expected to exist; the store layer creates it at construction.
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
        }
    }

    /// Returns the backup directory.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Snapshots the live blob for `profile` under the current timestamp.
    /// Fails with `SourceMissing` if the profile has no live file yet.
    pub fn create_backup(&self, storage: &ProfileStorage, profile: &str) -> Result<BackupEntry> {
        let source = storage.profile_path(profile);
        if !source.is_file() {
            return Err(Error::source_missing(profile));
        }

        let timestamp = Utc::now().timestamp();
        let dest = self.backup_dir.join(backup_file_name(profile, timestamp));
        fs::copy(&source, &dest).map_err(|e| Error::io(&dest, e))?;

        info!("created backup {} for profile '{}'", dest.display(), profile);
        Ok(BackupEntry {
            profile: profile.to_string(),
            timestamp,
            path: dest,
        })
    }

    /// Lists the backup set for `profile`, ascending by timestamp (path
    /// as tie-break). Files not matching the backup pattern are ignored.
    pub fn list_backups(&self, profile: &str) -> Result<Vec<BackupEntry>> {
        let mut entries = Vec::new();
        let dir = match fs::read_dir(&self.backup_dir) {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(Error::io(&self.backup_dir, e)),
        };
        for item in dir {
            let item = item.map_err(|e| Error::io(&self.backup_dir, e))?;
            if let Some(entry) = parse_backup_path(profile, &item.path()) {
                entries.push(entry);
            }
        }
        entries.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.path.cmp(&b.path))
        });
        Ok(entries)
    }

    /// Removes the oldest entries until at most `max` remain, returning
    /// the entries that were removed.
    pub fn prune_backups(&self, profile: &str, max: usize) -> Result<Vec<BackupEntry>> {
        let entries = self.list_backups(profile)?;
        if entries.len() <= max {
            return Ok(Vec::new());
        }

        let excess = entries.len() - max;
        let mut removed = Vec::with_capacity(excess);
        let mut failures = Vec::new();
        for entry in entries.into_iter().take(excess) {
            match fs::remove_file(&entry.path) {
                Ok(()) => {
                    debug!("pruned backup {}", entry.path.display());
                    removed.push(entry);
                }
                Err(e) => {
                    warn!("failed to prune backup {}: {}", entry.path.display(), e);
                    failures.push(entry.path.display().to_string());
                }
            }
        }

        if failures.is_empty() {
            Ok(removed)
        } else {
            Err(Error::BackupSweepIncomplete {
                profile: profile.to_string(),
                failed: failures.len(),
                failures,
            })
        }
    }

    /// Opens the highest-timestamp backup through the pipeline's read
    /// path. The live file is not touched; re-saving the recovered
    /// mapping is the caller's decision.
    pub fn recover_latest(&self, storage: &ProfileStorage, profile: &str) -> Result<SettingsMap> {
        let entries = self.list_backups(profile)?;
        let latest = entries.last().ok_or_else(|| Error::no_backups(profile))?;
        info!(
            "recovering profile '{}' from {}",
            profile,
            latest.path.display()
        );
        storage.read_blob(&latest.path)
    }

    /// Moves every backup of `old` to the equivalent name under `new`,
    /// preserving timestamp suffixes. Entries that fail to move are left
    /// in place and reported in the aggregate error; the sweep itself
    /// always runs to completion.
    pub fn rename_backups(&self, old: &str, new: &str) -> Result<usize> {
        let entries = self.list_backups(old)?;
        let mut renamed = 0usize;
        let mut failures = Vec::new();
        for entry in &entries {
            let dest = self.backup_dir.join(backup_file_name(new, entry.timestamp));
            match fs::rename(&entry.path, &dest) {
                Ok(()) => renamed += 1,
                Err(e) => {
                    warn!("failed to move backup {}: {}", entry.path.display(), e);
                    failures.push(entry.path.display().to_string());
                }
            }
        }

        if failures.is_empty() {
            debug!("moved {} backups from '{}' to '{}'", renamed, old, new);
            Ok(renamed)
        } else {
            Err(Error::BackupRenameIncomplete {
                old: old.to_string(),
                new: new.to_string(),
                failed: failures.len(),
                failures,
            })
        }
    }

    /// Removes every backup of `profile`, returning how many were
    /// removed. Same sweep contract as pruning.
    pub fn delete_backups(&self, profile: &str) -> Result<usize> {
        let entries = self.list_backups(profile)?;
        let mut removed = 0usize;
        let mut failures = Vec::new();
        for entry in &entries {
            match fs::remove_file(&entry.path) {
                Ok(()) => removed += 1,
                Err(e) => {
                    warn!("failed to remove backup {}: {}", entry.path.display(), e);
                    failures.push(entry.path.display().to_string());
                }
            }
        }

        if failures.is_empty() {
            Ok(removed)
        } else {
            Err(Error::BackupSweepIncomplete {
                profile: profile.to_string(),
                failed: failures.len(),
                failures,
            })
        }
    }
}
