//! Backup entry naming and parsing.
//!
//! Backup files are named `<profile>_<unixTimestamp>.bak`. Files that do
//! not match the pattern for the profile being listed are ignored, so
//! unrelated files can share the backup directory. Timestamps have
//! seconds resolution; two backups landing in the same second overwrite
//! each other (last write wins).

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Extension of backup files
pub const BACKUP_EXT: &str = "bak";

/// One timestamped snapshot of a profile's on-disk blob.
///
/// Immutable once written; destroyed only by retention eviction or
/// explicit deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    /// Profile the snapshot belongs to
    pub profile: String,

    /// Creation time as a unix timestamp, seconds resolution
    pub timestamp: i64,

    /// Path of the backup file
    pub path: PathBuf,
}

impl BackupEntry {
    /// Returns the creation time as a UTC datetime, if the timestamp is
    /// representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Formats the backup file name for a profile at a timestamp.
pub fn backup_file_name(profile: &str, timestamp: i64) -> String {
    format!("{profile}_{timestamp}.{BACKUP_EXT}")
}

/// Parses a path as a backup of `profile`. Returns `None` for foreign
/// files, other profiles' backups, and malformed timestamps.
pub fn parse_backup_path(profile: &str, path: &Path) -> Option<BackupEntry> {
    if path.extension().and_then(|e| e.to_str()) != Some(BACKUP_EXT) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let (name, raw_timestamp) = stem.rsplit_once('_')?;
    if name != profile {
        return None;
    }
    let timestamp = raw_timestamp.parse::<i64>().ok()?;
    Some(BackupEntry {
        profile: name.to_string(),
        timestamp,
        path: path.to_path_buf(),
    })
}
