//! Store configuration.

use crate::error::{Error, Result};
use crate::key::MasterKey;
use std::path::PathBuf;

/// Default retention cap: backups kept per profile name
pub const DEFAULT_MAX_BACKUPS: usize = 5;

/// Configuration for a profile store.
///
/// Built explicitly and passed to the store at construction; there is no
/// ambient global configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the live profile files
    pub storage_dir: PathBuf,

    /// Directory holding timestamped backup files
    pub backup_dir: PathBuf,

    /// Retention cap applied after each backup
    pub max_backups: usize,

    /// Key sealing this store's envelopes
    pub master_key: MasterKey,
}

impl StoreConfig {
    /// Creates a configuration with the default retention cap.
    pub fn new(
        storage_dir: impl Into<PathBuf>,
        backup_dir: impl Into<PathBuf>,
        master_key: MasterKey,
    ) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            backup_dir: backup_dir.into(),
            max_backups: DEFAULT_MAX_BACKUPS,
            master_key,
        }
    }

    /// Creates a configuration rooted in the platform configuration
    /// directory for `app_name`: `<config dir>/profiles` and
    /// `<config dir>/backups`.
    pub fn for_app(app_name: &str, master_key: MasterKey) -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", app_name).ok_or_else(|| {
            Error::invalid_config("could not determine a configuration directory")
        })?;
        let base = dirs.config_dir();
        Ok(Self::new(
            base.join("profiles"),
            base.join("backups"),
            master_key,
        ))
    }

    /// Sets the retention cap.
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = max_backups;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retention() {
        let config = StoreConfig::new("/tmp/p", "/tmp/b", MasterKey::generate());
        assert_eq!(config.max_backups, DEFAULT_MAX_BACKUPS);
    }

    #[test]
    fn test_with_max_backups() {
        let config =
            StoreConfig::new("/tmp/p", "/tmp/b", MasterKey::generate()).with_max_backups(9);
        assert_eq!(config.max_backups, 9);
    }

    #[test]
    fn test_for_app_separates_profiles_and_backups() {
        let config = StoreConfig::for_app("brokkr-test", MasterKey::generate()).unwrap();
        assert!(config.storage_dir.ends_with("profiles"));
        assert!(config.backup_dir.ends_with("backups"));
        assert_ne!(config.storage_dir, config.backup_dir);
    }
}
