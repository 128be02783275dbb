//! # brokkr-store
//!
//! The outward-facing settings store for Brokkr. Composes the
//! persistence pipeline (brokkr-vault) with backup rotation
//! (brokkr-backup) behind one handle: save, load, delete, rename,
//! backup, recover, and plain export/import of named profiles.
//!
//! # Examples
//!
//! ```no_run
//! use brokkr_core::{MasterKey, SettingValue, SettingsMap, StoreConfig};
//! use brokkr_store::ProfileStore;
//!
//! fn main() -> brokkr_core::Result<()> {
//!     let key = MasterKey::from_env("BROKKR_MASTER_KEY")?;
//!     let store = ProfileStore::open(StoreConfig::for_app("brokkr", key)?)?;
//!
//!     let mut settings = SettingsMap::new();
//!     settings.insert("theme".to_string(), SettingValue::from("dark"));
//!     store.save("default", &settings)?;
//!
//!     store.backup("default")?;
//!     let restored = store.load("default")?;
//!     assert_eq!(restored, settings);
//!     Ok(())
//! }
//! ```

pub mod export;
pub mod names;
pub mod store;

// Re-export commonly used types
pub use brokkr_backup::BackupEntry;
pub use brokkr_core::{
    Error, MasterKey, Result, SettingValue, SettingsMap, StoreConfig, ValueKind,
};
pub use export::{export_plain, import_plain};
pub use names::validate_profile_name;
pub use store::ProfileStore;
