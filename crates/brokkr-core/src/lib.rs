//! # brokkr-core
//!
//! Core library for the Brokkr settings store providing:
//! - The settings value model (closed tagged variants)
//! - The shared error taxonomy
//! - Master-key loading and store configuration

pub mod config;
pub mod error;
pub mod key;
pub mod value;

pub use config::{StoreConfig, DEFAULT_MAX_BACKUPS};
pub use error::{Error, Result};
pub use key::{MasterKey, KEY_SIZE};
pub use value::{SettingValue, SettingsMap, ValueKind};
