//! # brokkr-backup
//!
//! Timestamped snapshots of Brokkr profile blobs: creation, ordered
//! listing, retention pruning, recovery of the most recent snapshot, and
//! rename sweeps. Snapshots are raw blob copies; only recovery opens the
//! envelope, through the pipeline's read path.

pub mod entry;
pub mod manager;

pub use entry::{backup_file_name, parse_backup_path, BackupEntry, BACKUP_EXT};
pub use manager::BackupManager;
