//! Plain-text export and import.
//!
//! Export files are pretty-printed JSON with none of the envelope stages
//! applied: the human-portable interchange path between installations,
//! entirely distinct from encrypted live storage.

use brokkr_core::{Error, Result, SettingsMap};
use std::fs;
use std::path::Path;

/// Writes `settings` as plain JSON text at `path`.
pub fn export_plain(settings: &SettingsMap, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(settings).map_err(Error::MalformedData)?;
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// Reads a plain JSON export back into a settings mapping.
pub fn import_plain(path: &Path) -> Result<SettingsMap> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(Error::MalformedData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brokkr_core::SettingValue;
    use tempfile::TempDir;

    #[test]
    fn test_export_is_readable_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = SettingsMap::new();
        settings.insert("theme".to_string(), SettingValue::from("dark"));
        export_plain(&settings, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"theme\""));
        assert!(text.contains("\"dark\""));
    }

    #[test]
    fn test_import_missing_file_is_io_failure() {
        let err = import_plain(Path::new("/nonexistent/export.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_import_rejects_malformed_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = import_plain(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedData(_)));
    }
}
