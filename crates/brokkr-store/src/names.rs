//! Profile name validation.

use brokkr_core::{Error, Result};

/// Validates a profile name before any file-system use.
///
/// Names become file stems, so they must be non-empty, free of path
/// separators and control characters, and must not start with a dot.
pub fn validate_profile_name(name: &str) -> Result<()> {
    let usable = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains(char::is_control);
    if usable {
        Ok(())
    } else {
        Err(Error::invalid_name(name))
    }
}
