//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "READMEGEN_DATA_DIR";

/// File holding the key/value preferences inside the data directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `READMEGEN_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/readmegen`)
///
/// The directory is created when missing.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("readmegen"),
    };

    if root.exists() {
        if !root.is_dir() {
            return Err(PathError::NotADirectory(root));
        }
    } else {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Location of the preferences file.
pub fn preferences_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(PREFERENCES_FILE_NAME))
}
