//! Path utilities for the readmegen data directory.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod error;
mod platform;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::PathError;
pub use platform::{DATA_DIR_ENV, PREFERENCES_FILE_NAME, data_root, preferences_path};
