//! Preference repository adapters.
//!
//! [`KeyValueFileStore`] persists `key=value` lines in a plain text file.
//! [`MemoryPreferenceRepository`] keeps everything in memory and is used
//! by tests and throwaway sessions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::paths::preferences_path;
use crate::ports::{PreferenceError, PreferenceRepository};

/// A `key=value` file on disk.
///
/// Updating a key rewrites the file and keeps unrelated lines (including
/// comments) untouched; removing a key drops its line.
#[derive(Debug)]
pub struct KeyValueFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl KeyValueFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store backed by the preference file in the data directory.
    pub fn open_default() -> Result<Self, PreferenceError> {
        Ok(Self::new(preferences_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_lines(&self) -> Result<Vec<String>, PreferenceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(PreferenceError::Read {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    async fn write_lines(&self, mut lines: Vec<String>) -> Result<(), PreferenceError> {
        if lines.last().is_some_and(|last| !last.is_empty()) {
            lines.push(String::new());
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(&e))?;
        }
        tokio::fs::write(&self.path, lines.join("\n"))
            .await
            .map_err(|e| self.write_error(&e))
    }

    fn write_error(&self, e: &std::io::Error) -> PreferenceError {
        PreferenceError::Write {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

fn line_key(line: &str) -> Option<&str> {
    let (lhs, _) = line.split_once('=')?;
    let lhs = lhs.trim();
    (!lhs.starts_with('#')).then_some(lhs)
}

#[async_trait]
impl PreferenceRepository for KeyValueFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let lines = self.read_lines().await?;
        Ok(lines.iter().find_map(|line| {
            let (_, value) = line.split_once('=')?;
            (line_key(line) == Some(key)).then(|| value.trim().to_string())
        }))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        PreferenceError::check_single_line(key, value)?;
        let _guard = self.write_lock.lock().await;
        let lines = self.read_lines().await?;

        let mut updated = false;
        let mut output = Vec::with_capacity(lines.len() + 1);
        for line in lines {
            if line_key(&line) == Some(key) {
                if !updated {
                    output.push(format!("{key}={value}"));
                    updated = true;
                }
            } else {
                output.push(line);
            }
        }
        if !updated {
            while output.last().is_some_and(String::is_empty) {
                output.pop();
            }
            output.push(format!("{key}={value}"));
        }

        debug!(path = %self.path.display(), key, "Persisting preference");
        self.write_lines(output).await
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().await;
        let lines = self.read_lines().await?;
        let before = lines.len();
        let output: Vec<String> = lines
            .into_iter()
            .filter(|line| line_key(line) != Some(key))
            .collect();

        if output.len() == before {
            return Ok(());
        }
        debug!(path = %self.path.display(), key, "Removing preference");
        self.write_lines(output).await
    }
}

/// In-memory preference repository.
#[derive(Debug, Default)]
pub struct MemoryPreferenceRepository {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with initial values.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl PreferenceRepository for MemoryPreferenceRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.values.lock().await.remove(key);
        Ok(())
    }
}
