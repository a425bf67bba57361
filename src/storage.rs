//! Client-side settings persistence
//!
//! The theme resolver stores exactly one key ("theme", the selected theme's
//! name). The store is abstracted behind [`SettingsStore`] so the same
//! resolver works against a settings file on disk or an in-memory map in
//! tests, mirroring how a browser build would back it with localStorage.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Storage key for the selected theme name
pub const THEME_KEY: &str = "theme";

/// Synchronous string key-value persistence
pub trait SettingsStore {
    /// Read a value; `None` when the key has never been written
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value. Writes are synchronous; when this returns Ok the
    /// value is durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and reload simulation
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk TOML settings document
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDoc {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

/// File-backed store: one small TOML file of string keys, rewritten whole
/// on every set
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or create) the settings file at `path`. A missing file is an
    /// empty store; a malformed file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading settings file {}", path.display()))?;
            let doc: SettingsDoc = toml::from_str(&raw)
                .with_context(|| format!("parsing settings file {}", path.display()))?;
            doc.values
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating settings dir {}", parent.display()))?;
        }
        let doc = SettingsDoc {
            values: self.values.clone(),
        };
        let raw = toml::to_string_pretty(&doc).context("serializing settings")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("writing settings file {}", self.path.display()))?;
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "modern-business").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("modern-business"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "trustworthy-professional").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(THEME_KEY).as_deref(),
            Some("trustworthy-professional")
        );
    }

    #[test]
    fn file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "modern-business").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(FileStore::open(&path).is_err());
    }
}
