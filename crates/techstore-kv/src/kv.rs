//! Key-Value store with automatic serialization.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::KvError;

/// Key/value store backed by one JSON file per record.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Writes go through a temporary file
/// and a rename, so an interrupted write never corrupts an existing record.
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open a store rooted at the given directory, creating it if needed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = KvStore::open("~/.local/share/techstore")?;
    /// ```
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, KvError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| KvError::Open {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        let path = self.record_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(KvError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let path = self.record_path(key)?;
        let bytes = serde_json::to_vec_pretty(value)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(|source| KvError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| KvError::Io {
            key: key.to_string(),
            source,
        })
    }

    /// Delete a value from the store. Deleting a missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), KvError> {
        let path = self.record_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(KvError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.record_path(key)?.exists())
    }

    /// List all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, KvError> {
        let entries = fs::read_dir(&self.root).map_err(|source| KvError::Open {
            path: self.root.display().to_string(),
            source,
        })?;

        let mut keys = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |e| e == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Directory this store reads and writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, KvError> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}
