//! Key-value preference persistence
//!
//! Components that persist flags and blobs (style profile, last spin date,
//! saved outfits) receive an explicit store handle rather than reaching for
//! ambient global state, keeping the curation logic pure and testable.

use crate::io::error::{StyleError, store_error};
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Injected key-value persistence interface
///
/// Values are opaque strings; the JSON helpers layer typed access on top.
pub trait PreferenceStore {
    /// Read the value stored under a key
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under a key, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written
    fn set(&mut self, key: &str, value: String) -> crate::io::error::Result<()>;

    /// Delete the value stored under a key, if present
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written
    fn remove(&mut self, key: &str) -> crate::io::error::Result<()>;

    /// Read and parse a JSON value stored under a key
    ///
    /// # Errors
    ///
    /// Returns an error if the stored blob is not valid JSON for `T`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> crate::io::error::Result<Option<T>> {
        match self.get(key) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| store_error(key, e)),
            None => Ok(None),
        }
    }

    /// Serialize a value to JSON and store it under a key
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backing write fails
    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> crate::io::error::Result<()> {
        let raw = serde_json::to_string(value).map_err(|e| store_error(key, e))?;
        self.set(key, raw)
    }
}

/// Insertion-ordered in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> crate::io::error::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> crate::io::error::Result<()> {
        self.entries.shift_remove(key);
        Ok(())
    }
}

/// Write-through store backed by a single JSON object file
///
/// The whole entry map is rewritten on every mutation; entry counts here
/// are a handful of fixed keys, so the simple policy holds.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl JsonFileStore {
    /// Open a store file, creating an empty store if the file is missing
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but is not a valid JSON string map
    pub fn open<P: AsRef<Path>>(path: P) -> crate::io::error::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();

        if !path_buf.exists() {
            return Ok(Self {
                path: path_buf,
                entries: IndexMap::new(),
            });
        }

        let raw = fs::read_to_string(&path_buf).map_err(|e| StyleError::FileSystem {
            path: path_buf.clone(),
            operation: "read store",
            source: e,
        })?;
        let entries: IndexMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| store_error(path_buf.display().to_string(), e))?;

        Ok(Self {
            path: path_buf,
            entries,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> crate::io::error::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StyleError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| store_error(self.path.display().to_string(), e))?;
        fs::write(&self.path, raw).map_err(|e| StyleError::FileSystem {
            path: self.path.clone(),
            operation: "write store",
            source: e,
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> crate::io::error::Result<()> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> crate::io::error::Result<()> {
        if self.entries.shift_remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
