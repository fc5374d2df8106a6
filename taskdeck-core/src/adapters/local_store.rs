//! File-backed key-value store
//!
//! The local filesystem analog of browser local storage: one file per key
//! under a `store/` directory. Reads that fail for any reason look like
//! missing keys; availability means the backing directory can be created.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStore;

/// Key-value store persisting each key as a file in a directory
#[derive(Debug)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `dir`
    ///
    /// The directory is created lazily on first write; construction never
    /// touches the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are dot-namespaced identifiers ("task-manager.tasks"), safe
        // to use directly as file names.
        self.dir.join(key)
    }
}

impl KeyValueStore for LocalStore {
    fn is_available(&self) -> bool {
        fs::create_dir_all(&self.dir).is_ok()
    }

    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::storage(format!("cannot create {}: {e}", self.dir.display())))?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Convenience constructor for the conventional `store/` subdirectory
pub fn store_dir(taskdeck_dir: &Path) -> PathBuf {
    taskdeck_dir.join("store")
}
