//! In-memory key-value store
//!
//! Drop-in substitute for [`LocalStore`](super::LocalStore) in tests and
//! embedded use. Can be constructed as permanently unavailable to exercise
//! the degraded code paths of the repositories.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::result::Result;
use crate::ports::KeyValueStore;

/// Mutex-guarded map implementing the storage port
#[derive(Debug)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    available: bool,
}

impl MemoryStore {
    /// An empty, available store
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            available: true,
        }
    }

    /// A store that reports itself unavailable
    ///
    /// Mirrors local storage outside a browser context: reads return
    /// nothing and repository mutations become no-ops.
    pub fn unavailable() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            available: false,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        self.values.lock().expect("store mutex poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.available {
            return Ok(());
        }
        self.values
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.available {
            return Ok(());
        }
        self.values.lock().expect("store mutex poisoned").remove(key);
        Ok(())
    }
}
