//! In-memory key-value store
//!
//! Drop-in substitute for the SQLite-backed store in tests and anywhere
//! persistence across restarts is not wanted. Single-threaded by design,
//! matching the run-to-completion execution model of the app.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// A non-durable key-value store backed by a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
