//! Key/value stores backing the session and legacy token lookups.
//!
//! Two tiers mirror a browser: a volatile store that lives as long as the
//! process, and a persistent store written to disk.

pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::ClientResult;

use std::{path::Path, sync::Arc};

/// String key/value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> ClientResult<()>;

    fn remove(&self, key: &str) -> ClientResult<()>;

    /// All keys, in a stable order
    fn keys(&self) -> Vec<String>;
}

/// Volatile plus persistent storage, consulted in that order
#[derive(Clone)]
pub struct BrowserStorage {
    pub volatile: Arc<dyn KeyValueStore>,
    pub persistent: Arc<dyn KeyValueStore>,
}

impl BrowserStorage {
    pub fn new(volatile: Arc<dyn KeyValueStore>, persistent: Arc<dyn KeyValueStore>) -> Self {
        Self {
            volatile,
            persistent,
        }
    }

    /// Both tiers in memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    /// In-memory volatile tier, file-backed persistent tier
    pub fn with_file(path: &Path) -> ClientResult<Self> {
        Ok(Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(FileStore::open(path)?),
        ))
    }

    /// Tiers in lookup order
    pub fn tiers(&self) -> [&dyn KeyValueStore; 2] {
        [self.volatile.as_ref(), self.persistent.as_ref()]
    }
}

impl std::fmt::Debug for BrowserStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserStorage")
            .field("volatile_keys", &self.volatile.keys())
            .field("persistent_keys", &self.persistent.keys())
            .finish()
    }
}
