//! Key-value storage behind the board, registry, and user directory.
//!
//! Defines the [`Storage`] trait plus two implementations:
//! - [`MemoryStorage`] — in-memory map, used by tests and demos
//! - [`FileStorage`] — one JSON file per key under a data directory
//!
//! Reads and writes never fail observably. A missing or unreadable key
//! reads as `None`, a failed write is logged and swallowed, and the
//! caller continues with its in-memory state. Callers that need richer
//! behavior (decode errors, defaults) layer it on top.

mod file;

pub use file::FileStorage;

use std::collections::HashMap;

use parking_lot::Mutex;

/// String key-value store for serialized application state.
///
/// Implementations are shared across the board, the status registry,
/// and the user directory, so they must be safe to call from anywhere
/// the app lives.
pub trait Storage: Send + Sync {
    /// Returns the value under `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Deletes `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory [`Storage`] backed by a `HashMap`.
///
/// Not persistent; all data is lost when the process exits.
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}
