//! File-backed [`Storage`]: one JSON file per key under a data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Storage;

/// Persistent [`Storage`] writing each key to `<dir>/<key>.json`.
///
/// I/O failures are logged and swallowed so a broken disk degrades the
/// app to in-memory behavior instead of crashing it. A file that cannot
/// be read is treated the same as a missing one.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a store rooted at `dir`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The directory this store writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "storage read failed");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), error = %err, "storage dir creation failed");
            return;
        }
        let path = self.key_path(key);
        if let Err(err) = std::fs::write(&path, value) {
            tracing::warn!(path = %path.display(), error = %err, "storage write failed");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "storage remove failed");
            }
        }
    }
}
