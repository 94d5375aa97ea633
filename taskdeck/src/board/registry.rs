//! The persisted status registry.
//!
//! Status labels are free-form, not a closed enum: a user can type any
//! status when editing a task. The registry exists to give columns a
//! stable left-to-right order and to let a user pre-create an empty
//! column before any task uses it.

use std::sync::Arc;

use taskdeck_model::codec;

use crate::board::group::{Column, non_empty_labels};
use crate::storage::Storage;

/// Storage key holding the serialized status sequence.
pub const STATUSES_KEY: &str = "statuses";

/// Store for the ordered status label sequence, backed by injected
/// [`Storage`].
pub struct StatusRegistry {
    storage: Arc<dyn Storage>,
}

impl StatusRegistry {
    /// Creates a registry over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Loads the ordered sequence of distinct status labels.
    ///
    /// Duplicates in stored state keep their first occurrence. An
    /// absent or malformed value yields an empty sequence, never an
    /// error.
    #[must_use]
    pub fn load(&self) -> Vec<String> {
        let Some(raw) = self.storage.get(STATUSES_KEY) else {
            return Vec::new();
        };
        let labels: Vec<String> = match codec::decode(&raw) {
            Ok(labels) => labels,
            Err(err) => {
                tracing::warn!(error = %err, "stored statuses unreadable, starting empty");
                return Vec::new();
            }
        };
        let mut distinct = Vec::with_capacity(labels.len());
        for label in labels {
            if !distinct.contains(&label) {
                distinct.push(label);
            }
        }
        distinct
    }

    /// Appends `label` to the persisted sequence if not already present.
    ///
    /// Idempotent: ensuring an existing label changes nothing.
    pub fn ensure(&self, label: &str) {
        let mut labels = self.load();
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
            self.save(&labels);
        }
    }

    /// Persists `labels` as the new registry state.
    pub fn save(&self, labels: &[String]) {
        match codec::encode(&labels) {
            Ok(json) => self.storage.set(STATUSES_KEY, &json),
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode statuses, skipping persist");
            }
        }
    }

    /// Drops labels whose columns hold no tasks, preserving relative
    /// order. Persists the pruned sequence and returns it.
    pub fn prune_to_non_empty(&self, columns: &[Column]) -> Vec<String> {
        let labels = non_empty_labels(columns);
        self.save(&labels);
        labels
    }
}
