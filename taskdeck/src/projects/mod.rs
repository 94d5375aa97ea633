//! The canonical project store.
//!
//! Per-project task lists are the single source of truth for task
//! existence and field values. The whole collection is serialized under
//! one storage key and every mutation is a full read-modify-write cycle
//! through [`Storage`]; there is no partial or merge persistence.

use std::sync::Arc;

use thiserror::Error;

use taskdeck_model::codec;
use taskdeck_model::ids::{ProjectId, TaskId};
use taskdeck_model::project::Project;
use taskdeck_model::task::Task;

use crate::storage::Storage;

/// Storage key holding the serialized project collection.
pub const PROJECTS_KEY: &str = "projects";

/// Errors that can occur during project store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No project with the given ID exists.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
}

/// Store for the project collection, backed by injected [`Storage`].
///
/// All project and task reads and writes go through these methods;
/// nothing else touches the `projects` key.
pub struct ProjectStore {
    storage: Arc<dyn Storage>,
}

impl ProjectStore {
    /// Creates a store over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Loads the full project sequence.
    ///
    /// An absent key yields an empty sequence. So does a malformed
    /// value: unreadable state is logged and treated as absent, never
    /// as a fatal error.
    #[must_use]
    pub fn load_all(&self) -> Vec<Project> {
        let Some(raw) = self.storage.get(PROJECTS_KEY) else {
            return Vec::new();
        };
        match codec::decode(&raw) {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(error = %err, "stored projects unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Persists the full project sequence, replacing prior content.
    pub fn save_all(&self, projects: &[Project]) {
        match codec::encode(&projects) {
            Ok(json) => self.storage.set(PROJECTS_KEY, &json),
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode projects, skipping persist");
            }
        }
    }

    /// Appends a new project and persists.
    pub fn add_project(&self, project: Project) {
        let mut projects = self.load_all();
        projects.push(project);
        self.save_all(&projects);
    }

    /// Inserts or replaces a task within the project that owns it.
    ///
    /// If the project already holds a task with the same id, that task
    /// is replaced in place; otherwise the task is appended to the
    /// project's list. Nothing is persisted when the project is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] if no project matches
    /// `project_id`.
    pub fn upsert_task(&self, project_id: &ProjectId, task: Task) -> Result<(), StoreError> {
        let mut projects = self.load_all();
        let Some(project) = projects.iter_mut().find(|p| &p.id == project_id) else {
            return Err(StoreError::ProjectNotFound(project_id.clone()));
        };
        match project.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => project.tasks.push(task),
        }
        self.save_all(&projects);
        Ok(())
    }

    /// Removes a task from whichever project currently holds it.
    ///
    /// A no-op (beyond the persist) when no project holds the task.
    pub fn remove_task(&self, task_id: &TaskId) {
        let mut projects = self.load_all();
        for project in &mut projects {
            project.tasks.retain(|t| &t.id != task_id);
        }
        self.save_all(&projects);
    }
}
