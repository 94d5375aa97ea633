//! The board reconciler: keeps the grouped view, the canonical store,
//! and the status registry consistent across every mutation.
//!
//! `TaskBoard` holds the current columns (the grouped view plus the
//! ordered status sequence, one structure). The view is rebuilt from
//! the canonical store at load and mutated incrementally afterwards,
//! then re-validated by a full prune after every mutation other than
//! column creation.
//!
//! Every operation is a synchronous in-memory transformation followed
//! by one persist call. Failures are reported before any state changes:
//! either the view, the canonical store, and the registry all reflect
//! the operation, or none of them do.

use std::sync::Arc;

use taskdeck_model::ids::TaskId;
use taskdeck_model::project::Project;
use taskdeck_model::task::Task;

use super::BoardError;
use super::group::{self, Column, group_by_status};
use super::registry::StatusRegistry;
use crate::projects::ProjectStore;
use crate::storage::Storage;

/// The board state machine over an injected storage backend.
pub struct TaskBoard {
    store: ProjectStore,
    registry: StatusRegistry,
    /// Current columns, in status-sequence order.
    columns: Vec<Column>,
}

impl TaskBoard {
    /// Loads the board from storage.
    ///
    /// Flattens every project's tasks into columns using the persisted
    /// status order, appends any status a task uses that the registry
    /// does not know, prunes empty columns, and persists the pruned
    /// sequence.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let store = ProjectStore::new(Arc::clone(&storage));
        let registry = StatusRegistry::new(storage);

        let projects = store.load_all();
        let labels = registry.load();
        let mut board = Self {
            store,
            registry,
            columns: group_by_status(&projects, &labels),
        };
        board.finish_mutation();
        board
    }

    /// Current columns in render order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Current projects from the canonical store.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.store.load_all()
    }

    /// Adds a new project to the canonical store.
    ///
    /// A fresh project has no tasks, so the view and registry are
    /// untouched.
    pub fn add_project(&self, project: Project) {
        self.store.add_project(project);
    }

    /// Moves a task from one column position to another.
    ///
    /// The task is removed at `source_index`, its status field is set
    /// to `dest_status`, and it is inserted at `dest_index` in the
    /// destination column, clamped to the list's new length. The change
    /// propagates to the canonical store and the non-empty status
    /// sequence is re-derived and persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMove`] when the source position
    /// does not currently hold this task (stale view) or the
    /// destination column does not exist. Nothing changes on failure.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        source_status: &str,
        source_index: usize,
        dest_status: &str,
        dest_index: usize,
    ) -> Result<(), BoardError> {
        let Some(source_col) = self.columns.iter().position(|c| c.label == source_status) else {
            return Err(BoardError::InvalidMove(format!(
                "source column {source_status} does not exist"
            )));
        };
        match self.columns[source_col].tasks.get(source_index) {
            None => {
                return Err(BoardError::InvalidMove(format!(
                    "{source_status} has no task at index {source_index}"
                )));
            }
            Some(task) if &task.id != task_id => {
                return Err(BoardError::InvalidMove(format!(
                    "task at {source_status}[{source_index}] is no longer {task_id}"
                )));
            }
            Some(_) => {}
        }
        let Some(dest_col) = self.columns.iter().position(|c| c.label == dest_status) else {
            return Err(BoardError::InvalidMove(format!(
                "destination column {dest_status} does not exist"
            )));
        };

        // Validated; mutate a copy so a store failure leaves the view intact.
        let mut columns = self.columns.clone();
        let mut task = columns[source_col].tasks.remove(source_index);
        task.status = dest_status.to_string();
        let insert_at = dest_index.min(columns[dest_col].tasks.len());
        columns[dest_col].tasks.insert(insert_at, task.clone());

        let project_id = task.project_id.clone();
        self.store.upsert_task(&project_id, task)?;
        self.columns = columns;
        self.finish_mutation();
        Ok(())
    }

    /// Adds a task to the board, or applies an edit to an existing one.
    ///
    /// An existing task is removed from its current column first (its
    /// status may have changed) and appended to its status column; a
    /// status no column uses yet gets a new column at the end. The task
    /// propagates to the canonical store and the pruned status sequence
    /// is persisted.
    ///
    /// Calling this twice with the identical task value is equivalent
    /// to calling it once.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when no project matches the
    /// task's project id. Nothing changes on failure.
    pub fn upsert_task(&mut self, task: Task) -> Result<(), BoardError> {
        let mut columns = self.columns.clone();
        if let Some((ci, ti)) = group::find_task(&columns, &task.id) {
            columns[ci].tasks.remove(ti);
        }
        match columns.iter_mut().find(|c| c.label == task.status) {
            Some(column) => column.tasks.push(task.clone()),
            None => columns.push(Column {
                label: task.status.clone(),
                tasks: vec![task.clone()],
            }),
        }

        self.store.upsert_task(&task.project_id, task.clone())?;
        self.registry.ensure(&task.status);
        self.columns = columns;
        self.finish_mutation();
        Ok(())
    }

    /// Deletes a task from the board and the canonical store.
    ///
    /// Removal by id: a stale `status` field on the passed task still
    /// deletes it from whichever column currently holds it. Deleting an
    /// unknown task only re-persists current state.
    pub fn delete_task(&mut self, task: &Task) {
        let removed = self
            .columns
            .iter_mut()
            .find(|c| c.label == task.status)
            .is_some_and(|column| {
                let before = column.tasks.len();
                column.tasks.retain(|t| t.id != task.id);
                column.tasks.len() != before
            });
        if !removed {
            if let Some((ci, ti)) = group::find_task(&self.columns, &task.id) {
                self.columns[ci].tasks.remove(ti);
            }
        }

        self.store.remove_task(&task.id);
        self.finish_mutation();
    }

    /// Creates an empty column and registers its label.
    ///
    /// The new column is exempt from pruning until the next mutation
    /// other than column creation, so the user can populate it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyColumnLabel`] when the label trims to
    /// nothing, or [`BoardError::DuplicateColumn`] when a column with
    /// this exact label already exists. Nothing changes on failure.
    pub fn create_column(&mut self, label: &str) -> Result<(), BoardError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(BoardError::EmptyColumnLabel);
        }
        if self.columns.iter().any(|c| c.label == label) {
            return Err(BoardError::DuplicateColumn(label.to_string()));
        }
        self.columns.push(Column::empty(label));
        self.registry.ensure(label);
        Ok(())
    }

    /// Drops empty columns and persists the surviving label sequence.
    fn finish_mutation(&mut self) {
        self.columns.retain(|c| !c.tasks.is_empty());
        self.registry.prune_to_non_empty(&self.columns);
    }
}
