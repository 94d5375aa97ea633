//! The project record: a named container owning an ordered task list.
//!
//! The per-project `tasks` vector is the canonical task order. Board
//! columns are derived from these lists; they are never stored.

use serde::{Deserialize, Serialize};

use crate::ValidationError;
use crate::ids::ProjectId;
use crate::task::Task;

/// A project and the tasks it owns, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Project name. Always non-empty.
    pub name: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tasks owned by this project, in canonical order.
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates a new empty project with a fresh random id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`] when the name is empty
    /// after trimming.
    pub fn new(name: &str, description: Option<String>) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(Self {
            id: ProjectId::new(),
            name: name.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            tasks: Vec::new(),
        })
    }

    /// Looks up a task owned by this project.
    #[must_use]
    pub fn task(&self, id: &crate::ids::TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }
}
