//! The task record and its construction rules.
//!
//! A task always belongs to exactly one project and carries a free-form
//! status label. Status is not an enum: any non-empty string is a valid
//! column name, and new columns come into existence the moment a task
//! uses them. Serialized field names (`projectId`, `dueDate`,
//! `assignedUser`) match the stored JSON shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ValidationError;
use crate::ids::{ProjectId, TaskId};

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, stable across moves and edits.
    pub id: TaskId,
    /// The project that owns this task.
    #[serde(rename = "projectId")]
    pub project_id: ProjectId,
    /// Short task name.
    pub name: String,
    /// Longer free-form description.
    pub description: String,
    /// Status column label. Always non-empty; free-form, not an enum.
    pub status: String,
    /// Tags, unique within the task, in insertion order.
    pub tags: Vec<String>,
    /// Optional due date.
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Display name of the user the task is assigned to.
    #[serde(rename = "assignedUser")]
    pub assigned_user: String,
}

impl Task {
    /// Creates a new task with a fresh random id.
    ///
    /// The name, status, and assigned user are trimmed and must be
    /// non-empty. Tags are deduplicated preserving first occurrence;
    /// empty tags are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`],
    /// [`ValidationError::StatusRequired`], or
    /// [`ValidationError::AssignedUserRequired`] when the corresponding
    /// field is empty after trimming.
    pub fn new(
        project_id: ProjectId,
        name: &str,
        description: &str,
        status: &str,
        tags: Vec<String>,
        due_date: Option<NaiveDate>,
        assigned_user: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let status = status.trim();
        if status.is_empty() {
            return Err(ValidationError::StatusRequired);
        }
        let assigned_user = assigned_user.trim();
        if assigned_user.is_empty() {
            return Err(ValidationError::AssignedUserRequired);
        }

        Ok(Self {
            id: TaskId::new(),
            project_id,
            name: name.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            tags: dedup_tags(tags),
            due_date,
            assigned_user: assigned_user.to_string(),
        })
    }
}

/// Parses a comma-separated tag list into individual trimmed tags.
///
/// Duplicates keep their first occurrence; empty entries are dropped.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    dedup_tags(input.split(',').map(str::trim).map(String::from).collect())
}

/// Parses a `YYYY-MM-DD` due date string. Empty input means no due date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDueDate`] if the trimmed input is
/// non-empty and not a valid ISO calendar date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDueDate(input.to_string()))
}

/// Removes duplicate and empty tags, preserving first-occurrence order.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}
