//! Pure grouping functions deriving the board view from canonical state.
//!
//! Nothing here touches storage. [`group_by_status`] is the one place
//! that turns per-project task lists into columns, so the mapping from
//! canonical state to view is a single auditable function rather than
//! logic scattered across the UI.

use taskdeck_model::ids::TaskId;
use taskdeck_model::project::Project;
use taskdeck_model::task::Task;

/// One board column: a status label and the tasks currently under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Status label shared by every task in this column.
    pub label: String,
    /// Tasks in render order.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with the given label.
    #[must_use]
    pub fn empty(label: &str) -> Self {
        Self {
            label: label.to_string(),
            tasks: Vec::new(),
        }
    }
}

/// Partitions every project's tasks into columns.
///
/// Column order follows `label_order` first (labels without tasks yield
/// empty columns), then any status used by a task but missing from
/// `label_order` is appended in first-appearance order. Tasks within a
/// column keep the flattened project-list order.
#[must_use]
pub fn group_by_status(projects: &[Project], label_order: &[String]) -> Vec<Column> {
    let mut columns: Vec<Column> = label_order.iter().map(|l| Column::empty(l)).collect();
    for task in projects.iter().flat_map(|p| &p.tasks) {
        match columns.iter_mut().find(|c| c.label == task.status) {
            Some(column) => column.tasks.push(task.clone()),
            None => columns.push(Column {
                label: task.status.clone(),
                tasks: vec![task.clone()],
            }),
        }
    }
    columns
}

/// Returns the labels of columns that hold at least one task,
/// preserving column order.
#[must_use]
pub fn non_empty_labels(columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .filter(|c| !c.tasks.is_empty())
        .map(|c| c.label.clone())
        .collect()
}

/// Locates a task in the view, returning `(column index, task index)`.
#[must_use]
pub fn find_task(columns: &[Column], id: &TaskId) -> Option<(usize, usize)> {
    columns.iter().enumerate().find_map(|(ci, column)| {
        column
            .tasks
            .iter()
            .position(|t| &t.id == id)
            .map(|ti| (ci, ti))
    })
}
