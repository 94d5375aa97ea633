//! Property-based tests for status grouping and board consistency.
//!
//! Uses proptest to verify, for arbitrary task/status layouts:
//! 1. Grouping places every task in exactly one column.
//! 2. Registered labels keep their order; unknown statuses append after.
//! 3. Pruning keeps exactly the non-empty labels, in order.
//! 4. A board fed random upserts never ends up with empty columns or a
//!    status sequence that disagrees with its columns.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use proptest::prelude::*;

use taskdeck::board::group::non_empty_labels;
use taskdeck::board::{STATUSES_KEY, TaskBoard, group_by_status};
use taskdeck::storage::{MemoryStorage, Storage};
use taskdeck_model::project::Project;
use taskdeck_model::task::Task;

/// Status alphabet the generators draw from.
const STATUSES: [&str; 5] = ["Todo", "Doing", "Done", "Review", "Blocked"];

/// Strategy for one task status.
fn arb_status() -> impl Strategy<Value = String> {
    prop::sample::select(&STATUSES[..]).prop_map(String::from)
}

/// Strategy for the statuses of each project's tasks.
fn arb_project_statuses() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(arb_status(), 0..6), 0..4)
}

/// Strategy for a registered label sequence: an ordered subset of the
/// alphabet.
fn arb_labels() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(STATUSES.to_vec(), 0..=STATUSES.len())
        .prop_map(|labels| labels.into_iter().map(String::from).collect())
}

/// Builds one project per status list, one task per status.
fn build_projects(status_lists: &[Vec<String>]) -> Vec<Project> {
    status_lists
        .iter()
        .enumerate()
        .map(|(pi, statuses)| {
            let mut project = Project::new(&format!("P{pi}"), None).unwrap();
            for (ti, status) in statuses.iter().enumerate() {
                let task = Task::new(
                    project.id.clone(),
                    &format!("T{pi}-{ti}"),
                    "",
                    status,
                    vec![],
                    None,
                    "Ada",
                )
                .unwrap();
                project.tasks.push(task);
            }
            project
        })
        .collect()
}

proptest! {
    /// Every task lands in exactly one column, whatever the label order.
    #[test]
    fn grouping_places_every_task_exactly_once(
        status_lists in arb_project_statuses(),
        labels in arb_labels(),
    ) {
        let projects = build_projects(&status_lists);
        let columns = group_by_status(&projects, &labels);

        let mut grouped: Vec<String> = columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id.to_string()))
            .collect();
        let mut stored: Vec<String> = projects
            .iter()
            .flat_map(|p| p.tasks.iter().map(|t| t.id.to_string()))
            .collect();
        grouped.sort();
        stored.sort();
        prop_assert_eq!(grouped, stored);
    }

    /// A column only holds tasks whose status matches its label.
    #[test]
    fn tasks_sit_in_their_status_column(
        status_lists in arb_project_statuses(),
        labels in arb_labels(),
    ) {
        let projects = build_projects(&status_lists);
        for column in group_by_status(&projects, &labels) {
            for task in &column.tasks {
                prop_assert_eq!(&task.status, &column.label);
            }
        }
    }

    /// Registered labels come first in their registered order; statuses
    /// the registry does not know append after them.
    #[test]
    fn registered_labels_keep_their_order(
        status_lists in arb_project_statuses(),
        labels in arb_labels(),
    ) {
        let projects = build_projects(&status_lists);
        let columns = group_by_status(&projects, &labels);

        prop_assert!(columns.len() >= labels.len());
        for (i, label) in labels.iter().enumerate() {
            prop_assert_eq!(&columns[i].label, label);
        }
        for column in &columns[labels.len()..] {
            prop_assert!(!labels.contains(&column.label));
        }
    }

    /// Column labels never repeat.
    #[test]
    fn column_labels_are_unique(
        status_lists in arb_project_statuses(),
        labels in arb_labels(),
    ) {
        let projects = build_projects(&status_lists);
        let columns = group_by_status(&projects, &labels);
        let unique: std::collections::HashSet<&str> =
            columns.iter().map(|c| c.label.as_str()).collect();
        prop_assert_eq!(unique.len(), columns.len());
    }

    /// Pruning keeps exactly the labels of populated columns, in order.
    #[test]
    fn pruning_keeps_the_non_empty_labels_in_order(
        status_lists in arb_project_statuses(),
        labels in arb_labels(),
    ) {
        let projects = build_projects(&status_lists);
        let columns = group_by_status(&projects, &labels);

        let expected: Vec<String> = columns
            .iter()
            .filter(|c| !c.tasks.is_empty())
            .map(|c| c.label.clone())
            .collect();
        prop_assert_eq!(non_empty_labels(&columns), expected);
    }

    /// A board fed arbitrary upserts keeps its view, store, and status
    /// sequence in lockstep.
    #[test]
    fn board_stays_consistent_after_random_upserts(
        statuses in prop::collection::vec(arb_status(), 1..12),
    ) {
        let storage = Arc::new(MemoryStorage::new());
        let mut board = TaskBoard::load(Arc::clone(&storage) as Arc<dyn Storage>);
        let project = Project::new("P", None).unwrap();
        board.add_project(project.clone());

        for (i, status) in statuses.iter().enumerate() {
            let task = Task::new(
                project.id.clone(),
                &format!("T{i}"),
                "",
                status,
                vec![],
                None,
                "Ada",
            )
            .unwrap();
            board.upsert_task(task).unwrap();
        }

        // No empty columns survive a mutation.
        for column in board.columns() {
            prop_assert!(!column.tasks.is_empty());
        }

        // View and store hold the same task set.
        let mut on_board: Vec<String> = board
            .columns()
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id.to_string()))
            .collect();
        let mut in_store: Vec<String> = board
            .projects()
            .iter()
            .flat_map(|p| p.tasks.iter().map(|t| t.id.to_string()))
            .collect();
        on_board.sort();
        in_store.sort();
        prop_assert_eq!(on_board, in_store);

        // The persisted status sequence is the column labels, verbatim.
        let raw = storage.get(STATUSES_KEY).expect("statuses persisted");
        let persisted: Vec<String> = serde_json::from_str(&raw).expect("status json");
        let shown: Vec<String> = board.columns().iter().map(|c| c.label.clone()).collect();
        prop_assert_eq!(persisted, shown);
    }
}
