//! End-to-end board flows over in-memory storage.
//!
//! Exercises the full path: `TaskBoard` mutations propagating through
//! the project store and status registry down to the raw storage keys.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::redundant_clone)]

use std::sync::Arc;

use taskdeck::board::{BoardError, STATUSES_KEY, TaskBoard};
use taskdeck::projects::{PROJECTS_KEY, ProjectStore, StoreError};
use taskdeck::storage::{MemoryStorage, Storage};
use taskdeck_model::project::Project;
use taskdeck_model::task::Task;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn make_storage() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

fn make_board(storage: &Arc<MemoryStorage>) -> TaskBoard {
    TaskBoard::load(Arc::clone(storage) as Arc<dyn Storage>)
}

/// Creates a task in `project` with everything beyond name and status
/// defaulted.
fn make_task(project: &Project, name: &str, status: &str) -> Task {
    Task::new(project.id.clone(), name, "", status, vec![], None, "Ada").expect("valid task")
}

/// Column labels in render order.
fn labels(board: &TaskBoard) -> Vec<String> {
    board.columns().iter().map(|c| c.label.clone()).collect()
}

/// Task names in the given column, top to bottom.
fn names(board: &TaskBoard, label: &str) -> Vec<String> {
    board
        .columns()
        .iter()
        .find(|c| c.label == label)
        .map(|c| c.tasks.iter().map(|t| t.name.clone()).collect())
        .unwrap_or_default()
}

/// The status sequence as persisted, decoded from the raw storage key.
fn stored_statuses(storage: &Arc<MemoryStorage>) -> Vec<String> {
    let raw = storage.get(STATUSES_KEY).expect("statuses persisted");
    serde_json::from_str(&raw).expect("status json")
}

// ===========================================================================
// First project, first task
// ===========================================================================

#[test]
fn new_project_and_task_appear_on_the_board() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    assert!(board.columns().is_empty());

    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());
    board
        .upsert_task(make_task(&project, "Design", "Todo"))
        .expect("upsert");

    assert_eq!(labels(&board), ["Todo"]);
    assert_eq!(names(&board, "Todo"), ["Design"]);
    assert_eq!(stored_statuses(&storage), ["Todo"]);

    // The canonical store holds the same task under the project.
    let projects = board.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].tasks.len(), 1);
    assert_eq!(projects[0].tasks[0].name, "Design");
}

#[test]
fn empty_storage_loads_an_empty_board() {
    let storage = make_storage();
    let board = make_board(&storage);
    assert!(board.columns().is_empty());
    assert!(board.projects().is_empty());
    assert_eq!(stored_statuses(&storage), Vec::<String>::new());
}

// ===========================================================================
// Moving tasks
// ===========================================================================

#[test]
fn move_between_columns_lands_at_requested_index() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());

    let a = make_task(&project, "A", "Todo");
    board.upsert_task(a.clone()).unwrap();
    board.upsert_task(make_task(&project, "B", "Todo")).unwrap();
    board.upsert_task(make_task(&project, "C", "Doing")).unwrap();

    board.move_task(&a.id, "Todo", 0, "Doing", 1).expect("move");

    assert_eq!(names(&board, "Todo"), ["B"]);
    assert_eq!(names(&board, "Doing"), ["C", "A"]);

    // The store agrees on the new status.
    let projects = board.projects();
    let moved = projects[0].task(&a.id).expect("still stored");
    assert_eq!(moved.status, "Doing");
}

#[test]
fn move_out_of_a_column_prunes_it_when_emptied() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());

    let a = make_task(&project, "A", "Todo");
    board.upsert_task(a.clone()).unwrap();
    board.upsert_task(make_task(&project, "C", "Doing")).unwrap();

    board.move_task(&a.id, "Todo", 0, "Doing", 0).expect("move");

    assert_eq!(labels(&board), ["Doing"]);
    assert_eq!(names(&board, "Doing"), ["A", "C"]);
    assert_eq!(stored_statuses(&storage), ["Doing"]);
}

#[test]
fn failed_move_changes_nothing() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());

    let a = make_task(&project, "A", "Todo");
    board.upsert_task(a.clone()).unwrap();

    let before_projects = storage.get(PROJECTS_KEY);
    let before_statuses = storage.get(STATUSES_KEY);

    // Destination column does not exist.
    let err = board
        .move_task(&a.id, "Todo", 0, "Doing", 0)
        .expect_err("no Doing column");
    assert!(matches!(err, BoardError::InvalidMove(_)));

    assert_eq!(labels(&board), ["Todo"]);
    assert_eq!(names(&board, "Todo"), ["A"]);
    assert_eq!(storage.get(PROJECTS_KEY), before_projects);
    assert_eq!(storage.get(STATUSES_KEY), before_statuses);
}

#[test]
fn stale_move_is_rejected_when_task_shifted() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());

    let a = make_task(&project, "A", "Todo");
    let b = make_task(&project, "B", "Todo");
    board.upsert_task(a.clone()).unwrap();
    board.upsert_task(b.clone()).unwrap();

    // The caller thinks A still sits at index 1, but it is at 0.
    let err = board
        .move_task(&a.id, "Todo", 1, "Todo", 0)
        .expect_err("index points at B");
    assert!(matches!(err, BoardError::InvalidMove(_)));
    assert_eq!(names(&board, "Todo"), ["A", "B"]);
}

// ===========================================================================
// Deleting tasks
// ===========================================================================

#[test]
fn deleting_the_only_task_in_a_column_drops_the_column() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());

    let audit = make_task(&project, "Audit", "Review");
    board.upsert_task(audit.clone()).unwrap();
    board.upsert_task(make_task(&project, "Design", "Todo")).unwrap();

    board.delete_task(&audit);

    assert_eq!(labels(&board), ["Todo"]);
    assert_eq!(stored_statuses(&storage), ["Todo"]);
    assert!(board.projects()[0].task(&audit.id).is_none());
}

// ===========================================================================
// Idempotence and atomicity
// ===========================================================================

#[test]
fn upserting_the_same_task_twice_is_a_no_op() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());

    let task = make_task(&project, "Design", "Todo");
    board.upsert_task(task.clone()).unwrap();
    let first_projects = storage.get(PROJECTS_KEY);
    let first_statuses = storage.get(STATUSES_KEY);
    let first_names = names(&board, "Todo");

    board.upsert_task(task).unwrap();

    assert_eq!(storage.get(PROJECTS_KEY), first_projects);
    assert_eq!(storage.get(STATUSES_KEY), first_statuses);
    assert_eq!(names(&board, "Todo"), first_names);
}

#[test]
fn upsert_for_unknown_project_leaves_storage_untouched() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    board.add_project(Project::new("Website", None).unwrap());

    // A project that was never added to the store.
    let ghost = Project::new("Ghost", None).unwrap();
    let task = make_task(&ghost, "Orphan", "Todo");

    let before_projects = storage.get(PROJECTS_KEY);
    let before_statuses = storage.get(STATUSES_KEY);

    let err = board.upsert_task(task).expect_err("unknown project");
    assert!(matches!(
        err,
        BoardError::Store(StoreError::ProjectNotFound(_))
    ));

    assert!(board.columns().is_empty());
    assert_eq!(storage.get(PROJECTS_KEY), before_projects);
    assert_eq!(storage.get(STATUSES_KEY), before_statuses);
}

// ===========================================================================
// Column creation
// ===========================================================================

#[test]
fn created_column_shows_until_the_next_mutation() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());
    board.upsert_task(make_task(&project, "Design", "Todo")).unwrap();

    board.create_column("Blocked").expect("create");
    assert_eq!(labels(&board), ["Todo", "Blocked"]);

    // Any other mutation prunes the still-empty column.
    board.upsert_task(make_task(&project, "Ship", "Todo")).unwrap();
    assert_eq!(labels(&board), ["Todo"]);
    assert_eq!(stored_statuses(&storage), ["Todo"]);
}

#[test]
fn created_column_survives_once_populated() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());
    board.upsert_task(make_task(&project, "Design", "Todo")).unwrap();

    board.create_column("Blocked").expect("create");
    board
        .upsert_task(make_task(&project, "Waiting on legal", "Blocked"))
        .unwrap();

    assert_eq!(labels(&board), ["Todo", "Blocked"]);
    assert_eq!(stored_statuses(&storage), ["Todo", "Blocked"]);
}

#[test]
fn duplicate_and_blank_column_labels_are_rejected() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    board.create_column("Blocked").expect("create");

    assert_eq!(
        board.create_column("Blocked"),
        Err(BoardError::DuplicateColumn("Blocked".to_string()))
    );
    assert_eq!(board.create_column("   "), Err(BoardError::EmptyColumnLabel));
    assert_eq!(labels(&board), ["Blocked"]);
}

// ===========================================================================
// Reload and adoption
// ===========================================================================

#[test]
fn reload_rebuilds_the_same_board() {
    let storage = make_storage();
    let mut board = make_board(&storage);
    let project = Project::new("Website", None).unwrap();
    board.add_project(project.clone());

    let a = make_task(&project, "A", "Todo");
    board.upsert_task(a.clone()).unwrap();
    board.upsert_task(make_task(&project, "B", "Doing")).unwrap();
    board.move_task(&a.id, "Todo", 0, "Doing", 0).unwrap();

    let reloaded = make_board(&storage);
    assert_eq!(labels(&reloaded), labels(&board));
    assert_eq!(names(&reloaded, "Doing"), names(&board, "Doing"));
}

#[test]
fn unknown_status_in_store_is_adopted_at_load() {
    let storage = make_storage();

    // Seed the store directly: a task whose status the registry has
    // never seen, plus a registered label no task uses.
    let mut project = Project::new("Website", None).unwrap();
    let audit = make_task(&project, "Audit", "Review");
    project.tasks.push(audit);
    ProjectStore::new(Arc::clone(&storage) as Arc<dyn Storage>)
        .save_all(std::slice::from_ref(&project));
    storage.set(STATUSES_KEY, r#"["Todo"]"#);

    let board = make_board(&storage);

    assert_eq!(labels(&board), ["Review"]);
    assert_eq!(names(&board, "Review"), ["Audit"]);
    assert_eq!(stored_statuses(&storage), ["Review"]);
}

// ===========================================================================
// View and store stay in lockstep
// ===========================================================================

#[test]
fn every_stored_task_appears_exactly_once_on_the_board() {
    let storage = make_storage();
    let mut board = make_board(&storage);

    let website = Project::new("Website", None).unwrap();
    let api = Project::new("API", None).unwrap();
    board.add_project(website.clone());
    board.add_project(api.clone());

    let d = make_task(&website, "Design", "Todo");
    board.upsert_task(d.clone()).unwrap();
    board.upsert_task(make_task(&website, "Ship", "Done")).unwrap();
    board.upsert_task(make_task(&api, "Auth", "Todo")).unwrap();
    board.upsert_task(make_task(&api, "Rate limits", "Doing")).unwrap();
    board.move_task(&d.id, "Todo", 0, "Doing", 0).unwrap();

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

    assert_eq!(on_board.len(), 4);
    assert_eq!(on_board, in_store);
}
