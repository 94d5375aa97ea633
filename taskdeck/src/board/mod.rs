//! The Kanban board: grouped view, status registry, and reconciler.
//!
//! The canonical per-project task lists live in
//! [`ProjectStore`](crate::projects::ProjectStore). This module derives
//! the board from them: a grouped status → task-list view for rendering
//! and drag-style moves, plus the persisted ordered status sequence
//! that fixes column order. [`TaskBoard`] keeps the two consistent
//! across every mutation.

pub mod group;
pub mod manager;
pub mod registry;

pub use group::{Column, group_by_status};
pub use manager::TaskBoard;
pub use registry::{STATUSES_KEY, StatusRegistry};

use thiserror::Error;

use crate::projects::StoreError;

/// Errors that can occur during board operations.
///
/// Every failure leaves the board, the canonical store, and the
/// registry exactly as they were.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A move referenced a source or destination that no longer exists.
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// A column with this label already exists.
    #[error("column already exists: {0}")]
    DuplicateColumn(String),
    /// A column label was empty after trimming.
    #[error("column label cannot be empty")]
    EmptyColumnLabel,
    /// The canonical store rejected the propagated change.
    #[error(transparent)]
    Store(#[from] StoreError),
}
