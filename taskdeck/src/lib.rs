//! `TaskDeck` — terminal Kanban task tracker library.

pub mod app;
pub mod auth;
pub mod board;
pub mod config;
pub mod projects;
pub mod storage;
pub mod ui;
