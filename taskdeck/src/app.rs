//! Application state and event handling.
//!
//! `App` owns the board, the user directory, and everything the UI
//! renders: the active screen, panel focus, selections, and the one
//! form that is currently capturing text input. Every key event runs
//! to completion here before the next is processed; board mutations
//! and their persists never interleave.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use taskdeck_model::ids::ProjectId;
use taskdeck_model::project::Project;
use taskdeck_model::task::{self, Task};

use crate::auth::{Session, UserDirectory};
use crate::board::{TaskBoard, group};
use crate::storage::Storage;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Email/password sign-in.
    Login,
    /// New account creation.
    Register,
    /// The Kanban board.
    Board,
}

/// Which panel of the board screen is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Column grid is focused (default).
    Board,
    /// Project sidebar is focused.
    Projects,
}

/// Which board modal form is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardForm {
    /// New project form.
    Project,
    /// New/edit task form.
    Task,
    /// New column form.
    Column,
}

/// One text field of a form.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Field label shown to the left of the input.
    pub label: &'static str,
    /// Current text.
    pub value: String,
}

/// A stack of labelled text fields with one active cursor.
#[derive(Debug, Clone)]
pub struct FormState {
    /// Form title (e.g. "New task").
    pub title: &'static str,
    /// Fields in display order.
    pub fields: Vec<FormField>,
    /// Index of the field that has the cursor.
    pub active: usize,
    /// Cursor position in the active field (character index).
    pub cursor: usize,
}

impl FormState {
    /// Creates a form with the given field labels, all empty.
    #[must_use]
    pub fn new(title: &'static str, labels: &[&'static str]) -> Self {
        Self {
            title,
            fields: labels
                .iter()
                .map(|label| FormField {
                    label,
                    value: String::new(),
                })
                .collect(),
            active: 0,
            cursor: 0,
        }
    }

    /// Pre-fills a field and returns the form.
    #[must_use]
    pub fn with_value(mut self, index: usize, value: &str) -> Self {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.to_string();
            if index == self.active {
                self.cursor = value.chars().count();
            }
        }
        self
    }

    /// Current text of the field at `index`, empty if out of range.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", |f| f.value.as_str())
    }

    fn enter_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active) {
            let at = byte_index(&field.value, self.cursor);
            field.value.insert(at, c);
            self.cursor += 1;
        }
    }

    fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.active) {
            let at = byte_index(&field.value, self.cursor - 1);
            field.value.remove(at);
            self.cursor -= 1;
        }
    }

    const fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        let len = self.fields[self.active].value.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
        self.cursor = self.fields[self.active].value.chars().count();
    }

    fn prev_field(&mut self) {
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
        self.cursor = self.fields[self.active].value.chars().count();
    }
}

/// Maps a character index to a byte index within `s`.
fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .map(|(i, _)| i)
        .nth(char_index)
        .unwrap_or(s.len())
}

/// Main application state.
pub struct App {
    /// Active screen.
    pub screen: Screen,
    /// Panel focus on the board screen.
    pub focus: PanelFocus,
    /// The board reconciler.
    pub board: TaskBoard,
    /// Registered users and credential checks.
    pub auth: UserDirectory,
    /// The signed-in user, once login succeeds.
    pub session: Option<Session>,
    /// Cached project list for the sidebar.
    pub projects: Vec<Project>,
    /// Selected column index on the board.
    pub selected_column: usize,
    /// Selected task row within the selected column.
    pub selected_row: usize,
    /// Selected project in the sidebar.
    pub selected_project: usize,
    /// The form capturing input (login/register screens, board modals).
    pub form: FormState,
    /// Which board modal is open, if any.
    pub board_form: Option<BoardForm>,
    /// Inline error shown under the form or in the status bar.
    pub error: Option<String>,
    /// One-shot informational message.
    pub notice: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Task being edited when the task form is open in edit mode.
    editing: Option<Task>,
    /// Project that will own a task created from the task form.
    form_project: Option<ProjectId>,
}

impl App {
    /// Creates the app over a storage backend, starting at the login
    /// screen.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let board = TaskBoard::load(Arc::clone(&storage));
        let projects = board.projects();
        Self {
            screen: Screen::Login,
            focus: PanelFocus::Board,
            board,
            auth: UserDirectory::new(storage),
            session: None,
            projects,
            selected_column: 0,
            selected_row: 0,
            selected_project: 0,
            form: login_form(""),
            board_form: None,
            error: None,
            notice: None,
            should_quit: false,
            editing: None,
            form_project: None,
        }
    }

    /// The task under the cursor, if any.
    #[must_use]
    pub fn current_task(&self) -> Option<&Task> {
        self.board
            .columns()
            .get(self.selected_column)?
            .tasks
            .get(self.selected_row)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Register => self.handle_register_key(key),
            Screen::Board => {
                if self.board_form.is_some() {
                    self.handle_form_key(key);
                } else {
                    self.handle_board_key(key);
                }
            }
        }
    }

    // --- auth screens ---

    fn handle_login_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                self.screen = Screen::Register;
                self.form = register_form();
                self.error = None;
            }
            (KeyCode::Enter, _) => self.submit_login(),
            _ => self.handle_text_key(key),
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.screen = Screen::Login;
                self.form = login_form("");
                self.error = None;
            }
            KeyCode::Enter => self.submit_register(),
            _ => self.handle_text_key(key),
        }
    }

    fn submit_login(&mut self) {
        let email = self.form.value(0).to_string();
        let password = self.form.value(1).to_string();
        match self.auth.authenticate(&email, &password) {
            Ok(user) => {
                tracing::info!(user = %user.name, "signed in");
                self.session = Some(Session::new(user));
                self.screen = Screen::Board;
                self.error = None;
                self.notice = None;
                self.refresh_projects();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn submit_register(&mut self) {
        let name = self.form.value(0).to_string();
        let email = self.form.value(1).to_string();
        let password = self.form.value(2).to_string();
        match self.auth.register(&name, &email, &password) {
            Ok(user) => {
                tracing::info!(user = %user.name, "account registered");
                self.screen = Screen::Login;
                self.form = login_form(&user.email);
                self.error = None;
                self.notice = Some("Account created, sign in to continue".to_string());
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    // --- board navigation ---

    fn handle_board_key(&mut self, key: KeyEvent) {
        if self.focus == PanelFocus::Projects {
            match key.code {
                KeyCode::Tab => self.focus = PanelFocus::Board,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected_project = self.selected_project.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected_project + 1 < self.projects.len() {
                        self.selected_project += 1;
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('p') => self.open_project_form(),
                _ => {}
            }
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc | KeyCode::Char('q'), _) => self.should_quit = true,
            (KeyCode::Tab, _) => self.focus = PanelFocus::Projects,
            (KeyCode::Left, m) if m.contains(KeyModifiers::SHIFT) => self.move_selected_left(),
            (KeyCode::Right, m) if m.contains(KeyModifiers::SHIFT) => self.move_selected_right(),
            (KeyCode::Up, m) if m.contains(KeyModifiers::SHIFT) => self.move_selected_up(),
            (KeyCode::Down, m) if m.contains(KeyModifiers::SHIFT) => self.move_selected_down(),
            (KeyCode::Char('H'), _) => self.move_selected_left(),
            (KeyCode::Char('L'), _) => self.move_selected_right(),
            (KeyCode::Char('K'), _) => self.move_selected_up(),
            (KeyCode::Char('J'), _) => self.move_selected_down(),
            (KeyCode::Left | KeyCode::Char('h'), _) => {
                self.selected_column = self.selected_column.saturating_sub(1);
                self.clamp_selection();
            }
            (KeyCode::Right | KeyCode::Char('l'), _) => {
                if self.selected_column + 1 < self.board.columns().len() {
                    self.selected_column += 1;
                }
                self.clamp_selection();
            }
            (KeyCode::Up | KeyCode::Char('k'), _) => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            (KeyCode::Down | KeyCode::Char('j'), _) => {
                let len = self
                    .board
                    .columns()
                    .get(self.selected_column)
                    .map_or(0, |c| c.tasks.len());
                if self.selected_row + 1 < len {
                    self.selected_row += 1;
                }
            }
            (KeyCode::Char('n'), _) => self.open_task_form(),
            (KeyCode::Char('e'), _) => self.open_edit_form(),
            (KeyCode::Char('d'), _) => self.delete_selected(),
            (KeyCode::Char('p'), _) => self.open_project_form(),
            (KeyCode::Char('c'), _) => self.open_column_form(),
            _ => {}
        }
    }

    // --- task movement ---

    fn move_selected_left(&mut self) {
        if self.selected_column > 0 {
            self.move_selected_to(self.selected_column - 1, self.selected_row);
        }
    }

    fn move_selected_right(&mut self) {
        if self.selected_column + 1 < self.board.columns().len() {
            self.move_selected_to(self.selected_column + 1, self.selected_row);
        }
    }

    fn move_selected_up(&mut self) {
        if self.selected_row > 0 {
            self.move_selected_to(self.selected_column, self.selected_row - 1);
        }
    }

    fn move_selected_down(&mut self) {
        self.move_selected_to(self.selected_column, self.selected_row + 1);
    }

    fn move_selected_to(&mut self, dest_column: usize, dest_index: usize) {
        let columns = self.board.columns();
        let Some(task) = columns
            .get(self.selected_column)
            .and_then(|c| c.tasks.get(self.selected_row))
        else {
            return;
        };
        let Some(dest) = columns.get(dest_column) else {
            return;
        };
        let task_id = task.id.clone();
        let source_status = columns[self.selected_column].label.clone();
        let dest_status = dest.label.clone();

        match self.board.move_task(
            &task_id,
            &source_status,
            self.selected_row,
            &dest_status,
            dest_index,
        ) {
            Ok(()) => {
                self.error = None;
                self.refresh_projects();
                // Follow the task to wherever it landed.
                if let Some((ci, ti)) = group::find_task(self.board.columns(), &task_id) {
                    self.selected_column = ci;
                    self.selected_row = ti;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "move rejected");
                self.error = Some(err.to_string());
            }
        }
        self.clamp_selection();
    }

    fn delete_selected(&mut self) {
        let Some(task) = self.current_task().cloned() else {
            return;
        };
        self.board.delete_task(&task);
        tracing::info!(task = %task.name, "task deleted");
        self.refresh_projects();
        self.clamp_selection();
    }

    // --- board forms ---

    fn open_project_form(&mut self) {
        self.form = FormState::new("New project", &["Name", "Description"]);
        self.board_form = Some(BoardForm::Project);
        self.error = None;
    }

    fn open_task_form(&mut self) {
        let Some(project) = self.projects.get(self.selected_project) else {
            self.error = Some("Create a project first".to_string());
            return;
        };
        let status = self
            .board
            .columns()
            .get(self.selected_column)
            .map_or("Todo", |c| c.label.as_str())
            .to_string();
        let assignee = self
            .session
            .as_ref()
            .map_or("", |s| s.display_name())
            .to_string();

        self.form_project = Some(project.id.clone());
        self.editing = None;
        self.form = task_form("New task")
            .with_value(2, &status)
            .with_value(5, &assignee);
        self.board_form = Some(BoardForm::Task);
        self.error = None;
    }

    fn open_edit_form(&mut self) {
        let Some(task) = self.current_task().cloned() else {
            return;
        };
        let due = task.due_date.map_or(String::new(), |d| d.to_string());
        self.form = task_form("Edit task")
            .with_value(0, &task.name)
            .with_value(1, &task.description)
            .with_value(2, &task.status)
            .with_value(3, &task.tags.join(", "))
            .with_value(4, &due)
            .with_value(5, &task.assigned_user);
        self.form_project = Some(task.project_id.clone());
        self.editing = Some(task);
        self.board_form = Some(BoardForm::Task);
        self.error = None;
    }

    fn open_column_form(&mut self) {
        self.form = FormState::new("New column", &["Label"]);
        self.board_form = Some(BoardForm::Column);
        self.error = None;
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.board_form = None;
                self.editing = None;
                self.form_project = None;
                self.error = None;
            }
            KeyCode::Enter => self.submit_board_form(),
            _ => self.handle_text_key(key),
        }
    }

    fn submit_board_form(&mut self) {
        match self.board_form {
            Some(BoardForm::Project) => self.submit_project_form(),
            Some(BoardForm::Task) => self.submit_task_form(),
            Some(BoardForm::Column) => self.submit_column_form(),
            None => {}
        }
    }

    fn submit_project_form(&mut self) {
        let name = self.form.value(0);
        let description = Some(self.form.value(1).to_string());
        match Project::new(name, description) {
            Ok(project) => {
                tracing::info!(project = %project.name, "project created");
                self.board.add_project(project);
                self.refresh_projects();
                self.selected_project = self.projects.len().saturating_sub(1);
                self.close_form();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn submit_task_form(&mut self) {
        let Some(project_id) = self.form_project.clone() else {
            self.close_form();
            return;
        };
        let due_date = match task::parse_due_date(self.form.value(4)) {
            Ok(due) => due,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };
        let tags = task::parse_tags(self.form.value(3));
        let built = Task::new(
            project_id,
            self.form.value(0),
            self.form.value(1),
            self.form.value(2),
            tags,
            due_date,
            self.form.value(5),
        );
        let mut new_task = match built {
            Ok(task) => task,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };
        if let Some(original) = &self.editing {
            // An edit keeps the task's identity.
            new_task.id = original.id.clone();
        }

        let task_id = new_task.id.clone();
        match self.board.upsert_task(new_task) {
            Ok(()) => {
                self.refresh_projects();
                if let Some((ci, ti)) = group::find_task(self.board.columns(), &task_id) {
                    self.selected_column = ci;
                    self.selected_row = ti;
                }
                self.close_form();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn submit_column_form(&mut self) {
        let label = self.form.value(0).to_string();
        match self.board.create_column(&label) {
            Ok(()) => {
                self.selected_column = self.board.columns().len().saturating_sub(1);
                self.selected_row = 0;
                self.close_form();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn close_form(&mut self) {
        self.board_form = None;
        self.editing = None;
        self.form_project = None;
        self.error = None;
    }

    // --- shared helpers ---

    fn handle_text_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.form.prev_field();
            }
            (KeyCode::Tab | KeyCode::Down, _) => self.form.next_field(),
            (KeyCode::Char(c), _) => self.form.enter_char(c),
            (KeyCode::Backspace, _) => self.form.delete_char(),
            (KeyCode::Left, _) => self.form.move_cursor_left(),
            (KeyCode::Right, _) => self.form.move_cursor_right(),
            (KeyCode::Home, _) => self.form.cursor = 0,
            (KeyCode::End, _) => {
                self.form.cursor = self.form.fields[self.form.active].value.chars().count();
            }
            _ => {}
        }
    }

    fn refresh_projects(&mut self) {
        self.projects = self.board.projects();
        if self.selected_project >= self.projects.len() {
            self.selected_project = self.projects.len().saturating_sub(1);
        }
    }

    fn clamp_selection(&mut self) {
        let columns = self.board.columns();
        if self.selected_column >= columns.len() {
            self.selected_column = columns.len().saturating_sub(1);
        }
        let len = columns.get(self.selected_column).map_or(0, |c| c.tasks.len());
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }
}

fn login_form(email: &str) -> FormState {
    FormState::new("Sign in", &["Email", "Password"]).with_value(0, email)
}

fn register_form() -> FormState {
    FormState::new("Create account", &["Name", "Email", "Password"])
}

fn task_form(title: &'static str) -> FormState {
    FormState::new(
        title,
        &[
            "Name",
            "Description",
            "Status",
            "Tags (comma separated)",
            "Due date (YYYY-MM-DD)",
            "Assignee",
        ],
    )
}
