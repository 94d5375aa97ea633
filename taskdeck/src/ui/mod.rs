//! Terminal rendering for the `TaskDeck` screens.

pub mod board_panel;
pub mod forms;
pub mod projects_panel;
pub mod status_bar;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::{App, Screen};

/// Render one frame of the whole interface.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    match app.screen {
        Screen::Login | Screen::Register => forms::render_auth(frame, chunks[0], app),
        Screen::Board => {
            let panels = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(22), Constraint::Min(0)])
                .split(chunks[0]);
            projects_panel::render(frame, panels[0], app);
            board_panel::render(frame, panels[1], app);
            if app.board_form.is_some() {
                forms::render_modal(frame, chunks[0], app);
            }
        }
    }

    status_bar::render(frame, chunks[1], app);
}
