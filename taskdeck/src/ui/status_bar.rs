//! Bottom status bar: identity, feedback, and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus, Screen};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" TaskDeck v{} ", env!("CARGO_PKG_VERSION")),
        theme::bold(),
    )];

    if let Some(session) = &app.session {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(session.display_name().to_owned(), theme::normal()));
        spans.push(Span::raw(" "));
    }

    if let Some(error) = &app.error {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(error.clone(), theme::error()));
        spans.push(Span::raw(" "));
    } else if let Some(notice) = &app.notice {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(notice.clone(), theme::notice()));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("| "));
    spans.push(Span::styled(key_hints(app), theme::dimmed()));

    let bar = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(bar, area);
}

fn key_hints(app: &App) -> &'static str {
    match app.screen {
        Screen::Login | Screen::Register => "Ctrl+C: quit",
        Screen::Board => {
            if app.board_form.is_some() {
                "Enter: save | Tab: next field | Esc: cancel"
            } else {
                match app.focus {
                    PanelFocus::Board => {
                        "n: new task | e: edit | d: delete | c: column | p: project | Shift+arrows: move | Tab: projects | q: quit"
                    }
                    PanelFocus::Projects => "\u{2191}\u{2193}: select | p: new project | Tab: board | q: quit",
                }
            }
        }
    }
}
