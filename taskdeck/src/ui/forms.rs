//! Form rendering: the auth screens and board modal overlays.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::theme;
use crate::app::{App, FormState, Screen};

/// Render the login or register screen as a centered form.
pub fn render_auth(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::default()];
    lines.extend(field_lines(&app.form));
    lines.push(Line::default());
    lines.push(status_line(app));
    lines.push(Line::from(Span::styled(auth_hint(app.screen), theme::dimmed())));

    let height = lines.len() as u16 + 2;
    let rect = centered_rect(area, 56, height);
    let block = Block::default()
        .title(Span::styled(app.form.title, theme::panel_title(theme::HIGHLIGHT)))
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Render the open board form as a modal overlay.
pub fn render_modal(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::default()];
    lines.extend(field_lines(&app.form));
    lines.push(Line::default());
    lines.push(status_line(app));
    lines.push(Line::from(Span::styled(
        "Enter: save | Tab: next field | Esc: cancel",
        theme::dimmed(),
    )));

    let height = lines.len() as u16 + 2;
    let rect = centered_rect(area, 64, height);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(app.form.title, theme::panel_title(theme::HIGHLIGHT)))
        .borders(Borders::ALL)
        .border_style(theme::highlighted());
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// One line per field, with the cursor drawn into the active one.
fn field_lines(form: &FormState) -> Vec<Line<'static>> {
    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    form.fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let is_active = idx == form.active;
            let shown: String = if field.label == "Password" {
                "\u{2022}".repeat(field.value.chars().count())
            } else {
                field.value.clone()
            };

            let mut spans = vec![Span::styled(
                format!(" {:>label_width$}: ", field.label),
                theme::dimmed(),
            )];
            if is_active {
                let cursor = form.cursor.min(shown.chars().count());
                let before: String = shown.chars().take(cursor).collect();
                let after: String = shown.chars().skip(cursor).collect();
                spans.push(Span::styled(before, theme::normal()));
                spans.push(Span::styled("\u{2588}", theme::input_cursor()));
                spans.push(Span::styled(after, theme::normal()));
            } else {
                spans.push(Span::styled(shown, theme::normal()));
            }
            Line::from(spans)
        })
        .collect()
}

/// Error, notice, or blank filler under the fields.
fn status_line(app: &App) -> Line<'static> {
    if let Some(error) = &app.error {
        Line::from(Span::styled(format!(" {error}"), theme::error()))
    } else if let Some(notice) = &app.notice {
        Line::from(Span::styled(format!(" {notice}"), theme::notice()))
    } else {
        Line::default()
    }
}

const fn auth_hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Register => "Enter: create account | Tab: next field | Esc: back",
        _ => "Enter: sign in | Tab: next field | Ctrl+R: create account | Esc: quit",
    }
}

/// Center a fixed-size rect inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
