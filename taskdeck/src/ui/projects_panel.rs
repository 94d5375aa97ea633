//! Project sidebar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the sidebar with the project list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Projects;

    let items: Vec<ListItem> = app
        .projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let is_selected = idx == app.selected_project;

            let mut spans = vec![
                Span::raw(project.name.clone()),
                Span::styled(format!(" ({})", project.tasks.len()), theme::dimmed()),
            ];

            if let Some(description) = &project.description {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    description.chars().take(24).collect::<String>(),
                    theme::dimmed(),
                ));
            }

            let style = if is_selected && is_focused {
                theme::selected()
            } else if is_selected {
                theme::highlighted()
            } else {
                theme::normal()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            "Projects",
            theme::panel_title(theme::SIDEBAR_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Line::from(Span::styled(
            "No projects — press p",
            theme::dimmed(),
        )))])
        .block(block)
    } else {
        List::new(items).block(block)
    };

    frame.render_widget(list, area);
}
