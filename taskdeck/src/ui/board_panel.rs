//! Board rendering: one bordered list per status column.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use taskdeck_model::task::Task;

use super::theme;
use crate::app::{App, PanelFocus};
use crate::board::Column;

/// Render the column grid, or a hint when the board is empty.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = app.board.columns();
    if columns.is_empty() {
        let hint = if app.projects.is_empty() {
            "Empty board — press p to create a project, then n to add a task"
        } else {
            "Empty board — press n to add a task or c to create a column"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(hint, theme::dimmed())))
            .block(Block::default().borders(Borders::ALL).title("Board"));
        frame.render_widget(paragraph, area);
        return;
    }

    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Ratio(1, columns.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, column) in columns.iter().enumerate() {
        render_column(frame, chunks[idx], app, column, idx);
    }
}

/// Render a single column with its task cards.
fn render_column(frame: &mut Frame, area: Rect, app: &App, column: &Column, column_index: usize) {
    let board_focused = app.focus == PanelFocus::Board;
    let is_selected_column = column_index == app.selected_column;

    let items: Vec<ListItem> = column
        .tasks
        .iter()
        .enumerate()
        .map(|(row, task)| {
            let is_selected =
                board_focused && is_selected_column && row == app.selected_row;
            task_card(task, is_selected)
        })
        .collect();

    let title = Span::styled(
        format!("{} ({})", column.label, column.tasks.len()),
        theme::panel_title(theme::column_color(&column.label)),
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if board_focused && is_selected_column {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(List::new(items).block(block), area);
}

/// Two-line card: task name, then assignee/due/tags metadata.
fn task_card(task: &Task, is_selected: bool) -> ListItem<'static> {
    let name_style = if is_selected {
        theme::selected()
    } else {
        theme::bold()
    };

    let mut meta = vec![Span::styled(format!("  @{}", task.assigned_user), theme::dimmed())];
    if let Some(due) = task.due_date {
        meta.push(Span::raw(" "));
        meta.push(Span::styled(
            due.to_string(),
            theme::normal().fg(theme::WARNING),
        ));
    }
    if !task.tags.is_empty() {
        meta.push(Span::raw(" "));
        meta.push(Span::styled(
            task.tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" "),
            theme::tag(),
        ));
    }

    ListItem::new(vec![
        Line::from(Span::styled(task.name.clone(), name_style)),
        Line::from(meta),
    ])
}
