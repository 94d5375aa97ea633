//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Success/notice color.
pub const SUCCESS: Color = Color::Green;

/// Warning color (due dates).
pub const WARNING: Color = Color::Yellow;

/// Error color.
pub const ERROR: Color = Color::Red;

/// Panel title color for the project sidebar.
pub const SIDEBAR_TITLE: Color = Color::Blue;

/// Colors cycled across board columns by label.
pub const COLUMN_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::LightCyan,
    Color::LightGreen,
    Color::Rgb(255, 165, 0),
];

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (metadata, hints).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for inline error messages.
#[must_use]
pub fn error() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

/// Style for one-shot notices.
#[must_use]
pub fn notice() -> Style {
    Style::default().fg(SUCCESS)
}

/// Style for tag chips on task cards.
#[must_use]
pub fn tag() -> Style {
    Style::default().fg(Color::LightMagenta)
}

/// Style for the form cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Get a stable color for a column based on its label.
#[must_use]
pub fn column_color(label: &str) -> Color {
    let hash = label.bytes().fold(0u32, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(u32::from(b))
    });
    COLUMN_COLORS[(hash as usize) % COLUMN_COLORS.len()]
}
