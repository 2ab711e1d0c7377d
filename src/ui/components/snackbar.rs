//! Snackbar component

use crate::state::{Snackbar, SnackbarKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the snackbar along the bottom edge of `area`
pub fn render_snackbar(frame: &mut Frame, area: Rect, snackbar: &Snackbar) {
    let height = 3u16.min(area.height);
    let width = area.width.saturating_sub(4);
    let snackbar_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.bottom().saturating_sub(height),
        width,
        height,
    };

    let color = match snackbar.kind {
        SnackbarKind::Success => Color::Green,
        SnackbarKind::Error => Color::Red,
    };

    let content = Paragraph::new(Line::from(Span::styled(
        format!(" {}", snackbar.message),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(color)),
    );

    frame.render_widget(Clear, snackbar_area);
    frame.render_widget(content, snackbar_area);
}
