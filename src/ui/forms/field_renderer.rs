//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What to show for a single input field
pub struct FieldView<'a> {
    pub label: String,
    pub value: &'a str,
    /// Shown instead of the value when it is empty and the field is not focused
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Inputs are drawn dimmed and without a cursor while disabled
    pub is_enabled: bool,
    /// Validation message shown under the field
    pub error: Option<&'a str>,
}

/// Draw a form field with its error line.
///
/// The last row of `area` is reserved for the error message.
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let accent = if field.error.is_some() {
        Color::Red
    } else if field.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let text_style = if !field.is_enabled || field.value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let display_value = if field.value.is_empty() && !field.is_active {
        field.placeholder
    } else {
        field.value
    };

    let cursor = if field.is_active && field.is_enabled {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = field.error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, chunks[1]);
    }
}

/// Draw the key hint line shown below a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
