//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldView};
use super::select_field::draw_dropdown;
use crate::app::App;
use crate::state::{Field, Focus, FormState};
use crate::strings;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact form screen
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.form_state();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", strings::SCREEN_TITLE),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Info text
            Constraint::Length(4),             // Name + error
            Constraint::Length(4),             // Email + error
            Constraint::Length(4),             // Subject + error
            Constraint::Min(5),                // Message + error
            Constraint::Length(BUTTON_HEIGHT), // Send button
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let info = Paragraph::new(strings::SCREEN_INFO)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    for (field, chunk) in Field::ALL.into_iter().zip(&chunks[1..5]) {
        draw_field(frame, *chunk, field_view(app, &state, field));
    }

    let is_send_enabled = state.can_submit && !state.is_submitting;
    let label = if state.is_submitting {
        strings::SENDING_LABEL
    } else {
        strings::SEND_LABEL
    };
    render_button(
        frame,
        chunks[5],
        label,
        app.screen.focus == Focus::SendButton,
        is_send_enabled,
    );

    draw_help_text(frame, chunks[6], &help_hints(app.screen.focus));

    if let Some(picker) = app.screen.subject_picker {
        let subject_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(chunks[3])[0];
        draw_dropdown(
            frame,
            subject_area,
            area,
            &app.subject_options,
            picker.highlighted,
        );
    }
}

fn field_view<'a>(app: &App, state: &'a FormState, field: Field) -> FieldView<'a> {
    let is_active = app.screen.focus.field() == Some(field);
    let placeholder = if field == Field::Subject {
        strings::SUBJECT_PLACEHOLDER
    } else {
        strings::EMPTY_PLACEHOLDER
    };
    let label = match field.max_len() {
        Some(max) if is_active => format!(
            "{} ({}/{})",
            field.label(),
            state.form.get(field).chars().count(),
            max
        ),
        _ => field.label().to_string(),
    };

    FieldView {
        label,
        value: state.form.get(field),
        placeholder,
        is_active,
        is_multiline: field.is_multiline(),
        is_enabled: !state.is_submitting,
        error: state
            .errors
            .get(field)
            .map(|error| strings::error_text(field, error)),
    }
}

/// Hints for the help line, depending on the focused element
fn help_hints(focus: Focus) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "next field")];
    match focus {
        Focus::Subject => hints.push(("Enter", "choose subject")),
        Focus::Message => hints.push(("Enter", "new line")),
        Focus::SendButton => hints.push(("Enter", "send")),
        Focus::Name | Focus::Email => {}
    }
    hints.push((crate::platform::SUBMIT_SHORTCUT, "send"));
    hints.push((crate::platform::QUIT_SHORTCUT, "quit"));
    hints
}
