//! Dropdown list for select fields

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Draw an open dropdown directly below `anchor`, clipped to `bounds`
pub fn draw_dropdown(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    options: &[String],
    highlighted: usize,
) {
    let wanted = u16::try_from(options.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2); // +2 for borders
    let top = anchor.y + anchor.height.saturating_sub(1);
    let available = bounds.bottom().saturating_sub(top);
    if available < 3 {
        return;
    }

    let area = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width,
        height: wanted.min(available),
    };

    let items: Vec<ListItem> = options
        .iter()
        .map(|o| ListItem::new(format!(" {o}")))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    // ListState keeps the highlighted option scrolled into view
    let mut list_state = ListState::default().with_selected(Some(highlighted));
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
