//! UI module for rendering the TUI

mod components;
mod forms;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    forms::draw_contact_form(frame, area, app);

    if let Some(snackbar) = &app.screen.snackbar {
        components::render_snackbar(frame, area, snackbar);
    }
}
