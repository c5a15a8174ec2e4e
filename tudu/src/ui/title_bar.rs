//! Title bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::App;

/// Render the heading on a slate band across the top of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::default(),
        Line::from(Span::raw(format!("  {}", app.title))),
    ];
    let paragraph = Paragraph::new(lines).style(theme::title_bar());
    frame.render_widget(paragraph, area);
}
