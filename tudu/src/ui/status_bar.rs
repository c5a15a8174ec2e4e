//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.notice.is_some() {
        "Any key: dismiss"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add | Tab: tasks | Esc: quit | ←→: move cursor",
            PanelFocus::Tasks if app.is_editing() => "Enter: save | Esc: cancel edit | Tab: input",
            PanelFocus::Tasks => {
                "↑↓/jk: select | Space: done | e: edit | d: delete | Tab: input | q: quit"
            }
        }
    };

    let counts = format!(
        "{} tasks, {} done",
        app.store.len(),
        app.store.completed_count()
    );

    let status_line = Line::from(vec![
        Span::raw(format!(" tudu v{}", env!("CARGO_PKG_VERSION"))),
        Span::raw(" | "),
        Span::raw(counts),
        Span::raw(" | "),
        Span::raw(help_text),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
