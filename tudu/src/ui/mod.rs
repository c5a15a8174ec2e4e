//! Terminal UI rendering.

pub mod input_bar;
pub mod layout;
pub mod notice;
pub mod status_bar;
pub mod task_panel;
pub mod theme;
pub mod title_bar;

use ratatui::{Frame, widgets::Block};

use crate::app::App;
use layout::ScreenLayout;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::screen()), area);

    let screen = ScreenLayout::new(area);

    title_bar::render(frame, screen.title, app);
    input_bar::render(frame, &screen, app);
    task_panel::render(frame, &screen, app);
    status_bar::render(frame, screen.status, app);

    // Drawn last so it covers everything else.
    if let Some(message) = &app.notice {
        notice::render(frame, area, message);
    }
}
