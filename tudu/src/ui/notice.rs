//! Blocking notice popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme;

const POPUP_HEIGHT: u16 = 6;

/// Render `message` in a centered popup over `area`.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered(area, message);

    let block = Block::default()
        .title(Span::styled(" Notice ", theme::notice_border()))
        .borders(Borders::ALL)
        .border_style(theme::notice_border())
        .style(theme::input_field());

    let lines = vec![
        Line::from(Span::styled(message, theme::bold())),
        Line::default(),
        Line::from(Span::styled("Press any key to continue", theme::dimmed())),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// Popup rectangle sized to the message, clamped to `area`.
fn centered(area: Rect, message: &str) -> Rect {
    let wanted = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .max(32);
    let width = wanted.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
