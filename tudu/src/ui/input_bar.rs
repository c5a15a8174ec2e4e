//! New-task input box and "Add Task" button.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::layout::ScreenLayout;
use super::theme;
use crate::app::{App, PanelFocus};
use crate::text_input;

/// Cursor glyph drawn into focused text fields.
pub const CURSOR: char = '█';

/// Render the input row.
pub fn render(frame: &mut Frame, screen: &ScreenLayout, app: &App) {
    render_input(frame, screen.input, app);
    render_button(frame, screen.add_button);
}

/// Render the input box.
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input;

    let input_line = if app.input.is_empty() {
        let mut spans = Vec::with_capacity(2);
        if is_focused {
            spans.push(Span::styled(CURSOR.to_string(), theme::input_cursor()));
        }
        spans.push(Span::styled(app.placeholder.as_str(), theme::dimmed()));
        Line::from(spans)
    } else if is_focused {
        let inner_width = area.width.saturating_sub(2);
        field_line(&app.input, app.cursor_position, inner_width, true)
    } else {
        Line::from(Span::styled(app.input.as_str(), theme::normal()))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let paragraph = Paragraph::new(input_line)
        .style(theme::input_field())
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Render the "Add Task" button.
fn render_button(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false));

    let paragraph = Paragraph::new(Line::from("Add Task"))
        .alignment(Alignment::Center)
        .style(theme::button())
        .block(block);

    frame.render_widget(paragraph, area);
}

/// A single-line text field `width` cells wide, scrolled so the cursor stays
/// visible. Widths are display columns, so wide glyphs count twice.
pub(super) fn field_line(text: &str, cursor: usize, width: u16, show_cursor: bool) -> Line<'static> {
    let room = usize::from(width);
    let cursor_width = usize::from(show_cursor);
    let (before, after) = text.split_at(text_input::byte_index(text, cursor));

    let before = tail_within(before, room.saturating_sub(cursor_width));
    let after = head_within(after, room.saturating_sub(before.width() + cursor_width));

    let mut spans = vec![Span::styled(before.to_string(), theme::normal())];
    if show_cursor {
        spans.push(Span::styled(CURSOR.to_string(), theme::input_cursor()));
    }
    spans.push(Span::styled(after.to_string(), theme::normal()));
    Line::from(spans)
}

/// Longest suffix of `s` no wider than `budget` columns.
fn tail_within(s: &str, budget: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > budget {
            break;
        }
        start = i;
    }
    &s[start..]
}

/// Longest prefix of `s` no wider than `budget` columns.
fn head_within(s: &str, budget: usize) -> &str {
    let mut used = 0;
    let mut end = 0;
    for (i, c) in s.char_indices() {
        used += c.width().unwrap_or(0);
        if used > budget {
            break;
        }
        end = i + c.len_utf8();
    }
    &s[..end]
}
