//! Task panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tudu_core::TaskRow;

use super::input_bar::field_line;
use super::layout::{self, RowLayout, ScreenLayout};
use super::theme;
use crate::app::{App, PanelFocus};

/// Glyph of the button that starts an edit.
pub const EDIT_GLYPH: &str = "✎";

/// Glyph of the button that saves an edit.
pub const SAVE_GLYPH: &str = "⏎";

/// Glyph of the delete button.
pub const DELETE_GLYPH: &str = "✗";

/// Render the task list, one row per task in collection order.
pub fn render(frame: &mut Frame, screen: &ScreenLayout, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;

    let title = format!(" Tasks ({}) ", app.store.len());
    let block = Block::default()
        .title(Span::styled(title, theme::bold()))
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));
    frame.render_widget(block, screen.list);

    if app.store.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Nothing to do. Add a task above.",
            theme::dimmed(),
        )));
        frame.render_widget(hint, screen.rows);
        return;
    }

    let range = layout::visible_range(app.store.len(), app.selected_task, screen.rows.height);
    let rows: Vec<TaskRow<'_>> = app.store.rows().collect();
    for (idx, rect) in layout::row_rects(screen.rows, range) {
        let is_selected = is_focused && idx == app.selected_task;
        render_row(frame, rect, rows[idx], is_selected, app);
    }
}

/// Render one task row: checkbox, text or edit field, edit/save, delete.
fn render_row(frame: &mut Frame, area: Rect, row: TaskRow<'_>, is_selected: bool, app: &App) {
    let base = if is_selected {
        theme::selected_row()
    } else {
        theme::row()
    };
    frame.render_widget(Paragraph::new("").style(base), area);

    let cells = RowLayout::new(area);
    let completed = row.task.is_completed;

    let checkbox = if completed { "[✓]" } else { "[ ]" };
    render_cell(frame, cells.checkbox, Span::styled(checkbox, theme::checkbox(completed)), base);

    if row.is_editing {
        let text = field_line(
            app.store.edit_buffer(),
            app.edit_cursor,
            cells.text.width,
            app.focus == PanelFocus::Tasks,
        );
        frame.render_widget(Paragraph::new(text).style(theme::edit_field()), cells.text);
    } else {
        let text = Span::styled(row.task.text.as_str(), theme::task_text(completed));
        render_cell(frame, cells.text, text, base);
    }

    let action = if row.is_editing { SAVE_GLYPH } else { EDIT_GLYPH };
    render_cell(frame, cells.edit, Span::styled(format!(" {action}"), theme::icon()), base);
    render_cell(frame, cells.delete, Span::styled(format!(" {DELETE_GLYPH}"), theme::icon()), base);
}

fn render_cell(frame: &mut Frame, area: Rect, span: Span<'_>, base: Style) {
    frame.render_widget(Paragraph::new(Line::from(span)).style(base), area);
}
