//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both the renderer and the click handler derive every region from the
//! terminal area through this module, so a click always lands on what was
//! drawn there.

use std::ops::Range;

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Width of the "Add Task" button, borders included.
pub const ADD_BUTTON_WIDTH: u16 = 14;

/// Regions of the full screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// New-task text input (with border).
    pub input: Rect,
    /// "Add Task" button (with border).
    pub add_button: Rect,
    /// Task list block (with border).
    pub list: Rect,
    /// Task rows area inside the list border.
    pub rows: Rect,
    /// Status bar.
    pub status: Rect,
}

impl ScreenLayout {
    /// Split `area` into the screen regions.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input row
                Constraint::Min(3),    // Tasks
                Constraint::Length(1), // Status
            ])
            .split(area);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON_WIDTH)])
            .split(chunks[1]);

        let list = chunks[2];

        Self {
            title: chunks[0],
            input: input_row[0],
            add_button: input_row[1],
            list,
            rows: list.inner(Margin::new(1, 1)),
            status: chunks[3],
        }
    }
}

/// Regions of a single task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// `[ ]` / `[✓]` checkbox.
    pub checkbox: Rect,
    /// Task text or edit field.
    pub text: Rect,
    /// Edit / save glyph.
    pub edit: Rect,
    /// Delete glyph.
    pub delete: Rect,
}

impl RowLayout {
    /// Split one row into its controls.
    #[must_use]
    pub fn new(row: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(row);

        Self {
            checkbox: chunks[0],
            text: chunks[1],
            edit: chunks[2],
            delete: chunks[3],
        }
    }
}

/// Something on screen a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The new-task input box.
    Input,
    /// The "Add Task" button.
    AddButton,
    /// Checkbox of the task at this index.
    Checkbox(usize),
    /// Text (or edit field) of the task at this index.
    Text(usize),
    /// Edit/save glyph of the task at this index.
    EditSave(usize),
    /// Delete glyph of the task at this index.
    Delete(usize),
}

/// Indices of the tasks that fit in `height` rows, keeping `selected` visible.
#[must_use]
pub fn visible_range(total: usize, selected: usize, height: u16) -> Range<usize> {
    let height = usize::from(height);
    if height == 0 || total == 0 {
        return 0..0;
    }
    let start = selected.min(total - 1).saturating_sub(height - 1);
    start..total.min(start + height)
}

/// Screen rectangle for each visible task, paired with its index.
pub fn row_rects(rows: Rect, range: Range<usize>) -> impl Iterator<Item = (usize, Rect)> {
    let first = range.start;
    range.map(move |idx| {
        // visible_range never yields more indices than `rows.height`.
        let offset = u16::try_from(idx - first).unwrap_or(u16::MAX);
        (idx, Rect::new(rows.x, rows.y.saturating_add(offset), rows.width, 1))
    })
}

/// Resolve a click at (`column`, `row`) on a screen of size `area`.
#[must_use]
pub fn hit_test(
    area: Rect,
    total: usize,
    selected: usize,
    column: u16,
    row: u16,
) -> Option<HitTarget> {
    let screen = ScreenLayout::new(area);
    let pos = Position::new(column, row);

    if screen.input.contains(pos) {
        return Some(HitTarget::Input);
    }
    if screen.add_button.contains(pos) {
        return Some(HitTarget::AddButton);
    }
    if !screen.rows.contains(pos) {
        return None;
    }

    let range = visible_range(total, selected, screen.rows.height);
    let (idx, rect) = row_rects(screen.rows, range).find(|(_, rect)| rect.contains(pos))?;
    let cells = RowLayout::new(rect);
    if cells.checkbox.contains(pos) {
        Some(HitTarget::Checkbox(idx))
    } else if cells.edit.contains(pos) {
        Some(HitTarget::EditSave(idx))
    } else if cells.delete.contains(pos) {
        Some(HitTarget::Delete(idx))
    } else {
        Some(HitTarget::Text(idx))
    }
}
