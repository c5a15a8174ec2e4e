//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Screen background (pale blue-grey).
pub const BACKGROUND: Color = Color::Rgb(0xB2, 0xC4, 0xD4);

/// Slate used for the title bar, borders, and the add button.
pub const SLATE: Color = Color::Rgb(0x39, 0x4F, 0x64);

/// Row background (half-transparent white over the screen background).
pub const ROW_BG: Color = Color::Rgb(0xD8, 0xE1, 0xE9);

/// Primary text color.
pub const FG_PRIMARY: Color = Color::Rgb(0x33, 0x33, 0x33);

/// Completed task text color.
pub const FG_COMPLETED: Color = Color::Rgb(0x99, 0x99, 0x99);

/// Checked checkbox color.
pub const CHECKED: Color = Color::Rgb(0x4C, 0xAF, 0x50);

/// Icon color for the edit, save, and delete glyphs.
pub const ICON: Color = Color::Rgb(0x0F, 0x30, 0x50);

/// Highlight color for the selected row and focused borders.
pub const HIGHLIGHT: Color = Color::Rgb(0x5B, 0x7A, 0x99);

/// Notice popup border color.
pub const WARNING: Color = Color::Rgb(0xC6, 0x28, 0x28);

/// Whole-screen base style.
#[must_use]
pub fn screen() -> Style {
    Style::default().fg(FG_PRIMARY).bg(BACKGROUND)
}

/// Title bar text (bold white on slate).
#[must_use]
pub fn title_bar() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(SLATE)
        .add_modifier(Modifier::BOLD)
}

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Placeholder and help text.
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_COMPLETED)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// White input field background.
#[must_use]
pub fn input_field() -> Style {
    Style::default().fg(FG_PRIMARY).bg(Color::White)
}

/// Border style for a panel, brighter when focused.
#[must_use]
pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SLATE)
    }
}

/// "Add Task" button (white on slate).
#[must_use]
pub fn button() -> Style {
    Style::default().fg(Color::White).bg(SLATE)
}

/// Background of an unselected task row.
#[must_use]
pub fn row() -> Style {
    Style::default().fg(FG_PRIMARY).bg(ROW_BG)
}

/// Background of the selected task row.
#[must_use]
pub fn selected_row() -> Style {
    Style::default().fg(Color::White).bg(HIGHLIGHT)
}

/// Task text; struck through and greyed out when completed.
#[must_use]
pub fn task_text(completed: bool) -> Style {
    if completed {
        Style::default()
            .fg(FG_COMPLETED)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(FG_PRIMARY)
    }
}

/// Checkbox glyph style.
#[must_use]
pub fn checkbox(checked: bool) -> Style {
    if checked {
        Style::default().fg(CHECKED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SLATE)
    }
}

/// Edit, save, and delete glyphs.
#[must_use]
pub fn icon() -> Style {
    Style::default().fg(ICON).add_modifier(Modifier::BOLD)
}

/// Edit field inside a row being edited.
#[must_use]
pub fn edit_field() -> Style {
    Style::default()
        .fg(FG_PRIMARY)
        .bg(Color::White)
        .add_modifier(Modifier::UNDERLINED)
}

/// Input cursor block.
#[must_use]
pub fn input_cursor() -> Style {
    Style::default().fg(SLATE).add_modifier(Modifier::BOLD)
}

/// Status bar (white on slate).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(SLATE)
}

/// Notice popup border.
#[must_use]
pub fn notice_border() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
}
