//! Integration tests for the keyboard-driven task list.
//!
//! # Verification Focus
//!
//! - Adding tasks from the input (blank input skipped, input cleared on add)
//! - Toggling completion, including mid-edit
//! - Edit / save / cancel through the edit buffer
//! - Locked edits raise a blocking notice that swallows the next key
//! - Deleting keeps order and clamps the selection
//! - Only one task editing at a time
//! - Control and Alt chords never land in a text field

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tudu::app::{App, PanelFocus};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn chord(app: &mut App, c: char, modifiers: KeyModifiers) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), modifiers));
}

fn add(app: &mut App, text: &str) {
    app.focus = PanelFocus::Input;
    type_str(app, text);
    press(app, KeyCode::Enter);
}

fn texts(app: &App) -> Vec<&str> {
    app.store.tasks().iter().map(|t| t.text.as_str()).collect()
}

// =============================================================================
// Adding
// =============================================================================

#[test]
fn test_add_task_from_input() {
    let mut app = App::new();
    add(&mut app, "Buy milk");

    assert_eq!(app.store.len(), 1);
    let task = &app.store.tasks()[0];
    assert_eq!(task.text, "Buy milk");
    assert!(!task.is_completed);
    assert!(!app.store.is_editing(&task.id));
    assert!(app.input.is_empty(), "input should be cleared after add");
    assert_eq!(app.cursor_position, 0);
}

#[test]
fn test_blank_input_is_skipped_and_kept() {
    let mut app = App::new();
    add(&mut app, "   ");

    assert!(app.store.is_empty(), "whitespace-only input must not add");
    assert_eq!(app.input, "   ", "input is only cleared when a task is added");
    assert!(app.notice.is_none(), "blank input is silent");
}

#[test]
fn test_tasks_append_in_order() {
    let mut app = App::new();
    add(&mut app, "one");
    add(&mut app, "two");
    add(&mut app, "three");

    assert_eq!(texts(&app), ["one", "two", "three"]);
    assert_eq!(app.selected_task, 2, "new task becomes the selection");
}

// =============================================================================
// Toggling
// =============================================================================

#[test]
fn test_space_toggles_selected_task() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char(' '));

    assert!(app.store.tasks()[0].is_completed);
    assert!(!app.store.tasks()[1].is_completed);

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.store.tasks()[0].is_completed, "second toggle restores");
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn test_edit_then_save() {
    let mut app = App::new();
    add(&mut app, "old text");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));

    let id = app.store.tasks()[0].id;
    assert!(app.store.is_editing(&id));
    assert_eq!(app.store.edit_buffer(), "old text");

    for _ in 0.."old text".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_str(&mut app, "new text");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.tasks()[0].text, "new text");
    assert!(!app.store.is_editing(&id));
    assert_eq!(app.store.edit_buffer(), "");
}

#[test]
fn test_keys_while_editing_go_to_buffer() {
    let mut app = App::new();
    add(&mut app, "task");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    // 'q', 'd' and 'x' are list shortcuts, but here they are text.
    type_str(&mut app, " qdx");

    assert!(!app.should_quit);
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.edit_buffer(), "task qdx");
}

#[test]
fn test_edit_cursor_moves_within_buffer() {
    let mut app = App::new();
    add(&mut app, "buy milk");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    // Fix a typo in the middle without retyping the tail.
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Delete);
    type_str(&mut app, "get");
    press(&mut app, KeyCode::End);
    type_str(&mut app, "!");
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.tasks()[0].text, "get mik!");
}

#[test]
fn test_reopened_edit_cursor_starts_at_end() {
    let mut app = App::new();
    add(&mut app, "one");
    add(&mut app, "three");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "!");
    assert_eq!(app.store.edit_buffer(), "three!");
    assert_eq!(app.edit_cursor, 6);
}

#[test]
fn test_empty_save_is_allowed() {
    let mut app = App::new();
    add(&mut app, "ab");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.tasks()[0].text, "");
    assert!(!app.is_editing());
}

#[test]
fn test_escape_cancels_edit_without_quitting() {
    let mut app = App::new();
    add(&mut app, "keep me");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, " changed");
    press(&mut app, KeyCode::Esc);

    assert!(!app.should_quit);
    assert!(!app.is_editing());
    assert_eq!(app.store.tasks()[0].text, "keep me");
}

#[test]
fn test_editing_second_task_cancels_first() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    let (a, b) = (app.store.tasks()[0].id, app.store.tasks()[1].id);

    app.dispatch(tudu_core::Command::Edit(a));
    app.store.set_edit_buffer("a edited");
    app.dispatch(tudu_core::Command::Edit(b));

    assert!(!app.store.is_editing(&a));
    assert!(app.store.is_editing(&b));
    assert_eq!(app.selected_task, 1);
    assert_eq!(app.store.tasks()[0].text, "a", "discarded edit is not saved");
    assert_eq!(app.store.rows().filter(|r| r.is_editing).count(), 1);
}

// =============================================================================
// Modifier chords
// =============================================================================

#[test]
fn test_chords_are_not_typed_into_input() {
    let mut app = App::new();
    chord(&mut app, 'a', KeyModifiers::CONTROL);
    chord(&mut app, 'w', KeyModifiers::ALT);
    chord(&mut app, 'x', KeyModifiers::CONTROL | KeyModifiers::SHIFT);

    assert!(app.input.is_empty(), "chords must not insert characters");
    assert_eq!(app.cursor_position, 0);
    assert!(!app.should_quit);

    chord(&mut app, 'B', KeyModifiers::SHIFT);
    assert_eq!(app.input, "B", "shifted characters are still text");
}

#[test]
fn test_chords_are_not_typed_into_edit_buffer() {
    let mut app = App::new();
    add(&mut app, "task");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    chord(&mut app, 's', KeyModifiers::CONTROL);
    chord(&mut app, 'd', KeyModifiers::ALT);

    assert!(app.is_editing());
    assert_eq!(app.store.edit_buffer(), "task");
    assert_eq!(app.store.len(), 1);
}

// =============================================================================
// Locked edits
// =============================================================================

#[test]
fn test_edit_completed_task_shows_notice() {
    let mut app = App::new();
    add(&mut app, "finished");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('e'));

    assert_eq!(
        app.notice.as_deref(),
        Some("Task is already completed and cannot be edited.")
    );
    assert!(!app.is_editing());
    assert_eq!(app.store.tasks()[0].text, "finished");
}

#[test]
fn test_notice_swallows_next_key() {
    let mut app = App::new();
    add(&mut app, "finished");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('e'));
    assert!(app.notice.is_some());

    // 'd' would delete, but it only dismisses the notice.
    press(&mut app, KeyCode::Char('d'));
    assert!(app.notice.is_none());
    assert_eq!(app.store.len(), 1);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.store.is_empty());
}

#[test]
fn test_ctrl_c_quits_even_with_notice() {
    let mut app = App::new();
    app.notice = Some("blocking".to_string());
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

// =============================================================================
// Deleting
// =============================================================================

#[test]
fn test_delete_keeps_order_of_others() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    add(&mut app, "c");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Delete);

    assert_eq!(texts(&app), ["a", "c"]);
    assert_eq!(app.selected_task, 1);
}

#[test]
fn test_delete_on_empty_list_is_noop() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('e'));

    assert!(app.store.is_empty());
    assert!(app.notice.is_none());
}

// =============================================================================
// Navigation and quitting
// =============================================================================

#[test]
fn test_selection_stays_in_bounds() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_task, 1);
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.selected_task, 0);
}

#[test]
fn test_a_returns_to_input() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.focus, PanelFocus::Input);
    assert!(app.input.is_empty());
}

#[test]
fn test_escape_quits_from_input_and_q_from_list() {
    let mut app = App::new();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);

    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
