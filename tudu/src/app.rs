//! Application state and event handling.
//!
//! `App` owns the [`TaskStore`] and the UI-only state around it (the new-task
//! input, focus, selection, the blocking notice). Key presses and clicks are
//! translated into [`Command`] values and dispatched to the store.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tudu_core::{Command, Outcome, TaskId, TaskStore};

use crate::text_input;
use crate::ui::layout::{self, HitTarget};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
}

/// Main application state.
pub struct App {
    /// Staged text for the next task.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Tasks and the active edit.
    pub store: TaskStore,
    /// Cursor position in the edit buffer (character index).
    pub edit_cursor: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the task list.
    pub selected_task: usize,
    /// Blocking notice; while set, the next key or click only dismisses it.
    pub notice: Option<String>,
    /// Heading shown in the title bar.
    pub title: String,
    /// Placeholder for the empty input.
    pub placeholder: String,
    /// Terminal area of the last drawn frame, used for mouse hit-testing.
    pub viewport: Rect,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an application with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            store: TaskStore::new(),
            edit_cursor: 0,
            focus: PanelFocus::Input,
            selected_task: 0,
            notice: None,
            title: "To-Do List".to_string(),
            placeholder: "Add a new task...".to_string(),
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Set the title bar heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the input placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Apply a command to the store.
    ///
    /// A locked edit raises the blocking notice instead of changing state.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match self.store.dispatch(command) {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Added(_) => {
                        self.selected_task = self.store.len().saturating_sub(1);
                    }
                    Outcome::EditStarted(id) => {
                        self.edit_cursor = self.store.edit_buffer().chars().count();
                        self.focus = PanelFocus::Tasks;
                        self.select_id(id);
                    }
                    _ => {}
                }
                self.clamp_selection();
                outcome
            }
            Err(err) => {
                tracing::info!(%err, "edit rejected");
                self.notice = Some(err.to_string());
                Outcome::Unchanged
            }
        }
    }

    /// Id of the selected task, if the list is not empty.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.store.tasks().get(self.selected_task).map(|task| task.id)
    }

    /// Whether a task edit is in progress.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.store.active_edit().is_some()
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        if self.notice.take().is_some() {
            return;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.toggle_focus();
            return;
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks if self.is_editing() => self.handle_edit_key(key),
            PanelFocus::Tasks => self.handle_task_key(key),
        }
    }

    /// Handle a mouse event. Only left clicks and the scroll wheel matter.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollUp if self.notice.is_none() => {
                self.prev_task();
                return;
            }
            MouseEventKind::ScrollDown if self.notice.is_none() => {
                self.next_task();
                return;
            }
            _ => return,
        }

        if self.notice.take().is_some() {
            return;
        }

        let Some(target) = layout::hit_test(
            self.viewport,
            self.store.len(),
            self.selected_task,
            mouse.column,
            mouse.row,
        ) else {
            return;
        };
        tracing::trace!(?target, "click");

        match target {
            HitTarget::Input => self.focus = PanelFocus::Input,
            HitTarget::AddButton => self.submit_task(),
            HitTarget::Checkbox(idx) => {
                if let Some(id) = self.focus_row(idx) {
                    self.dispatch(Command::Toggle(id));
                }
            }
            HitTarget::Text(idx) => {
                // The edit field of the row being edited is not a toggle.
                if let Some(id) = self.focus_row(idx)
                    && !self.store.is_editing(&id)
                {
                    self.dispatch(Command::Toggle(id));
                }
            }
            HitTarget::EditSave(idx) => {
                if let Some(id) = self.focus_row(idx) {
                    self.edit_or_save(id);
                }
            }
            HitTarget::Delete(idx) => {
                if let Some(id) = self.focus_row(idx) {
                    self.dispatch(Command::Delete(id));
                }
            }
        }
    }

    /// Handle key event when the new-task input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Esc => self.should_quit = true,
            _ => {
                text_input::apply_key(&mut self.input, &mut self.cursor_position, key);
            }
        }
    }

    /// Handle key event when the task list is focused and nothing is being edited.
    fn handle_task_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.prev_task(),
            KeyCode::Down | KeyCode::Char('j') => self.next_task(),
            KeyCode::Home | KeyCode::Char('g') => self.selected_task = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected_task = self.store.len().saturating_sub(1);
            }
            KeyCode::Char(' ' | 'x') => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Command::Toggle(id));
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Command::Edit(id));
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Command::Delete(id));
                }
            }
            KeyCode::Char('a' | 'i') => self.focus = PanelFocus::Input,
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle key event while a task is being edited.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(id) = self.store.active_edit().map(|edit| edit.id) else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                self.dispatch(Command::Save(id));
            }
            KeyCode::Esc => {
                self.dispatch(Command::CancelEdit);
            }
            _ => {
                if let Some(buffer) = self.store.edit_buffer_mut() {
                    text_input::apply_key(buffer, &mut self.edit_cursor, key);
                }
            }
        }
    }

    /// Submit the staged input as a new task; the input is cleared only if
    /// a task was added.
    fn submit_task(&mut self) {
        let outcome = self.dispatch(Command::Add(self.input.clone()));
        if let Outcome::Added(id) = outcome {
            tracing::info!(%id, "task added");
            self.input.clear();
            self.cursor_position = 0;
        }
    }

    /// Start editing `id`, or save it if it is already being edited.
    fn edit_or_save(&mut self, id: TaskId) {
        if self.store.is_editing(&id) {
            self.dispatch(Command::Save(id));
        } else {
            self.dispatch(Command::Edit(id));
        }
    }

    /// Select the row at `idx` and focus the list; returns its task id.
    fn focus_row(&mut self, idx: usize) -> Option<TaskId> {
        let id = self.store.tasks().get(idx)?.id;
        self.selected_task = idx;
        self.focus = PanelFocus::Tasks;
        Some(id)
    }

    fn select_id(&mut self, id: &TaskId) {
        if let Some(idx) = self.store.tasks().iter().position(|task| task.id == *id) {
            self.selected_task = idx;
        }
    }

    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    fn clamp_selection(&mut self) {
        self.selected_task = self
            .selected_task
            .min(self.store.len().saturating_sub(1));
    }

    const fn prev_task(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    fn next_task(&mut self) {
        if self.selected_task < self.store.len().saturating_sub(1) {
            self.selected_task += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
