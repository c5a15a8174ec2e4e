//! Task store: the ordered task collection plus the active-edit slot.
//!
//! `TaskStore` provides the only mutation paths for tasks. Tasks are kept
//! in insertion order and are never resorted.

use crate::TaskError;
use crate::command::{Command, Outcome};
use crate::task::{ActiveEdit, Task, TaskId, TaskRow};

/// Holds the task list and the single shared edit buffer.
///
/// The edit buffer is an `Option<ActiveEdit>`, so at most one task can be
/// editing at any time. Starting an edit on another task replaces (and
/// discards) the previous one.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    active_edit: Option<ActiveEdit>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task unless `input` is blank.
    ///
    /// The text is stored as given (not trimmed). Returns the new id, or
    /// `None` when the input was empty or whitespace-only.
    pub fn add_task(&mut self, input: &str) -> Option<TaskId> {
        if input.trim().is_empty() {
            tracing::debug!("ignoring blank task input");
            return None;
        }
        let task = Task::new(input);
        let id = task.id;
        self.tasks.push(task);
        tracing::debug!(%id, "task added");
        Some(id)
    }

    /// Removes the task with the given id and returns it.
    ///
    /// Unknown ids leave the store untouched. Deleting the task being
    /// edited also drops the active edit.
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(%id, "delete: no such task");
            return None;
        };
        if self.is_editing(id) {
            self.active_edit = None;
        }
        let task = self.tasks.remove(pos);
        tracing::debug!(%id, "task deleted");
        Some(task)
    }

    /// Flips completion and ends editing on that task.
    ///
    /// Returns the new completion state, or `None` for an unknown id.
    pub fn toggle_complete(&mut self, id: &TaskId) -> Option<bool> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(%id, "toggle: no such task");
            return None;
        };
        if self.is_editing(id) {
            self.active_edit = None;
        }
        let task = &mut self.tasks[pos];
        task.is_completed = !task.is_completed;
        tracing::debug!(%id, completed = task.is_completed, "task toggled");
        Some(task.is_completed)
    }

    /// Starts editing a task, loading its current text into the buffer.
    ///
    /// Any edit already in progress on another task is discarded. Unknown
    /// ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Locked`] if the task is completed; the store is
    /// left unchanged.
    pub fn start_editing(&mut self, id: &TaskId) -> Result<(), TaskError> {
        let Some(task) = self.get(id) else {
            tracing::debug!(%id, "edit: no such task");
            return Ok(());
        };
        if task.is_completed {
            return Err(TaskError::Locked(*id));
        }
        let buffer = task.text.clone();
        if let Some(previous) = self.active_edit.as_ref().filter(|edit| edit.id != *id) {
            tracing::debug!(id = %previous.id, "discarding previous edit");
        }
        self.active_edit = Some(ActiveEdit { id: *id, buffer });
        tracing::debug!(%id, "edit started");
        Ok(())
    }

    /// Writes the edit buffer into the task and ends editing.
    ///
    /// Empty text is accepted. If `id` does not own the active edit,
    /// nothing changes. Returns whether a save happened.
    pub fn save_task(&mut self, id: &TaskId) -> bool {
        if !self.is_editing(id) {
            tracing::debug!(%id, "save: task is not being edited");
            return false;
        }
        let (Some(pos), Some(edit)) = (self.position(id), self.active_edit.take()) else {
            return false;
        };
        self.tasks[pos].text = edit.buffer;
        tracing::debug!(%id, "task saved");
        true
    }

    /// Drops the active edit without touching the task text.
    ///
    /// Returns the id that was being edited, if any.
    pub fn cancel_edit(&mut self) -> Option<TaskId> {
        let edit = self.active_edit.take()?;
        tracing::debug!(id = %edit.id, "edit cancelled");
        Some(edit.id)
    }

    /// Applies a [`Command`] and reports what changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Locked`] when [`Command::Edit`] targets a
    /// completed task.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, TaskError> {
        let outcome = match command {
            Command::Add(text) => self.add_task(&text).map_or(Outcome::Unchanged, Outcome::Added),
            Command::Toggle(id) => self
                .toggle_complete(&id)
                .map_or(Outcome::Unchanged, |completed| Outcome::Toggled { id, completed }),
            Command::Edit(id) => {
                self.start_editing(&id)?;
                if self.is_editing(&id) {
                    Outcome::EditStarted(id)
                } else {
                    Outcome::Unchanged
                }
            }
            Command::Save(id) => {
                if self.save_task(&id) {
                    Outcome::Saved(id)
                } else {
                    Outcome::Unchanged
                }
            }
            Command::Delete(id) => self
                .delete_task(&id)
                .map_or(Outcome::Unchanged, |task| Outcome::Deleted(task.id)),
            Command::CancelEdit => self
                .cancel_edit()
                .map_or(Outcome::Unchanged, Outcome::EditCancelled),
        };
        Ok(outcome)
    }

    /// Current edit buffer contents, or `""` when nothing is being edited.
    #[must_use]
    pub fn edit_buffer(&self) -> &str {
        self.active_edit.as_ref().map_or("", |edit| edit.buffer.as_str())
    }

    /// Mutable access to the edit buffer, if an edit is active.
    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        self.active_edit.as_mut().map(|edit| &mut edit.buffer)
    }

    /// Replaces the edit buffer contents. No-op when nothing is being edited.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let Some(buffer) = self.edit_buffer_mut() {
            *buffer = text.into();
        }
    }

    /// The active edit, if any.
    #[must_use]
    pub const fn active_edit(&self) -> Option<&ActiveEdit> {
        self.active_edit.as_ref()
    }

    /// Whether `id` owns the active edit.
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.active_edit.as_ref().is_some_and(|edit| edit.id == *id)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks joined with their editing state, in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = TaskRow<'_>> {
        self.tasks.iter().map(|task| TaskRow {
            task,
            is_editing: self.is_editing(&task.id),
        })
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed).count()
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == *id)
    }
}
