//! Task record types for `tudu`.
//!
//! A [`Task`] carries its identity, text, and completion flag. Whether a
//! task is being edited is not stored on the record itself: the store owns a
//! single [`ActiveEdit`] slot, and [`TaskRow`] joins the two for rendering.

use uuid::Uuid;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique task identifier, assigned at creation.
    pub id: TaskId,
    /// User-entered text. May be empty after an empty save.
    pub text: String,
    /// Completed tasks are locked against editing.
    pub is_completed: bool,
}

impl Task {
    /// Creates an open task with a fresh identifier.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            is_completed: false,
        }
    }
}

/// The in-progress edit: which task owns the buffer, and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEdit {
    /// Task being edited.
    pub id: TaskId,
    /// Text being composed; replaces the task text on save.
    pub buffer: String,
}

/// Read-only view of a task joined with its editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRow<'a> {
    /// The underlying record.
    pub task: &'a Task,
    /// Whether this task owns the active edit.
    pub is_editing: bool,
}
