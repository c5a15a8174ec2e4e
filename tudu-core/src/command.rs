//! Commands sent from the view to the store, and what they changed.

use crate::task::TaskId;

/// A user intent, decoupled from the widget that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a task with the given text.
    Add(String),
    /// Flip completion; also ends any edit on that task.
    Toggle(TaskId),
    /// Load the task's text into the edit buffer.
    Edit(TaskId),
    /// Write the edit buffer back to the task.
    Save(TaskId),
    /// Remove the task.
    Delete(TaskId),
    /// Drop the active edit without saving.
    CancelEdit,
}

/// Result of a dispatched [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new task was appended.
    Added(TaskId),
    /// Completion was flipped to `completed`.
    Toggled {
        /// Task that changed.
        id: TaskId,
        /// New completion state.
        completed: bool,
    },
    /// The task now owns the edit buffer.
    EditStarted(TaskId),
    /// The buffer was written to the task.
    Saved(TaskId),
    /// The task was removed.
    Deleted(TaskId),
    /// The active edit was dropped.
    EditCancelled(TaskId),
    /// Nothing changed (blank input, unknown id, or no active edit).
    Unchanged,
}

impl Outcome {
    /// Whether the command modified the store.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}
