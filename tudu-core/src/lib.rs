//! Task list store for `tudu`.
//!
//! Owns the ordered task collection and the single active-edit slot, and
//! exposes the only legal mutation paths. Every operation is a synchronous,
//! complete state transition or a no-op.

pub mod command;
pub mod store;
pub mod task;

pub use command::{Command, Outcome};
pub use store::TaskStore;
pub use task::{ActiveEdit, Task, TaskId, TaskRow};

use thiserror::Error;

/// Errors that can occur during task operations.
///
/// Unknown ids and blank input are not errors: those operations are
/// silent no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Editing was attempted on a completed task.
    #[error("Task is already completed and cannot be edited.")]
    Locked(TaskId),
}
