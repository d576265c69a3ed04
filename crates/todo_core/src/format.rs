//! Display normalization for task fields.
//!
//! # Responsibility
//! - Map raw task text, due date and completion flag to display strings.
//! - Project task records into view-ready rows.
//!
//! # Invariants
//! - All functions are pure and total; no input is rejected.
//! - Truncation counts chars, never splitting a code point.

use crate::model::task::{Task, TaskId};

/// Max task text length kept before the ellipsis marker.
pub const MAX_TASK_CHARS: usize = 14;
/// Appended to task text longer than `MAX_TASK_CHARS`.
pub const ELLIPSIS: &str = "...";
/// Shown when a task has no due date.
pub const NO_DUE_DATE: &str = "No due date";
/// Status label for completed tasks.
pub const STATUS_COMPLETED: &str = "Completed";
/// Status label for open tasks.
pub const STATUS_PENDING: &str = "Pending";

/// Truncates task text to `MAX_TASK_CHARS` chars plus `...`.
///
/// Text of `MAX_TASK_CHARS` chars or fewer is returned unchanged.
pub fn format_task(text: &str) -> String {
    if text.chars().count() > MAX_TASK_CHARS {
        let mut truncated = text.chars().take(MAX_TASK_CHARS).collect::<String>();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    }
}

/// Returns `date`, or `No due date` when it is empty.
pub fn format_due_date(date: &str) -> String {
    if date.is_empty() {
        NO_DUE_DATE.to_string()
    } else {
        date.to_string()
    }
}

/// Returns the status label for a completion flag.
pub fn format_status(completed: bool) -> &'static str {
    if completed {
        STATUS_COMPLETED
    } else {
        STATUS_PENDING
    }
}

/// View-ready projection of one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDisplay {
    /// Raw id, used by views to address row actions.
    pub id: TaskId,
    pub task: String,
    pub due_date: String,
    pub status: &'static str,
}

/// Formats one task for display.
pub fn display_task(task: &Task) -> TaskDisplay {
    TaskDisplay {
        id: task.id.clone(),
        task: format_task(&task.task),
        due_date: format_due_date(&task.due_date),
        status: format_status(task.completed),
    }
}

/// Formats a task list for display, preserving order.
pub fn display_tasks(tasks: &[Task]) -> Vec<TaskDisplay> {
    tasks.iter().map(display_task).collect()
}
