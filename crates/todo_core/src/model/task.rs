//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record and its JSON wire shape.
//! - Define `StatusFilter` used by list queries.
//!
//! # Invariants
//! - `id` is assigned once at creation and never rewritten.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = String;

/// Generates a fresh task id.
///
/// Uses a random 128-bit UUID in simple (32 hex chars) form. No uniqueness
/// check is performed against existing records.
pub fn new_task_id() -> TaskId {
    Uuid::new_v4().simple().to_string()
}

/// One to-do entry.
///
/// Field names on the wire follow the persisted list format:
/// `id`, `task`, `dueDate`, `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id, unique within one task list.
    pub id: TaskId,
    /// Task description, already normalized for display.
    pub task: String,
    /// Due date text, or the `No due date` sentinel.
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a pending task with a generated id.
    ///
    /// Text is stored as given; normalization is the caller's job.
    pub fn new(task: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self::with_id(new_task_id(), task, due_date)
    }

    /// Creates a pending task with a caller-provided id.
    pub fn with_id(
        id: impl Into<TaskId>,
        task: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            due_date: due_date.into(),
            completed: false,
        }
    }

    /// Flips completion state.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns whether the task is still open.
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// List filter for task queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every task, unfiltered. Fallback for unrecognized input.
    #[default]
    All,
    /// Tasks with `completed == false`.
    Pending,
    /// Tasks with `completed == true`.
    Completed,
}

impl StatusFilter {
    /// Parses a filter name.
    ///
    /// `pending` and `completed` are matched case-insensitively after
    /// trimming; any other value (including `all`) maps to `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns whether `task` passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{new_task_id, StatusFilter, Task};

    #[test]
    fn new_task_id_is_32_hex_chars() {
        let id = new_task_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn status_filter_parse_falls_back_to_all() {
        assert_eq!(StatusFilter::parse("pending"), StatusFilter::Pending);
        assert_eq!(StatusFilter::parse(" Completed "), StatusFilter::Completed);
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("archived"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(""), StatusFilter::All);
    }

    #[test]
    fn toggle_flips_completed() {
        let mut task = Task::with_id("a", "x", "");
        task.toggle();
        assert!(task.completed);
        assert!(!task.is_pending());
    }
}
