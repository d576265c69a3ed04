//! To-do domain model.
//!
//! # Responsibility
//! - Define the task record persisted by the task store.
//! - Define the closed set of list filters exposed to view callers.
//!
//! # Invariants
//! - Every task is identified by an opaque, immutable `TaskId`.
//! - Insertion order of the task list is the display order.

pub mod task;
