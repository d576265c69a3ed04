//! Core to-do list management.
//! This crate owns the task list invariants and their persistence.

pub mod db;
pub mod format;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use format::{
    display_task, display_tasks, format_due_date, format_status, format_task, TaskDisplay,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{new_task_id, StatusFilter, Task, TaskId};
pub use service::task_store::{
    StoreError, StoreResult, TaskStore, TaskStoreConfig, DEFAULT_STORAGE_KEY,
};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
