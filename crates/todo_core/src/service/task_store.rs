//! Task store use-case service.
//!
//! # Responsibility
//! - Own the in-memory task list and its write-through persistence.
//! - Normalize task text and due dates through `format` on every write.
//! - Answer filtered list queries for view callers.
//!
//! # Invariants
//! - After every mutating call returns `Ok`, the persisted list equals the
//!   in-memory list.
//! - A failed write leaves the in-memory list at its last persisted state.
//! - Missing ids are never errors; only storage and encoding failures are.
//! - A malformed persisted payload loads as an empty list.

use crate::format::{format_due_date, format_task};
use crate::model::task::{StatusFilter, Task};
use crate::storage::{KeyValueStore, StorageError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key used when no explicit config is given.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Task store failure. Never raised for missing ids or corrupt saved data.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Task store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Key the serialized task list lives under.
    pub storage_key: String,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Task list owner with synchronous write-through persistence.
pub struct TaskStore<S: KeyValueStore> {
    storage: S,
    storage_key: String,
    todos: Vec<Task>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads the task list from `storage` under the default key.
    ///
    /// # Errors
    /// - Returns `StoreError::Storage` when the backend read fails.
    pub fn load(storage: S) -> StoreResult<Self> {
        Self::with_config(storage, TaskStoreConfig::default())
    }

    /// Loads the task list from `storage` using `config`.
    ///
    /// An absent or unparsable payload yields an empty list.
    pub fn with_config(storage: S, config: TaskStoreConfig) -> StoreResult<Self> {
        let todos = match storage.get(&config.storage_key)? {
            Some(payload) => decode_task_list(&payload),
            None => {
                debug!("event=tasks_load module=service status=ok source=empty count=0");
                Vec::new()
            }
        };

        Ok(Self {
            storage,
            storage_key: config.storage_key,
            todos,
        })
    }

    /// Creates a pending task and persists the list.
    ///
    /// # Contract
    /// - `task` is truncated via `format_task`.
    /// - `due_date` is normalized via `format_due_date`.
    /// - Empty `task` is accepted; input validation belongs to callers.
    pub fn add_todo(&mut self, task: &str, due_date: &str) -> StoreResult<Task> {
        let todo = Task::new(format_task(task), format_due_date(due_date));

        let mut next = self.todos.clone();
        next.push(todo.clone());
        self.commit(next)?;

        info!(
            "event=task_add module=service status=ok count={}",
            self.todos.len()
        );
        Ok(todo)
    }

    /// Replaces the text of the first task with `id`.
    ///
    /// Text is normalized the same way as on creation. Returns `None`
    /// without writing when no task matches.
    pub fn edit_todo(&mut self, id: &str, updated_task: &str) -> StoreResult<Option<Task>> {
        self.update_first(id, |todo| todo.task = format_task(updated_task))
    }

    /// Removes every task with `id`. Persists even when nothing matched.
    pub fn delete_todo(&mut self, id: &str) -> StoreResult<()> {
        let next = self
            .todos
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect::<Vec<_>>();
        let removed = self.todos.len() - next.len();
        self.commit(next)?;

        info!(
            "event=task_delete module=service status=ok removed={} count={}",
            removed,
            self.todos.len()
        );
        Ok(())
    }

    /// Flips completion of the first task with `id`.
    ///
    /// Returns the updated task, or `None` without writing when no task
    /// matches.
    pub fn toggle_status(&mut self, id: &str) -> StoreResult<Option<Task>> {
        self.update_first(id, Task::toggle)
    }

    /// Removes all tasks. Persists unconditionally.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        let removed = self.todos.len();
        self.commit(Vec::new())?;
        info!("event=task_clear module=service status=ok removed={removed}");
        Ok(())
    }

    /// Returns tasks passing `filter`, in insertion order.
    ///
    /// Accepts a `StatusFilter` or a filter name; unknown names list all.
    pub fn filter_todos(&self, filter: impl Into<StatusFilter>) -> Vec<Task> {
        let filter = filter.into();
        self.todos
            .iter()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect()
    }

    /// Full task list in insertion order.
    pub fn todos(&self) -> &[Task] {
        &self.todos
    }

    /// First task with `id`.
    pub fn find_todo(&self, id: &str) -> Option<&Task> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Number of tasks in the list.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the list has no tasks.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Injected persistence backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Key the task list is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn update_first(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut Task),
    ) -> StoreResult<Option<Task>> {
        let Some(index) = self.todos.iter().position(|todo| todo.id == id) else {
            debug!("event=task_update module=service status=skipped reason=not_found");
            return Ok(None);
        };

        let mut next = self.todos.clone();
        apply(&mut next[index]);
        let updated = next[index].clone();
        self.commit(next)?;

        info!("event=task_update module=service status=ok");
        Ok(Some(updated))
    }

    /// Persists `next`, then makes it the in-memory list.
    fn commit(&mut self, next: Vec<Task>) -> StoreResult<()> {
        let payload = serde_json::to_string(&next)?;
        if let Err(err) = self.storage.set(&self.storage_key, &payload) {
            warn!(
                "event=tasks_save module=service status=error count={} error={}",
                next.len(),
                err
            );
            return Err(err.into());
        }

        debug!(
            "event=tasks_save module=service status=ok count={} bytes={}",
            next.len(),
            payload.len()
        );
        self.todos = next;
        Ok(())
    }
}

fn decode_task_list(payload: &str) -> Vec<Task> {
    match serde_json::from_str::<Vec<Task>>(payload) {
        Ok(todos) => {
            debug!(
                "event=tasks_load module=service status=ok source=storage count={}",
                todos.len()
            );
            todos
        }
        Err(err) => {
            // Payload text is user data; log only its size and the parse position.
            warn!(
                "event=tasks_load module=service status=recovered reason=malformed_payload bytes={} line={} column={}",
                payload.len(),
                err.line(),
                err.column()
            );
            Vec::new()
        }
    }
}
