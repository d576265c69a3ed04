//! SQLite-backed key-value store.
//!
//! # Invariants
//! - Callers pass a connection returned by `db::open_db*`, so `kv_entries`
//!   exists.
//! - `set` is a single upsert statement; a failed write leaves the
//!   previous value intact.

use super::{KeyValueStore, StorageResult};
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable key-value store over the `kv_entries` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection returned by `db::open_db*`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let result = self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        );

        if let Err(err) = result {
            error!(
                "event=kv_set module=storage status=error backend=sqlite bytes={} error={}",
                value.len(),
                err
            );
            return Err(err.into());
        }

        Ok(())
    }
}
