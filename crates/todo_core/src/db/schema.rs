//! `kv_entries` schema versioning.
//!
//! # Invariants
//! - The stored version lives in `PRAGMA user_version`.
//! - A database written by a newer binary is rejected, never downgraded.
//! - Opening a current database recreates `kv_entries` if it went missing.

use crate::storage::{StorageError, StorageResult};
use rusqlite::Connection;

/// Schema version written by this binary.
pub const KV_SCHEMA_VERSION: u32 = 1;

const KV_ENTRIES_DDL: &str = include_str!("kv_entries.sql");

/// Creates or repairs `kv_entries` and stamps the schema version.
///
/// # Errors
/// - `StorageError::UnsupportedSchemaVersion` when the file is newer.
/// - `StorageError::Sqlite` when DDL or the version stamp fails; the
///   transaction is rolled back.
pub fn ensure_kv_schema(conn: &mut Connection) -> StorageResult<()> {
    let stored = stored_version(conn)?;
    if stored > KV_SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: stored,
            latest_supported: KV_SCHEMA_VERSION,
        });
    }

    let tx = conn.transaction()?;
    tx.execute_batch(KV_ENTRIES_DDL)?;
    if stored < KV_SCHEMA_VERSION {
        tx.execute_batch(&format!("PRAGMA user_version = {KV_SCHEMA_VERSION};"))?;
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version stamped on `conn`; `0` for a fresh file.
pub fn stored_version(conn: &Connection) -> StorageResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::{ensure_kv_schema, stored_version, KV_SCHEMA_VERSION};
    use crate::storage::StorageError;
    use rusqlite::Connection;

    #[test]
    fn fresh_connection_is_stamped_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(stored_version(&conn).unwrap(), 0);

        ensure_kv_schema(&mut conn).unwrap();
        ensure_kv_schema(&mut conn).unwrap();

        assert_eq!(stored_version(&conn).unwrap(), KV_SCHEMA_VERSION);
    }

    #[test]
    fn newer_version_is_rejected_without_changes() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 7;").unwrap();

        let err = ensure_kv_schema(&mut conn).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedSchemaVersion {
                db_version: 7,
                latest_supported: KV_SCHEMA_VERSION,
            }
        ));
        assert_eq!(stored_version(&conn).unwrap(), 7);
    }
}
