//! SQLite bootstrap for the durable key-value backend.
//!
//! Connections returned here are ready for `SqliteKeyValueStore`: the
//! `kv_entries` table exists and its schema version is current.

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
