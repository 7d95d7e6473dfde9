//! Preference Store Setup
//!
//! One SQLite database holding a single key-value table. Each preference
//! collection is serialized wholesale to JSON under a fixed key, matching
//! the on-device layout the app has always used: a missing or unreadable
//! value reads back as the collection's empty default, never as an error.

use std::path::Path;
use std::sync::Arc;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Shared handle to the preference store connection
pub type StoreHandle = Arc<Mutex<Connection>>;

/// Open the store and create the schema
pub fn init_db(db_path: &Path) -> DomainResult<StoreHandle> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS prefs (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(Arc::new(Mutex::new(conn)))
}

/// Read a collection from its key, falling back to the empty default when
/// the key is absent or holds something unreadable
pub(super) fn read_value<T>(conn: &Connection, key: &str) -> DomainResult<T>
where
    T: DeserializeOwned + Default,
{
    let raw: Option<String> = conn
        .query_row("SELECT value FROM prefs WHERE key = ?1", params![key], |row| row.get(0))
        .optional()
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    match raw {
        None => Ok(T::default()),
        Some(json) => match serde_json::from_str(&json) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, %err, "stored value is unreadable, treating as empty");
                Ok(T::default())
            }
        },
    }
}

/// Serialize a full collection and overwrite whatever its key held before
pub(super) fn write_value<T: Serialize>(conn: &Connection, key: &str, value: &T) -> DomainResult<()> {
    let json = serde_json::to_string(value).map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "INSERT INTO prefs (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, json],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(())
}
