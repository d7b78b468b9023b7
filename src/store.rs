//! Persistent store adapter.
//!
//! A synchronous key-value store over SQLite: one table, one fixed key
//! holding the JSON-serialized task list. Missing or corrupt data is
//! treated as "no saved data", never as an error the caller sees.

use crate::types::TaskRecord;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use thiserror::Error;
use tracing::{error, warn};

/// The single key the task list lives under.
const STORE_KEY: &str = "todos";

/// Errors from the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Handle to the on-disk (or in-memory) key-value store.
///
/// Single-threaded by design; the connection is exclusively owned by
/// one widget instance.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA busy_timeout=5000;",
        )?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS store (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;
        Ok(())
    }

    /// Read the saved task list.
    ///
    /// Absent key, unparsable JSON, or a value that is not an array all
    /// yield an empty list. Nothing here propagates to the caller; a
    /// diagnostic is logged instead.
    pub fn load(&self) -> Vec<TaskRecord> {
        let raw: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM store WHERE key = ?1",
                params![STORE_KEY],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(raw) => raw,
            Err(err) => {
                error!(%err, "failed to read saved tasks, starting empty");
                return Vec::new();
            }
        };

        let Some(raw) = raw else {
            return Vec::new();
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(_)) => {
                match serde_json::from_str::<Vec<TaskRecord>>(&raw) {
                    Ok(tasks) => tasks,
                    Err(err) => {
                        warn!(%err, "task items parse error, starting empty");
                        Vec::new()
                    }
                }
            }
            Ok(_) => {
                warn!("saved value is not a list, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(%err, "task items parse error, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the stored value.
    pub fn save(&self, tasks: &[TaskRecord]) -> Result<(), StoreError> {
        let value = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT INTO store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![STORE_KEY, value],
        )?;
        Ok(())
    }

    /// Overwrite the stored value with raw text, bypassing serialization
    /// (for exercising the corrupt-data path in tests).
    pub fn save_raw(&self, raw: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![STORE_KEY, raw],
        )?;
        Ok(())
    }
}
