//! SQLite-backed goal store.
//!
//! The whole [`AppState`] lives as one JSON document in a key-value table,
//! under [`STATE_KEY`]. A missing key reads as an empty state.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::{Result, StoreError};

use super::data_dir;
use super::state::AppState;
use super::store::GoalStore;

pub const STATE_KEY: &str = "goals.v2";

/// SQLite database at `<data_dir>/commit.db`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database in the data directory, creating it if needed.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open() -> Result<Self> {
        Self::open_at(data_dir()?.join("commit.db"))
    }

    pub fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened goal store");
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv table.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv table.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl GoalStore for SqliteStore {
    fn load(&self) -> Result<AppState> {
        match self.kv_get(STATE_KEY)? {
            Some(raw) => {
                let state: AppState = serde_json::from_str(&raw)
                    .map_err(|e| StoreError::Corrupt(e.to_string()))?;
                debug!(goals = state.goals.len(), "loaded state");
                Ok(state)
            }
            None => Ok(AppState::default()),
        }
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        self.kv_set(STATE_KEY, &raw)?;
        debug!(goals = state.goals.len(), "saved state");
        Ok(())
    }
}
