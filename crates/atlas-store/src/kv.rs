use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

use crate::error::Result;

/// Storage key for the favorites id sequence.
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key for the recently-viewed id sequence.
pub const RECENT_KEY: &str = "recently_viewed";
/// Storage key for the search-history query sequence.
pub const HISTORY_KEY: &str = "search_history";

/// Default base directory for atlas storage.
pub fn default_data_dir() -> PathBuf {
    dirs_home().join(".philosopher-atlas")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Flat durable key-value store backing the persisted collections.
///
/// One row per storage key; values are opaque strings (JSON arrays, see
/// `atlas_core::persist`). Interpretation and degradation of malformed
/// values happen above this layer.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).ok();
        Ok(result)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;
    tracing::debug!("kv schema ready");
    Ok(())
}
