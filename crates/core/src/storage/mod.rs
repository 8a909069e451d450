//! SQLite storage layer for AllSafe
//!
//! The durable store is a single `kv` table of JSON blobs keyed by entry
//! name. All reads and writes are synchronous; there is no in-memory cache
//! layer that could drift from what is on disk.

mod memory;
mod migrations;
mod traits;

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::instrument;

use crate::error::Result;

pub use memory::MemoryStore;
pub use traits::{keys, KeyValueStore};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        db.set_json("k", &vec![1u32, 2, 3]).unwrap();
        let value: Vec<u32> = db.get_json("k", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_replace_overwrites() {
        let db = Database::open_in_memory().unwrap();
        db.set_raw("k", "old").unwrap();
        db.set_raw("k", "new").unwrap();
        assert_eq!(db.get_raw("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_missing_key_yields_fallback() {
        let db = Database::open_in_memory().unwrap();
        let value: Vec<u32> = db.get_json("absent", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_corrupted_value_yields_fallback() {
        let db = Database::open_in_memory().unwrap();
        db.set_raw("k", "][ garbage").unwrap();
        let value: Option<u32> = db.get_json("k", None);
        assert_eq!(value, None);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("allsafe.db");

        {
            let db = Database::open(&path).unwrap();
            db.set_raw("k", "persisted").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.get_raw("k").unwrap().as_deref(), Some("persisted"));
    }
}
