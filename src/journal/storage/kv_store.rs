//! Key-value store adapter holding the serialized memory collection.
//!
//! The durable copy lives under one fixed key whose value is the whole
//! collection as a JSON array. Writes always replace the full value, so a
//! failed write leaves the previous snapshot in place and the last
//! successful write wins on the next load.

use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};

use crate::journal::core::config::StorageConfig;
use crate::journal::core::errors::{JournalError, JournalResult};
use crate::journal::core::memory::Memory;

/// Storage seam between the collection manager and its durable copy.
pub trait StoreAdapter: Send + Sync {
    /// Fetch and deserialize the stored collection.
    ///
    /// An absent key is an empty collection, not a failure.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or the stored value is
    /// malformed.
    fn read_all(&self) -> JournalResult<Vec<Memory>>;

    /// Serialize the full collection and overwrite the stored value.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    fn write_all(&self, memories: &[Memory]) -> JournalResult<()>;
}

/// `SQLite`-backed key-value store.
///
/// One `kv_store` table, one fixed key; the connection is guarded by a
/// mutex because the adapter itself has no other state to protect.
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
    key: String,
}

impl SqliteKvStore {
    /// Open (and initialize if needed) the store at the configured path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or the table
    /// cannot be created.
    pub fn open(config: &StorageConfig) -> JournalResult<Self> {
        let conn = Connection::open(&config.sqlite_path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            key: config.store_key.clone(),
        })
    }

    fn read_raw(&self) -> JournalResult<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| JournalError::StoreRead("store mutex poisoned".to_string()))?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [self.key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_raw(&self, value: &str) -> JournalResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| JournalError::StoreWrite("store mutex poisoned".to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
            [self.key.as_str(), value],
        )?;
        Ok(())
    }
}

impl StoreAdapter for SqliteKvStore {
    fn read_all(&self) -> JournalResult<Vec<Memory>> {
        match self.read_raw()? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, memories: &[Memory]) -> JournalResult<()> {
        let json = serde_json::to_string(memories)?;
        self.write_raw(&json)
    }
}

/// In-memory store with the same contract, for tests and embedders that do
/// not want a database file.
#[derive(Default)]
pub struct InMemoryStore {
    value: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreAdapter for InMemoryStore {
    fn read_all(&self) -> JournalResult<Vec<Memory>> {
        let guard = self
            .value
            .lock()
            .map_err(|_| JournalError::StoreRead("store mutex poisoned".to_string()))?;
        match guard.as_deref() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, memories: &[Memory]) -> JournalResult<()> {
        let json = serde_json::to_string(memories)?;
        let mut guard = self
            .value
            .lock()
            .map_err(|_| JournalError::StoreWrite("store mutex poisoned".to_string()))?;
        *guard = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::core::memory::MemoryDraft;

    fn make_memory(title: &str) -> Memory {
        let mut draft = MemoryDraft::new(title, "2024-02-14", "We watched the sunset.");
        draft.push_image("data:img1").unwrap();
        Memory::from_draft(&draft)
    }

    fn temp_store() -> (tempfile::TempDir, SqliteKvStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            sqlite_path: dir.path().join("keepsake.sqlite"),
            store_key: "memories".to_string(),
        };
        let store = SqliteKvStore::open(&config).unwrap();
        (dir, store)
    }

    #[test]
    fn test_absent_key_reads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_read_roundtrip() {
        let (_dir, store) = temp_store();
        let memories = vec![make_memory("First Date"), make_memory("Beach Day")];

        store.write_all(&memories).unwrap();
        assert_eq!(store.read_all().unwrap(), memories);
    }

    #[test]
    fn test_write_fully_overwrites() {
        let (_dir, store) = temp_store();
        store
            .write_all(&[make_memory("First"), make_memory("Second")])
            .unwrap();

        let only = vec![make_memory("Third")];
        store.write_all(&only).unwrap();
        assert_eq!(store.read_all().unwrap(), only);
    }

    #[test]
    fn test_roundtrip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            sqlite_path: dir.path().join("keepsake.sqlite"),
            store_key: "memories".to_string(),
        };
        let memories = vec![make_memory("First Date")];

        {
            let store = SqliteKvStore::open(&config).unwrap();
            store.write_all(&memories).unwrap();
        }

        let reopened = SqliteKvStore::open(&config).unwrap();
        assert_eq!(reopened.read_all().unwrap(), memories);
    }

    #[test]
    fn test_malformed_value_is_a_read_failure() {
        let (_dir, store) = temp_store();
        store.write_raw("not json at all").unwrap();
        assert!(store.read_all().is_err());
    }

    #[test]
    fn test_in_memory_store_contract() {
        let store = InMemoryStore::new();
        assert!(store.read_all().unwrap().is_empty());

        let memories = vec![make_memory("First Date")];
        store.write_all(&memories).unwrap();
        assert_eq!(store.read_all().unwrap(), memories);
    }
}
