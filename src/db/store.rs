//! Backing stores for the serialized ledger.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// A single named key-value slot holding the serialized ledger.
pub trait LedgerStore {
    /// Raw stored value, `None` when the key was never written.
    fn load(&self) -> AppResult<Option<String>>;

    /// Overwrite the stored value.
    fn save(&mut self, value: &str) -> AppResult<()>;

    /// Record an operation in the store's internal log, if it keeps one.
    fn journal(&self, _operation: &str, _target: &str, _message: &str) {}
}

/// `kv_store` row in the SQLite database.
pub struct SqliteStore {
    pool: DbPool,
    key: String,
}

impl SqliteStore {
    pub fn new(pool: DbPool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl LedgerStore for SqliteStore {
    fn load(&self) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([&self.key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.key, value, now],
        )?;
        Ok(())
    }

    fn journal(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}

/// Process-local store, used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            fail_writes: false,
        }
    }

    /// Every `save` returns an error; the stored value is left untouched.
    pub fn failing() -> Self {
        Self {
            value: None,
            fail_writes: true,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(std::io::Error::other("store is read-only").into());
        }
        self.value = Some(value.to_string());
        Ok(())
    }
}
