//! Key-value persistence for unsent drafts.
//!
//! One string per chat, stored under `draft-<chatId>`.

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use super::ensure_parent_dir;
use crate::common::ChatId;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DraftResult<T> = Result<T, DraftError>;

pub fn draft_key(chat_id: &ChatId) -> String {
    format!("draft-{chat_id}")
}

pub trait DraftStore {
    fn load(&self, chat_id: &ChatId) -> DraftResult<Option<String>>;
    fn save(&mut self, chat_id: &ChatId, text: &str) -> DraftResult<()>;
    fn remove(&mut self, chat_id: &ChatId) -> DraftResult<()>;
}

/// Draft store backed by a `kv_store` table.
pub struct SqliteDraftStore {
    conn: Connection,
}

impl SqliteDraftStore {
    pub fn with_path<P: AsRef<Path>>(path: P) -> DraftResult<Self> {
        ensure_parent_dir(path.as_ref())?;
        Self::init(Connection::open(path)?)
    }

    pub fn in_memory() -> DraftResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> DraftResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    pub fn count(&self) -> DraftResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl DraftStore for SqliteDraftStore {
    fn load(&self, chat_id: &ChatId) -> DraftResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![draft_key(chat_id)],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, chat_id: &ChatId, text: &str) -> DraftResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![draft_key(chat_id), text, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn remove(&mut self, chat_id: &ChatId) -> DraftResult<()> {
        self.conn.execute(
            "DELETE FROM kv_store WHERE key = ?1",
            params![draft_key(chat_id)],
        )?;
        Ok(())
    }
}

/// Volatile draft store, used with `--memory-drafts` and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryDraftStore {
    entries: HashMap<String, String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self, chat_id: &ChatId) -> DraftResult<Option<String>> {
        Ok(self.entries.get(&draft_key(chat_id)).cloned())
    }

    fn save(&mut self, chat_id: &ChatId, text: &str) -> DraftResult<()> {
        self.entries.insert(draft_key(chat_id), text.to_string());
        Ok(())
    }

    fn remove(&mut self, chat_id: &ChatId) -> DraftResult<()> {
        self.entries.remove(&draft_key(chat_id));
        Ok(())
    }
}
