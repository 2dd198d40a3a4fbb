//! Local key-value persistence for the brand record.
//!
//! One SQLite table holds JSON blobs by key. The wizard writes through a
//! [`DebouncedSaver`] so rapid edits collapse into few writes.

use fs_err as fs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::model::BrandState;

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(v)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let n = self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(n > 0)
    }

    /// Stored record, or the starter record when the key is missing or the
    /// blob no longer parses.
    pub fn load_state(&self, key: &str) -> Result<BrandState> {
        let Some(raw) = self.get(key)? else {
            debug!(key, "no stored state, using starter");
            return Ok(BrandState::starter());
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(key, error = %e, "stored state is corrupt, using starter");
                Ok(BrandState::starter())
            }
        }
    }

    pub fn save_state(&self, key: &str, state: &BrandState) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        self.put(key, &raw)
    }
}

/// Leading-edge debounce: a change is written at once if the quiet period
/// has passed since the last write, otherwise it waits as the pending
/// snapshot. Pending snapshots are written on [`flush`](Self::flush) and on drop.
pub struct DebouncedSaver<'a> {
    store: &'a Store,
    key: String,
    delay: Duration,
    last_write: Option<Instant>,
    pending: Option<String>,
    writes: usize,
}

impl<'a> DebouncedSaver<'a> {
    pub fn new(store: &'a Store, key: impl Into<String>, delay: Duration) -> Self {
        Self { store, key: key.into(), delay, last_write: None, pending: None, writes: 0 }
    }

    pub fn schedule(&mut self, state: &BrandState) {
        let raw = match serde_json::to_string(state) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "could not serialize state");
                return;
            }
        };
        let quiet = self.last_write.map_or(true, |t| t.elapsed() >= self.delay);
        self.pending = Some(raw);
        if quiet {
            self.flush();
        }
    }

    /// Write the pending snapshot, if any. Failures are logged, not raised.
    pub fn flush(&mut self) {
        let Some(raw) = self.pending.take() else {
            return;
        };
        match self.store.put(&self.key, &raw) {
            Ok(()) => {
                self.writes += 1;
                debug!(key = %self.key, bytes = raw.len(), "state saved");
            }
            Err(e) => warn!(key = %self.key, error = %e, "saving state failed"),
        }
        self.last_write = Some(Instant::now());
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Drop for DebouncedSaver<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}
