//! Build Store Module
//!
//! Durable persistence of saved builds in SQLite behind an r2d2 connection
//! pool. Builds are opaque JSON blobs keyed by their short id; the primary
//! key on `id` is the authoritative uniqueness guard.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, ErrorCode, OptionalExtension};
use tracing::info;

use crate::error::{AppError, Result};

/// Connection pool configuration
const POOL_MAX_SIZE: u32 = 8;
const BUSY_TIMEOUT_MS: u64 = 5_000;

// == Build Store ==
/// SQLite-backed store for saved builds.
#[derive(Debug, Clone)]
pub struct BuildStore {
    pool: Pool<SqliteConnectionManager>,
}

impl BuildStore {
    // == Constructor ==
    /// Opens (creating if necessary) the build database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path.as_ref());
        let pool = Pool::builder().max_size(POOL_MAX_SIZE).build(manager)?;

        let store = Self { pool };
        store.initialize_schema()?;

        info!("Build store opened at {}", path.as_ref().display());
        Ok(store)
    }

    /// Creates the builds table and configures the connection pragmas.
    fn initialize_schema(&self) -> Result<()> {
        let conn = self.pool.get()?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(std::time::Duration::from_millis(BUSY_TIMEOUT_MS))?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS builds (
                id TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
            [],
        )?;

        Ok(())
    }

    // == Exists ==
    /// Checks whether a build id is already taken.
    ///
    /// Used by the save loop as a cheap pre-check; the insert's primary-key
    /// constraint remains the authoritative guard against races.
    pub fn exists(&self, id: &str) -> Result<bool> {
        let conn = self.pool.get()?;
        let found: Option<i64> = conn
            .query_row("SELECT 1 FROM builds WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    // == Insert ==
    /// Inserts a build under a fresh id.
    ///
    /// Fails with [`AppError::DuplicateId`] if the id is already taken, which
    /// the save loop recovers from by generating a new candidate.
    pub fn insert(&self, id: &str, data: &str, created_at: &str) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO builds (id, data, timestamp) VALUES (?1, ?2, ?3)",
            params![id, data, created_at],
        )
        .map_err(|err| match err {
            rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
                AppError::DuplicateId(id.to_string())
            }
            other => other.into(),
        })?;
        Ok(())
    }

    // == Get ==
    /// Returns the serialized payload stored under `id`.
    pub fn get(&self, id: &str) -> Result<String> {
        let conn = self.pool.get()?;
        conn.query_row("SELECT data FROM builds WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()?
        .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    // == Count ==
    /// Returns the number of stored builds.
    pub fn count(&self) -> Result<u64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM builds", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
