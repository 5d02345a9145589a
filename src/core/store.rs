//! Durable, queryable persistence for stamp entries.

use crate::core::backup::BackupLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::status::Status;
use chrono::{DateTime, Local, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// A raw SQL filter that is executed as-is.
///
/// Constructing one is an explicit statement that the text comes from a
/// trusted, local, single-user source. Nothing is escaped, quoted or
/// validated: the expression can read or modify anything the database
/// connection can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedFilter(String);

impl TrustedFilter {
    pub fn trusted(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// Entries whose stored UTC timestamp starts with `YYYY-MM`.
    pub fn for_month(year_month: &str) -> Self {
        Self(format!("timestamp LIKE '{year_month}%'"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Owner of the `log` table. No other component touches the database file.
pub struct LogStore {
    pool: DbPool,
    path: PathBuf,
    backup_checked: bool,
}

impl LogStore {
    /// Open (or create) the store at `path` and make sure the schema exists.
    pub fn initialize(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let pool = DbPool::new(path).map_err(|e| {
            AppError::Storage(format!("cannot open database {}: {e}", path.display()))
        })?;
        init_db(&pool.conn)?;

        Ok(Self {
            pool,
            path: path.to_path_buf(),
            backup_checked: false,
        })
    }

    /// Store backed by an in-memory database. Never backed up.
    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: PathBuf::from(":memory:"),
            backup_checked: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn append(
        &self,
        timestamp: DateTime<Utc>,
        status: Status,
        code: &str,
        comment: Option<&str>,
    ) -> AppResult<i64> {
        queries::insert_entry(&self.pool.conn, &timestamp, status, code, comment)
    }

    pub fn latest(&self) -> AppResult<Option<LogEntry>> {
        queries::load_latest(&self.pool.conn)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<LogEntry>> {
        queries::load_entry(&self.pool.conn, id)
    }

    /// Largest id strictly below `id`.
    pub fn previous(&self, id: i64) -> AppResult<Option<i64>> {
        queries::previous_id(&self.pool.conn, id)
    }

    /// Smallest id strictly above `id`.
    pub fn next(&self, id: i64) -> AppResult<Option<i64>> {
        queries::next_id(&self.pool.conn, id)
    }

    pub fn update(
        &self,
        id: i64,
        timestamp: DateTime<Utc>,
        status: Status,
        code: &str,
        comment: Option<&str>,
    ) -> AppResult<()> {
        let changed =
            queries::update_entry(&self.pool.conn, id, &timestamp, status, code, comment)?;
        if changed == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }

    /// Remove an entry. Deleting a missing id is not an error; the return
    /// value tells whether a row was actually removed.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(queries::delete_entry(&self.pool.conn, id)? > 0)
    }

    /// Entries with `from <= timestamp <= to`, oldest first.
    pub fn query_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> AppResult<Vec<LogEntry>> {
        queries::load_range(&self.pool.conn, &from, &to)
    }

    /// Run a caller-supplied WHERE expression. See [`TrustedFilter`]: the
    /// text is trusted and executed without any sanitizing.
    pub fn query_raw(&self, filter: &TrustedFilter) -> AppResult<Vec<LogEntry>> {
        queries::load_where_unchecked(&self.pool.conn, filter.as_str())
    }

    pub fn count(&self) -> AppResult<i64> {
        queries::count_entries(&self.pool.conn)
    }

    /// Result of `PRAGMA integrity_check` (`"ok"` when healthy).
    pub fn integrity_check(&self) -> AppResult<String> {
        let result: String = self
            .pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        Ok(result)
    }

    pub fn vacuum(&self) -> AppResult<()> {
        self.pool.conn.execute_batch("VACUUM;")?;
        Ok(())
    }

    /// Copy the database to `backup_dir` when it is older than
    /// `max_age_days`. Only the first call on a store does anything.
    pub fn backup_if_stale(
        &mut self,
        max_age_days: i64,
        backup_dir: &Path,
    ) -> AppResult<Option<PathBuf>> {
        self.backup_if_stale_at(max_age_days, backup_dir, Local::now())
    }

    /// [`LogStore::backup_if_stale`] with an explicit clock.
    pub fn backup_if_stale_at(
        &mut self,
        max_age_days: i64,
        backup_dir: &Path,
        now: DateTime<Local>,
    ) -> AppResult<Option<PathBuf>> {
        if self.backup_checked {
            return Ok(None);
        }
        self.backup_checked = true;
        BackupLogic::backup_if_stale(&self.path, max_age_days, backup_dir, now)
    }
}
