use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::status::Status;
use crate::utils::time::{parse_db_timestamp, to_db_timestamp};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str = "SELECT id, timestamp, status, code, comment FROM log";

pub fn map_row(row: &Row) -> Result<LogEntry> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_db_timestamp(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(LogEntry {
        id: row.get("id")?,
        timestamp,
        status,
        code: row.get("code")?,
        comment: row.get("comment")?,
    })
}

fn collect(rows: impl Iterator<Item = Result<LogEntry>>) -> AppResult<Vec<LogEntry>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(
    conn: &Connection,
    timestamp: &DateTime<Utc>,
    status: Status,
    code: &str,
    comment: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO log (timestamp, status, code, comment) VALUES (?1, ?2, ?3, ?4)",
        params![to_db_timestamp(timestamp), status.to_db_str(), code, comment],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Entry with the highest id.
pub fn load_latest(conn: &Connection) -> AppResult<Option<LogEntry>> {
    let entry = conn
        .query_row(
            &format!("{SELECT_ENTRY} ORDER BY id DESC LIMIT 1"),
            [],
            map_row,
        )
        .optional()?;
    Ok(entry)
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<LogEntry>> {
    let entry = conn
        .query_row(&format!("{SELECT_ENTRY} WHERE id = ?1"), [id], map_row)
        .optional()?;
    Ok(entry)
}

pub fn previous_id(conn: &Connection, id: i64) -> AppResult<Option<i64>> {
    let prev = conn
        .query_row(
            "SELECT id FROM log WHERE id < ?1 ORDER BY id DESC LIMIT 1",
            [id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(prev)
}

pub fn next_id(conn: &Connection, id: i64) -> AppResult<Option<i64>> {
    let next = conn
        .query_row(
            "SELECT id FROM log WHERE id > ?1 ORDER BY id ASC LIMIT 1",
            [id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(next)
}

/// Overwrite every field except the id. Returns the number of rows changed.
pub fn update_entry(
    conn: &Connection,
    id: i64,
    timestamp: &DateTime<Utc>,
    status: Status,
    code: &str,
    comment: Option<&str>,
) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE log
         SET timestamp = ?1, status = ?2, code = ?3, comment = ?4
         WHERE id = ?5",
        params![
            to_db_timestamp(timestamp),
            status.to_db_str(),
            code,
            comment,
            id
        ],
    )?;
    Ok(changed)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let deleted = conn.execute("DELETE FROM log WHERE id = ?1", [id])?;
    Ok(deleted)
}

/// Entries with `from <= timestamp <= to`, oldest first.
pub fn load_range(
    conn: &Connection,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_ENTRY}
         WHERE timestamp BETWEEN ?1 AND ?2
         ORDER BY timestamp ASC, id ASC"
    ))?;
    let rows = stmt.query_map(
        params![to_db_timestamp(from), to_db_timestamp(to)],
        map_row,
    )?;
    collect(rows)
}

/// Run `expression` verbatim as the WHERE clause of a select on `log`.
///
/// The expression is NOT sanitized or parameterized; it is executed exactly
/// as given.
pub fn load_where_unchecked(conn: &Connection, expression: &str) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_ENTRY}
         WHERE {expression}
         ORDER BY timestamp ASC, id ASC"
    ))?;
    let rows = stmt.query_map([], map_row)?;
    collect(rows)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    Ok(count)
}
