use crate::errors::AppResult;
use crate::utils::time::{parse_db_timestamp, to_db_timestamp};
use rusqlite::{Connection, params};

/// Create the `log` table and its index if missing, then bring timestamps
/// written by older tools into the canonical form.
/// Safe to call on an already initialized database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            status    TEXT NOT NULL CHECK(status IN ('in','out')),
            code      TEXT NOT NULL,
            comment   TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_log_timestamp ON log(timestamp);
        "#,
    )?;
    normalize_timestamps(conn)?;
    Ok(())
}

/// Rewrite `+00:00` and naive timestamps as `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`
/// so text comparison in range queries stays chronological.
/// Rows that cannot be parsed are left alone. Returns the number rewritten.
pub fn normalize_timestamps(conn: &Connection) -> AppResult<usize> {
    let legacy: Vec<(i64, String)> = {
        let mut stmt = conn.prepare(
            "SELECT id, timestamp FROM log
             WHERE length(timestamp) != 30 OR substr(timestamp, -1) != 'Z'",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    let mut rewritten = 0;
    for (id, raw) in legacy {
        let Some(ts) = parse_db_timestamp(&raw) else {
            continue;
        };
        rewritten += conn.execute(
            "UPDATE log SET timestamp = ?1 WHERE id = ?2",
            params![to_db_timestamp(&ts), id],
        )?;
    }
    Ok(rewritten)
}
