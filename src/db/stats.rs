use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::parse_db_timestamp;
use chrono::Local;
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

/// Summary of the database shown by `db --info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbInfo {
    pub file_size: u64,
    pub total_entries: i64,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
}

pub fn collect_db_info(pool: &DbPool, db_path: &Path) -> AppResult<DbInfo> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let total_entries = count_entries(&pool.conn)?;

    let first_timestamp: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM log ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_timestamp: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM log ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbInfo {
        file_size,
        total_entries,
        first_timestamp,
        last_timestamp,
    })
}

fn local_or_placeholder(raw: &Option<String>) -> String {
    match raw.as_deref().and_then(parse_db_timestamp) {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => format!("{GREY}--{RESET}"),
    }
}

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    let info = collect_db_info(pool, db_path)?;
    let file_kb = (info.file_size as f64) / 1024.0;

    println!();
    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, info.total_entries, RESET
    );
    println!("{}• Time range:{}", CYAN, RESET);
    println!("    from: {}", local_or_placeholder(&info.first_timestamp));
    println!("    to:   {}", local_or_placeholder(&info.last_timestamp));
    println!();

    Ok(())
}
