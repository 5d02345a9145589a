//! Time utilities: HH:MM parsing and the stored UTC timestamp format.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Inclusive time-of-day check. A window whose start is after its stop
/// (e.g. 23:00–01:00) wraps around midnight.
pub fn within_window(t: NaiveTime, start: NaiveTime, stop: NaiveTime) -> bool {
    if start <= stop {
        start <= t && t <= stop
    } else {
        t >= start || t <= stop
    }
}

/// Fixed-width RFC 3339 text used in the `log.timestamp` column.
/// Lexical order of these strings equals chronological order.
pub fn to_db_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored timestamp. Text without an offset is taken as UTC.
pub fn parse_db_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Same as [`parse_db_timestamp`], for user input.
pub fn parse_utc_input(s: &str) -> AppResult<DateTime<Utc>> {
    parse_db_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.trim().to_string()))
}
