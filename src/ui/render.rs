//! Text rendering of entries and status for the terminal.

use crate::models::entry::LogEntry;
use crate::models::status::CurrentStatus;
use crate::utils::colors::{colorize_optional, paint_status};

/// `Status: in @2024-01-01 10:00:00` (local time), or `Status: ` when the
/// log is empty.
pub fn status_line(latest: Option<&LogEntry>) -> String {
    match latest {
        Some(e) => format!("Status: {} @{}", e.status, e.local_str()),
        None => "Status: ".to_string(),
    }
}

/// Coloured variant of [`status_line`] for interactive output.
pub fn status_line_colored(latest: Option<&LogEntry>) -> String {
    match latest {
        Some(e) => format!(
            "Status: {} @{}",
            paint_status(CurrentStatus::from(e.status)),
            e.local_str()
        ),
        None => "Status: ".to_string(),
    }
}

/// One-line listing form.
pub fn entry_line(e: &LogEntry) -> String {
    format!(
        "ID: {}, Timestamp: {}, Status: {}, Code: {}, Comment: {}",
        e.id,
        e.local_str(),
        e.status,
        e.code,
        e.comment_str()
    )
}

/// Multi-line detail form used by `show`.
pub fn entry_block(e: &LogEntry) -> String {
    format!(
        "ID: {}\nTimestamp: {} (UTC {})\nStatus: {}\nCode: {}\nComment: {}",
        e.id,
        e.local_str(),
        e.utc_str(),
        e.status,
        e.code,
        colorize_optional(e.comment_str())
    )
}
