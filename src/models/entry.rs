use super::status::Status;
use crate::utils::time::to_db_timestamp;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Display format for local timestamps (status line, listings, CSV).
pub const LOCAL_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the `log` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,                  // ⇔ log.id (INTEGER PRIMARY KEY)
    pub timestamp: DateTime<Utc>, // ⇔ log.timestamp (TEXT, RFC 3339 UTC)
    pub status: Status,           // ⇔ log.status ('in' | 'out')
    pub code: String,             // ⇔ log.code
    pub comment: Option<String>,  // ⇔ log.comment (nullable)
}

impl LogEntry {
    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    /// Local time as `YYYY-MM-DD HH:MM:SS`.
    pub fn local_str(&self) -> String {
        self.local_timestamp().format(LOCAL_DISPLAY_FORMAT).to_string()
    }

    /// Stored representation, e.g. `2024-01-01T09:00:00.000000000Z`.
    pub fn utc_str(&self) -> String {
        to_db_timestamp(&self.timestamp)
    }

    pub fn comment_str(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Line understood by the edit command:
    /// `ID, Timestamp, Status, Code, Comment`.
    pub fn to_edit_line(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.id,
            self.utc_str(),
            self.status,
            self.code,
            self.comment_str()
        )
    }
}
