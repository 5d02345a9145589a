use crate::models::entry::LogEntry;
use serde::Serialize;

/// Flat export row; the timestamp is already converted to local time.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Comment")]
    pub comment: String,
}

impl From<&LogEntry> for EntryExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            id: e.id,
            timestamp: e.local_str(),
            status: e.status.as_str().to_string(),
            code: e.code.clone(),
            comment: e.comment_str().to_string(),
        }
    }
}

/// CSV header, in column order.
pub(crate) const HEADERS: [&str; 5] = ["ID", "Timestamp", "Status", "Code", "Comment"];

pub(crate) fn entry_to_row(e: &EntryExport) -> [String; 5] {
    [
        e.id.to_string(),
        e.timestamp.clone(),
        e.status.clone(),
        e.code.clone(),
        e.comment.clone(),
    ]
}
