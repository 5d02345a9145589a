use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::status::Status;
use crate::utils::time::parse_utc_input;

/// Field order of an edit line.
pub const EDIT_LINE_FORMAT: &str = "ID, Timestamp, Status, Code, Comment";

const FIELD_COUNT: usize = 5;

pub struct EditLogic;

impl EditLogic {
    /// Parse an edit line (`ID, Timestamp, Status, Code, Comment`) for the
    /// entry `id`.
    ///
    /// Fields are separated by `", "`. The comment is the remainder of the
    /// line and may itself contain commas. The timestamp is RFC 3339 or
    /// `YYYY-MM-DD HH:MM[:SS]`, the latter taken as UTC like the stored
    /// values. Nothing is written here: a rejected line leaves the store
    /// untouched.
    pub fn parse_line(line: &str, id: i64) -> AppResult<LogEntry> {
        let fields: Vec<&str> = line
            .trim_end_matches(['\r', '\n'])
            .splitn(FIELD_COUNT, ", ")
            .collect();
        if fields.len() != FIELD_COUNT {
            return Err(AppError::Validation(format!(
                "expected {FIELD_COUNT} fields ({EDIT_LINE_FORMAT}), got {}",
                fields.len()
            )));
        }

        let line_id: i64 = fields[0]
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("invalid ID '{}'", fields[0].trim())))?;
        if line_id != id {
            return Err(AppError::Validation(format!(
                "ID cannot be changed (editing {id}, line says {line_id})"
            )));
        }

        let timestamp = parse_utc_input(fields[1])?;

        let status = Status::parse(fields[2])
            .ok_or_else(|| AppError::InvalidStatus(fields[2].trim().to_string()))?;

        let code = fields[3].trim();
        if code.is_empty() {
            return Err(AppError::Validation("code must not be empty".to_string()));
        }

        let comment = fields[4].trim();

        Ok(LogEntry {
            id,
            timestamp,
            status,
            code: code.to_string(),
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }
}
