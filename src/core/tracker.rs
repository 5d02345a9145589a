//! What happens when the user presses the stamp button right now.

use crate::config::Config;
use crate::core::store::LogStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::status::{CurrentStatus, Status};
use crate::utils::time::within_window;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Prefilled values for the next stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDefaults {
    pub code: String,
    pub comment: String,
    /// Label shown next to the comment field.
    pub prompt: String,
}

/// Result of a toggle: the written row and the new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub entry: LogEntry,
    pub status: CurrentStatus,
    /// Defaults for the following stamp, which goes the other way.
    pub next: InputDefaults,
}

/// Holds the derived in/out status. The store stays the source of truth;
/// the status is recomputed from its latest entry after every mutation.
#[derive(Debug, Default)]
pub struct SessionTracker {
    current: CurrentStatus,
}

impl SessionTracker {
    /// Tracker with the status derived from `store`.
    pub fn load(store: &LogStore) -> AppResult<Self> {
        let mut tracker = Self::default();
        tracker.refresh(store)?;
        Ok(tracker)
    }

    pub fn status(&self) -> CurrentStatus {
        self.current
    }

    /// Re-derive the status from the entry with the highest id.
    pub fn refresh(&mut self, store: &LogStore) -> AppResult<CurrentStatus> {
        self.current = store.latest()?.map(|e| e.status).into();
        Ok(self.current)
    }

    /// Direction the next toggle will write.
    pub fn next_direction(&self) -> Status {
        if self.current.is_in() {
            Status::Out
        } else {
            Status::In
        }
    }

    /// Input defaults for the next toggle.
    pub fn input_defaults(&self, cfg: &Config) -> InputDefaults {
        defaults_for(self.next_direction(), cfg)
    }

    /// Default out-comment for the given local time: the lunch comment
    /// inside the configured lunch window, the regular one otherwise.
    pub fn out_comment_default(cfg: &Config, now_local: NaiveDateTime) -> &str {
        let (start, stop) = cfg.lunch_window();
        if within_window(now_local.time(), start, stop) {
            &cfg.default_stamp_out_lunch_comment
        } else {
            &cfg.default_stamp_out_comment
        }
    }

    /// Stamp in when not currently in, stamp out otherwise.
    ///
    /// Empty `code`/`comment` are replaced by the configured defaults for the
    /// direction being written. A code outside `cfg.codes` is rejected before
    /// anything is written.
    pub fn toggle(
        &mut self,
        store: &LogStore,
        now_utc: DateTime<Utc>,
        now_local: NaiveDateTime,
        code: Option<&str>,
        comment: Option<&str>,
        cfg: &Config,
    ) -> AppResult<StampOutcome> {
        if self.current == CurrentStatus::Unknown {
            self.refresh(store)?;
        }

        let direction = self.next_direction();
        let (default_code, default_comment) = match direction {
            Status::In => (
                cfg.default_code_stamp_in.as_str(),
                cfg.default_stamp_in_comment.as_str(),
            ),
            Status::Out => (
                cfg.default_code_stamp_out.as_str(),
                Self::out_comment_default(cfg, now_local),
            ),
        };

        let code = non_empty(code).unwrap_or(default_code);
        if !cfg.is_known_code(code) {
            return Err(AppError::InvalidCode(format!(
                "{code} (configured codes: {})",
                cfg.codes
            )));
        }

        let comment = non_empty(comment).unwrap_or(default_comment);
        let stored_comment = non_empty(Some(comment));

        let id = store.append(now_utc, direction, code, stored_comment)?;
        self.current = direction.into();

        let entry = LogEntry {
            id,
            timestamp: now_utc,
            status: direction,
            code: code.to_string(),
            comment: stored_comment.map(str::to_string),
        };

        Ok(StampOutcome {
            entry,
            status: self.current,
            next: self.input_defaults(cfg),
        })
    }

    /// Maintenance edit; bypasses the default-value policy.
    pub fn update_entry(
        &mut self,
        store: &LogStore,
        entry: &LogEntry,
    ) -> AppResult<CurrentStatus> {
        store.update(
            entry.id,
            entry.timestamp,
            entry.status,
            &entry.code,
            entry.comment.as_deref(),
        )?;
        self.refresh(store)
    }

    /// Maintenance delete; idempotent. Returns whether a row was removed.
    pub fn delete_entry(&mut self, store: &LogStore, id: i64) -> AppResult<bool> {
        let removed = store.delete(id)?;
        self.refresh(store)?;
        Ok(removed)
    }
}

/// Defaults shown before writing a stamp in `direction`. The out-comment is
/// the regular one; the lunch override is applied when the stamp is written.
pub fn defaults_for(direction: Status, cfg: &Config) -> InputDefaults {
    match direction {
        Status::In => InputDefaults {
            code: cfg.default_code_stamp_in.clone(),
            comment: cfg.default_stamp_in_comment.clone(),
            prompt: cfg.stamp_in_comment_msg.clone(),
        },
        Status::Out => InputDefaults {
            code: cfg.default_code_stamp_out.clone(),
            comment: cfg.default_stamp_out_comment.clone(),
            prompt: cfg.stamp_out_comment_msg.clone(),
        },
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
