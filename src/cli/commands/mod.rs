pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod show;
pub mod stamp;
pub mod status;

use crate::config::Config;
use crate::core::store::{LogStore, TrustedFilter};
use crate::errors::AppResult;
use crate::models::entry::LogEntry;
use crate::ui::messages::warning;
use crate::utils::date::{UtcRange, resolve_local_range};

/// Open the configured store and run the once-per-process backup check.
/// A failed backup is reported but does not stop the command.
pub fn open_store(cfg: &Config) -> AppResult<LogStore> {
    let mut store = LogStore::initialize(&cfg.database_path())?;
    if let Err(e) = store.backup_if_stale(cfg.backup_days, &cfg.backup_dir_path()) {
        warning(format!("Backup skipped: {e}"));
    }
    Ok(store)
}

/// Entry selection shared by `list` and `export`.
pub(crate) enum Selection {
    Range {
        range: UtcRange,
        from_text: String,
        to_text: String,
    },
    Raw(TrustedFilter),
}

impl Selection {
    /// A raw expression wins; otherwise the local range, with unparseable or
    /// missing bounds replaced by the default window.
    pub(crate) fn from_args(
        from: Option<&str>,
        to: Option<&str>,
        where_expr: Option<&str>,
    ) -> Self {
        if let Some(expr) = where_expr {
            return Selection::Raw(TrustedFilter::trusted(expr));
        }

        let range = resolve_local_range(from, to);
        let from_text = from
            .map(str::to_string)
            .unwrap_or_else(crate::utils::date::default_from_text);
        let to_text = to
            .map(str::to_string)
            .unwrap_or_else(crate::utils::date::default_to_text);

        Selection::Range {
            range,
            from_text,
            to_text,
        }
    }

    pub(crate) fn load(&self, store: &LogStore) -> AppResult<Vec<LogEntry>> {
        match self {
            Selection::Range { range, .. } => store.query_range(range.from, range.to),
            Selection::Raw(filter) => store.query_raw(filter),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Selection::Range {
                from_text, to_text, ..
            } => format!("Entries from {from_text} to {to_text}"),
            Selection::Raw(filter) => format!("Entries for filter: {}", filter.as_str()),
        }
    }
}
