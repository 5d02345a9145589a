use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EntryExport;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::entry::LogEntry;
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Default file name: `<from-date>_<to-date>.<ext>`, where the dates are
    /// the first ten characters of the user's range texts.
    pub fn default_file_name(from_text: &str, to_text: &str, format: ExportFormat) -> String {
        let date_part = |s: &str| s.trim().chars().take(10).collect::<String>();
        format!(
            "{}_{}.{}",
            date_part(from_text),
            date_part(to_text),
            format.as_str()
        )
    }

    /// Write `entries` to `path`.
    ///
    /// Returns `None` (and writes nothing) when there is nothing to export.
    pub fn export(
        entries: &[LogEntry],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if entries.is_empty() {
            info("No entries found for the specified filter.");
            return Ok(None);
        }

        ensure_writable(path, force)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
        match format {
            ExportFormat::Csv => csv::write_csv(path, &rows)?,
            ExportFormat::Json => json::write_json(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(Some(path.to_path_buf()))
    }
}
