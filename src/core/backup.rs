use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Whole days since the file was created (modification time where the
    /// platform does not record creation). `None` if the file is missing.
    pub fn age_in_days(path: &Path, now: DateTime<Local>) -> AppResult<Option<i64>> {
        if !path.is_file() {
            return Ok(None);
        }
        let meta = fs::metadata(path)?;
        let born = meta.created().or_else(|_| meta.modified())?;
        let born: DateTime<Local> = born.into();
        Ok(Some((now - born).num_days()))
    }

    /// `<YYYY-MM-DD>_<file name>`
    pub fn backup_file_name(src: &Path, now: DateTime<Local>) -> AppResult<String> {
        let name = src
            .file_name()
            .ok_or_else(|| AppError::Storage(format!("invalid database path: {}", src.display())))?;
        Ok(format!(
            "{}_{}",
            now.format("%Y-%m-%d"),
            name.to_string_lossy()
        ))
    }

    /// Copy `src` into `backup_dir` if it is older than `max_age_days`.
    /// A backup that already exists under today's name is left untouched.
    pub fn backup_if_stale(
        src: &Path,
        max_age_days: i64,
        backup_dir: &Path,
        now: DateTime<Local>,
    ) -> AppResult<Option<PathBuf>> {
        let Some(age) = Self::age_in_days(src, now)? else {
            return Ok(None);
        };
        if age <= max_age_days {
            return Ok(None);
        }

        let dest = backup_dir.join(Self::backup_file_name(src, now)?);
        if dest.exists() {
            return Ok(None);
        }

        fs::create_dir_all(backup_dir)?;
        fs::copy(src, &dest)?;
        info(format!("Database backed up to: {}", dest.display()));
        Ok(Some(dest))
    }

    /// File a manual backup to `dest` ends up in: `dest` itself, or `dest`
    /// with a `.zip` extension when compressing.
    pub fn target_path(dest: &Path, compress: bool) -> PathBuf {
        if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        }
    }

    /// Copy `src` to [`BackupLogic::target_path`]. With `compress` the
    /// database is streamed into a zip archive directly; no plain copy is
    /// written. Returns the path of the backup file.
    pub fn backup_to(src: &Path, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        if !src.is_file() {
            return Err(AppError::Storage(format!(
                "Database not found: {}",
                src.display()
            )));
        }

        let target = Self::target_path(dest, compress);
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if compress {
            compress_into(src, &target)?;
        } else {
            fs::copy(src, &target)?;
        }
        Ok(target)
    }
}

/// Write `src` as the single entry of a new zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Storage(format!("invalid database path: {}", src.display())))?;

    let mut f = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
