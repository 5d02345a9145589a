use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const DEFAULT_LUNCH_START: &str = "10:30";
const DEFAULT_LUNCH_STOP: &str = "13:00";

/// User configuration, stored as YAML.
///
/// Every field has a built-in default, so a partial file (or no file at all)
/// yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    /// Comma-separated list of stamp codes.
    pub codes: String,
    pub default_code_stamp_in: String,
    pub default_code_stamp_out: String,
    pub typical_lunch_start: String,
    pub typical_lunch_stop: String,
    pub stamp_in_comment_msg: String,
    pub stamp_out_comment_msg: String,
    pub default_stamp_in_comment: String,
    pub default_stamp_out_comment: String,
    pub default_stamp_out_lunch_comment: String,
    pub backup_days: i64,
    pub backup_dir: String,
    pub export_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            codes: "work,play".to_string(),
            default_code_stamp_in: "work".to_string(),
            default_code_stamp_out: "play".to_string(),
            typical_lunch_start: DEFAULT_LUNCH_START.to_string(),
            typical_lunch_stop: DEFAULT_LUNCH_STOP.to_string(),
            stamp_in_comment_msg: "Stamp in comment:".to_string(),
            stamp_out_comment_msg: "Stamp out comment:".to_string(),
            default_stamp_in_comment: String::new(),
            default_stamp_out_comment: String::new(),
            default_stamp_out_lunch_comment: "lunch".to_string(),
            backup_days: 7,
            backup_dir: dir.join("backups").to_string_lossy().to_string(),
            export_dir: dir.join("out").to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("stamplog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".stamplog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stamplog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("time_log.db")
    }

    /// Load configuration from `path`, or return defaults if not found.
    ///
    /// A file that cannot be read or parsed is reported as a warning and the
    /// built-in defaults are used instead.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!("{e}; using built-in defaults"));
                Self::default()
            }
        }
    }

    /// Strict variant of [`Config::load`]: a missing file still yields the
    /// defaults, but read and parse failures are returned.
    pub fn try_load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Configured stamp codes, trimmed, empty items dropped.
    pub fn code_list(&self) -> Vec<String> {
        self.codes
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    }

    pub fn is_known_code(&self, code: &str) -> bool {
        self.code_list().iter().any(|c| c == code)
    }

    /// Lunch window as local times of day.
    /// Malformed values fall back to 10:30–13:00.
    pub fn lunch_window(&self) -> (NaiveTime, NaiveTime) {
        (
            Self::time_or_default(&self.typical_lunch_start, DEFAULT_LUNCH_START),
            Self::time_or_default(&self.typical_lunch_stop, DEFAULT_LUNCH_STOP),
        )
    }

    fn time_or_default(value: &str, fallback: &str) -> NaiveTime {
        parse_time(value).unwrap_or_else(|| {
            warning(format!(
                "Invalid lunch time '{value}' in configuration, using {fallback}"
            ));
            parse_time(fallback).unwrap_or(NaiveTime::MIN)
        })
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn backup_dir_path(&self) -> PathBuf {
        expand_tilde(&self.backup_dir)
    }

    pub fn export_dir_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    /// Report keys whose values are unusable. An empty list means the
    /// configuration is consistent.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let codes = self.code_list();

        if codes.is_empty() {
            problems.push("'codes' is empty".to_string());
        }
        for (key, code) in [
            ("default_code_stamp_in", &self.default_code_stamp_in),
            ("default_code_stamp_out", &self.default_code_stamp_out),
        ] {
            if !codes.contains(code) {
                problems.push(format!("'{key}' = '{code}' is not listed in 'codes'"));
            }
        }
        for (key, value) in [
            ("typical_lunch_start", &self.typical_lunch_start),
            ("typical_lunch_stop", &self.typical_lunch_stop),
        ] {
            if parse_time(value).is_none() {
                problems.push(format!("'{key}' = '{value}' is not a valid HH:MM time"));
            }
        }
        if self.backup_days < 0 {
            problems.push("'backup_days' must not be negative".to_string());
        }
        if self.database.trim().is_empty() {
            problems.push("'database' is empty".to_string());
        }

        problems
    }

    /// Write this configuration to `path`, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }
}
