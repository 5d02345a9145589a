//! Unified application error type.
//! Every layer (db, core, cli, utils) returns AppError so that failures reach
//! the presentation layer as one of four kinds: config, storage, not-found or
//! validation.

use std::io;
use thiserror::Error;

/// Coarse classification used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Storage,
    NotFound,
    Validation,
}

impl ErrorKind {
    /// What the user can do next, printed under the error message.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            ErrorKind::Config => {
                Some("Fix the configuration file; `stamplog config --print` shows the values in use.")
            }
            ErrorKind::NotFound => Some("Use `stamplog list` to see the existing IDs."),
            ErrorKind::Storage | ErrorKind::Validation => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("No entry found with ID {0}")]
    NotFound(i64),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid status '{0}' (expected 'in' or 'out')")]
    InvalidStatus(String),

    #[error("Unknown code '{0}'")]
    InvalidCode(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Io(_)
            | AppError::Db(_)
            | AppError::Storage(_)
            | AppError::Csv(_)
            | AppError::Json(_) => ErrorKind::Storage,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::InvalidTimestamp(_)
            | AppError::InvalidStatus(_)
            | AppError::InvalidCode(_)
            | AppError::Validation(_) => ErrorKind::Validation,
            AppError::Config(_) | AppError::ConfigParse(_) => ErrorKind::Config,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
