//! ANSI color helper utilities for terminal output.

use crate::models::status::CurrentStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Green while stamped in, red once stamped out.
pub fn status_colour(status: CurrentStatus) -> Colour {
    match status {
        CurrentStatus::In => Colour::Green,
        CurrentStatus::Out => Colour::Red,
        CurrentStatus::Unknown => Colour::White,
    }
}

/// Paint a status word (`in` / `out`) with its colour.
/// Plain text when `NO_COLOR` is set.
pub fn paint_status(status: CurrentStatus) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return status.as_str().to_string();
    }
    status_colour(status).bold().paint(status.as_str()).to_string()
}

/// Grey placeholder for empty values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
