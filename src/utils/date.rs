//! Local date/time helpers for the range filters.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};

/// Input format without seconds, e.g. `2024-01-31 17:45`.
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Input format with seconds.
pub const SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Days covered by the default browse window.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// How a local date-time was written by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Seconds,
    Minutes,
}

/// Parse `YYYY-MM-DD HH:MM[:SS]`.
pub fn parse_local(s: &str) -> Option<(NaiveDateTime, Precision)> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, SECOND_FORMAT) {
        return Some((dt, Precision::Seconds));
    }
    NaiveDateTime::parse_from_str(s, MINUTE_FORMAT)
        .ok()
        .map(|dt| (dt, Precision::Minutes))
}

/// Interpret a naive local date-time in the given zone.
/// Ambiguous times (DST fold) resolve to the earlier instant; times that do
/// not exist (DST gap) are shifted forward by one hour.
pub fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(early, _) => early.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = naive + Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
                LocalResult::None => naive.and_utc(),
            }
        }
    }
}

/// Last representable instant of the minute containing `ts`.
pub fn end_of_minute(ts: DateTime<Utc>) -> DateTime<Utc> {
    let floored = ts
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts);
    floored + Duration::minutes(1) - Duration::nanoseconds(1)
}

/// A UTC range resolved from the user's local from/to strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Resolve optional local `from`/`to` strings into an inclusive UTC range.
///
/// Missing or unparseable bounds fall back to the default window:
/// `from = now - 7 days`, `to = now`. The upper bound always covers its
/// whole minute unless seconds were given explicitly.
pub fn resolve_range<Tz: TimeZone>(
    tz: &Tz,
    from: Option<&str>,
    to: Option<&str>,
    now: DateTime<Utc>,
) -> UtcRange {
    let from_utc = from
        .and_then(parse_local)
        .map(|(dt, _)| localize(tz, dt))
        .unwrap_or_else(|| now - Duration::days(DEFAULT_WINDOW_DAYS));

    let to_utc = match to.and_then(parse_local) {
        Some((dt, Precision::Seconds)) => localize(tz, dt),
        Some((dt, Precision::Minutes)) => end_of_minute(localize(tz, dt)),
        None => end_of_minute(now),
    };

    UtcRange {
        from: from_utc,
        to: to_utc,
    }
}

/// Same as [`resolve_range`] using the machine's local zone and clock.
pub fn resolve_local_range(from: Option<&str>, to: Option<&str>) -> UtcRange {
    resolve_range(&Local, from, to, Utc::now())
}

/// Default text for the `--from` prompt/listing header.
pub fn default_from_text() -> String {
    (Local::now() - Duration::days(DEFAULT_WINDOW_DAYS))
        .format(MINUTE_FORMAT)
        .to_string()
}

pub fn default_to_text() -> String {
    Local::now().format(MINUTE_FORMAT).to_string()
}

/// Current year and month, `YYYY-MM`.
pub fn current_year_month() -> String {
    Local::now().format("%Y-%m").to_string()
}
