use chrono::{Duration, FixedOffset, NaiveTime, TimeZone, Utc};
use stamplog::utils::date::{DEFAULT_WINDOW_DAYS, end_of_minute, resolve_range};
use stamplog::utils::time::{parse_db_timestamp, to_db_timestamp, within_window};

fn plus_one() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
}

#[test]
fn test_local_bounds_are_converted_to_utc() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let r = resolve_range(
        &plus_one(),
        Some("2024-01-01 10:00:30"),
        Some("2024-01-01 11:00:15"),
        now,
    );
    assert_eq!(r.from, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 30).unwrap());
    assert_eq!(r.to, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 15).unwrap());
}

#[test]
fn test_upper_bound_without_seconds_covers_whole_minute() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let r = resolve_range(&plus_one(), Some("2024-01-01 10:00"), Some("2024-01-01 11:00"), now);
    assert_eq!(r.from, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    assert_eq!(
        r.to,
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 59).unwrap() + Duration::nanoseconds(999_999_999)
    );
}

#[test]
fn test_unparseable_bounds_fall_back_to_default_window() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 20).unwrap();
    let r = resolve_range(&plus_one(), Some("last tuesday"), Some("2024/01/01"), now);
    assert_eq!(r.from, now - Duration::days(DEFAULT_WINDOW_DAYS));
    assert_eq!(r.to, end_of_minute(now));
}

#[test]
fn test_missing_bounds_use_default_window() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let r = resolve_range(&Utc, None, None, now);
    assert_eq!(r.from, now - Duration::days(7));
    assert!(r.to >= now);
}

#[test]
fn test_db_timestamp_format_is_fixed_width_and_sortable() {
    let a = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let b = a + Duration::milliseconds(500);
    let (sa, sb) = (to_db_timestamp(&a), to_db_timestamp(&b));
    assert_eq!(sa.len(), sb.len());
    assert!(sa < sb);
    assert_eq!(parse_db_timestamp(&sb), Some(b));
}

#[test]
fn test_window_check_is_inclusive_and_wraps_midnight() {
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    assert!(within_window(t(10, 30), t(10, 30), t(13, 0)));
    assert!(within_window(t(13, 0), t(10, 30), t(13, 0)));
    assert!(!within_window(t(9, 0), t(10, 30), t(13, 0)));
    assert!(within_window(t(0, 30), t(23, 0), t(1, 0)));
    assert!(!within_window(t(12, 0), t(23, 0), t(1, 0)));
}
