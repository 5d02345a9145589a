mod common;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use common::{open_test_store, test_config};
use stamplog::core::tracker::SessionTracker;
use stamplog::errors::ErrorKind;
use stamplog::models::entry::LogEntry;
use stamplog::models::status::{CurrentStatus, Status};

fn local(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn utc(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap()
}

#[test]
fn test_new_tracker_on_empty_store_is_unknown() {
    let store = open_test_store("tracker_unknown");
    let tracker = SessionTracker::load(&store).unwrap();
    assert_eq!(tracker.status(), CurrentStatus::Unknown);
    assert_eq!(tracker.next_direction(), Status::In);
}

#[test]
fn test_toggle_alternates_starting_with_in() {
    let store = open_test_store("tracker_alternate");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let start = utc(6);
    let mut expected = CurrentStatus::In;
    for i in 0..7 {
        let outcome = tracker
            .toggle(
                &store,
                start + Duration::minutes(i * 10),
                local(6, 0),
                None,
                None,
                &cfg,
            )
            .unwrap();
        assert_eq!(outcome.status, expected);
        assert_eq!(tracker.status(), expected);
        expected = if expected == CurrentStatus::In {
            CurrentStatus::Out
        } else {
            CurrentStatus::In
        };
    }
    assert_eq!(store.count().unwrap(), 7);
}

#[test]
fn test_two_toggle_scenario() {
    let store = open_test_store("tracker_scenario");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let first = tracker
        .toggle(&store, utc(9), local(9, 0), Some("work"), Some(""), &cfg)
        .unwrap();
    assert_eq!(first.entry.id, 1);
    assert_eq!(first.entry.status, Status::In);
    assert_eq!(first.entry.code, "work");
    assert_eq!(first.status, CurrentStatus::In);

    let second = tracker
        .toggle(&store, utc(17), local(17, 0), Some("play"), Some(""), &cfg)
        .unwrap();
    assert_eq!(second.entry.id, 2);
    assert_eq!(second.entry.status, Status::Out);
    assert_eq!(second.entry.code, "play");
    assert_eq!(second.entry.comment_str(), cfg.default_stamp_out_comment);
    assert_eq!(second.status, CurrentStatus::Out);

    let stored = store.get(2).unwrap().unwrap();
    assert_eq!(stored, second.entry);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn test_out_comment_uses_lunch_default_inside_window() {
    let store = open_test_store("tracker_lunch");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    tracker
        .toggle(&store, utc(8), local(8, 0), None, None, &cfg)
        .unwrap();
    let out = tracker
        .toggle(&store, utc(12), local(12, 0), None, Some(""), &cfg)
        .unwrap();
    assert_eq!(out.entry.status, Status::Out);
    assert_eq!(out.entry.comment_str(), cfg.default_stamp_out_lunch_comment);
}

#[test]
fn test_out_comment_uses_regular_default_outside_window() {
    let store = open_test_store("tracker_no_lunch");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    tracker
        .toggle(&store, utc(7), local(7, 0), None, None, &cfg)
        .unwrap();
    let out = tracker
        .toggle(&store, utc(9), local(9, 0), None, Some(""), &cfg)
        .unwrap();
    assert_eq!(out.entry.comment_str(), cfg.default_stamp_out_comment);
}

#[test]
fn test_lunch_window_bounds_are_inclusive() {
    let cfg = test_config();
    assert_eq!(
        SessionTracker::out_comment_default(&cfg, local(10, 30)),
        "lunch"
    );
    assert_eq!(
        SessionTracker::out_comment_default(&cfg, local(13, 0)),
        "lunch"
    );
    assert_eq!(SessionTracker::out_comment_default(&cfg, local(13, 1)), "done");
    assert_eq!(SessionTracker::out_comment_default(&cfg, local(10, 29)), "done");
}

#[test]
fn test_caller_comment_wins_over_defaults() {
    let store = open_test_store("tracker_caller_comment");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let stamped_in = tracker
        .toggle(&store, utc(8), local(8, 0), None, Some("early start"), &cfg)
        .unwrap();
    assert_eq!(stamped_in.entry.comment.as_deref(), Some("early start"));

    let out = tracker
        .toggle(&store, utc(12), local(12, 0), None, Some("doctor"), &cfg)
        .unwrap();
    assert_eq!(out.entry.comment.as_deref(), Some("doctor"));
}

#[test]
fn test_missing_code_uses_direction_default() {
    let store = open_test_store("tracker_default_code");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let stamped_in = tracker
        .toggle(&store, utc(8), local(8, 0), None, None, &cfg)
        .unwrap();
    assert_eq!(stamped_in.entry.code, cfg.default_code_stamp_in);
    assert_eq!(stamped_in.entry.comment_str(), cfg.default_stamp_in_comment);

    let out = tracker
        .toggle(&store, utc(9), local(9, 0), Some("  "), None, &cfg)
        .unwrap();
    assert_eq!(out.entry.code, cfg.default_code_stamp_out);
}

#[test]
fn test_outcome_carries_defaults_for_opposite_direction() {
    let store = open_test_store("tracker_next_defaults");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let stamped_in = tracker
        .toggle(&store, utc(8), local(8, 0), None, None, &cfg)
        .unwrap();
    assert_eq!(stamped_in.next.code, cfg.default_code_stamp_out);
    assert_eq!(stamped_in.next.comment, cfg.default_stamp_out_comment);
    assert_eq!(stamped_in.next.prompt, cfg.stamp_out_comment_msg);

    let out = tracker
        .toggle(&store, utc(9), local(9, 0), None, None, &cfg)
        .unwrap();
    assert_eq!(out.next.code, cfg.default_code_stamp_in);
    assert_eq!(out.next.comment, cfg.default_stamp_in_comment);
    assert_eq!(out.next.prompt, cfg.stamp_in_comment_msg);
}

#[test]
fn test_unknown_code_is_rejected_without_writing() {
    let store = open_test_store("tracker_bad_code");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let err = tracker
        .toggle(&store, utc(8), local(8, 0), Some("nap"), None, &cfg)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(store.count().unwrap(), 0);
    assert_eq!(tracker.status(), CurrentStatus::Unknown);
}

#[test]
fn test_status_is_derived_from_existing_log() {
    let store = open_test_store("tracker_existing");
    store.append(utc(8), Status::In, "work", None).unwrap();

    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();
    assert_eq!(tracker.status(), CurrentStatus::In);

    let out = tracker
        .toggle(&store, utc(9), local(9, 0), None, None, &cfg)
        .unwrap();
    assert_eq!(out.entry.status, Status::Out);
}

#[test]
fn test_unloaded_tracker_looks_up_status_before_toggling() {
    let store = open_test_store("tracker_lazy");
    store.append(utc(8), Status::In, "work", None).unwrap();

    let cfg = test_config();
    let mut tracker = SessionTracker::default();
    let out = tracker
        .toggle(&store, utc(9), local(9, 0), None, None, &cfg)
        .unwrap();
    assert_eq!(out.entry.status, Status::Out);
}

#[test]
fn test_delete_latest_rederives_status() {
    let store = open_test_store("tracker_delete");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    tracker
        .toggle(&store, utc(8), local(8, 0), None, None, &cfg)
        .unwrap();
    let out = tracker
        .toggle(&store, utc(9), local(9, 0), None, None, &cfg)
        .unwrap();
    assert_eq!(tracker.status(), CurrentStatus::Out);

    assert!(tracker.delete_entry(&store, out.entry.id).unwrap());
    assert_eq!(tracker.status(), CurrentStatus::In);

    assert!(!tracker.delete_entry(&store, out.entry.id).unwrap());
    assert_eq!(tracker.status(), CurrentStatus::In);
}

#[test]
fn test_deleting_only_entry_returns_to_unknown() {
    let store = open_test_store("tracker_delete_all");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let stamped = tracker
        .toggle(&store, utc(8), local(8, 0), None, None, &cfg)
        .unwrap();
    tracker.delete_entry(&store, stamped.entry.id).unwrap();
    assert_eq!(tracker.status(), CurrentStatus::Unknown);
}

#[test]
fn test_edit_latest_rederives_status() {
    let store = open_test_store("tracker_edit");
    let cfg = test_config();
    let mut tracker = SessionTracker::load(&store).unwrap();

    let stamped = tracker
        .toggle(&store, utc(8), local(8, 0), None, None, &cfg)
        .unwrap();
    let edited = LogEntry {
        status: Status::Out,
        ..stamped.entry.clone()
    };
    let status = tracker.update_entry(&store, &edited).unwrap();
    assert_eq!(status, CurrentStatus::Out);
    assert_eq!(tracker.next_direction(), Status::In);
}

#[test]
fn test_edit_of_missing_entry_is_not_found() {
    let store = open_test_store("tracker_edit_missing");
    let mut tracker = SessionTracker::load(&store).unwrap();
    let ghost = LogEntry {
        id: 77,
        timestamp: utc(8),
        status: Status::In,
        code: "work".to_string(),
        comment: None,
    };
    let err = tracker.update_entry(&store, &ghost).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
