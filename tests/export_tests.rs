mod common;
use chrono::{TimeZone, Utc};
use common::{open_test_store, temp_dir};
use stamplog::export::{ExportFormat, ExportLogic};
use stamplog::models::status::Status;
use std::fs;

#[test]
fn test_csv_export_has_header_and_local_timestamps() {
    let store = open_test_store("export_csv_rows");
    store
        .append(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            Status::In,
            "work",
            Some("start, early"),
        )
        .unwrap();
    store
        .append(
            Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap(),
            Status::Out,
            "play",
            None,
        )
        .unwrap();
    let entries = store
        .query_range(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        )
        .unwrap();

    let out = temp_dir("export_csv_rows_out").join("range.csv");
    let written = ExportLogic::export(&entries, ExportFormat::Csv, &out, true).unwrap();
    assert_eq!(written.as_deref(), Some(out.as_path()));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "ID,Timestamp,Status,Code,Comment");
    assert_eq!(
        lines[1],
        format!("1,{},in,work,\"start, early\"", entries[0].local_str())
    );
    assert_eq!(lines[2], format!("2,{},out,play,", entries[1].local_str()));
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_json_export_uses_same_columns() {
    let store = open_test_store("export_json_rows");
    store
        .append(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            Status::In,
            "work",
            None,
        )
        .unwrap();
    let entries = store.latest().unwrap().into_iter().collect::<Vec<_>>();

    let out = temp_dir("export_json_rows_out").join("range.json");
    ExportLogic::export(&entries, ExportFormat::Json, &out, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let row = &value[0];
    assert_eq!(row["ID"], 1);
    assert_eq!(row["Status"], "in");
    assert_eq!(row["Code"], "work");
    assert_eq!(row["Timestamp"], entries[0].local_str());
}

#[test]
fn test_empty_export_writes_nothing() {
    let out = temp_dir("export_empty").join("nothing.csv");
    let written = ExportLogic::export(&[], ExportFormat::Csv, &out, true).unwrap();
    assert!(written.is_none());
    assert!(!out.exists());
}

#[test]
fn test_default_file_name_uses_range_dates() {
    assert_eq!(
        ExportLogic::default_file_name("2024-01-01 08:00", "2024-01-31 18:00", ExportFormat::Csv),
        "2024-01-01_2024-01-31.csv"
    );
    assert_eq!(
        ExportLogic::default_file_name("2024-02-01", "2024-02-29 23:59", ExportFormat::Json),
        "2024-02-01_2024-02-29.json"
    );
}
