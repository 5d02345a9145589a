#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use stamplog::config::Config;
use stamplog::core::store::LogStore;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with colours disabled so output can be matched.
pub fn stl() -> Command {
    let mut cmd = cargo_bin_cmd!("stamplog");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fresh scratch directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("stamplog_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Unique database path for a test; any previous file is removed.
pub fn setup_test_db(name: &str) -> PathBuf {
    temp_dir(name).join("time_log.db")
}

/// Store opened on a fresh database file.
pub fn open_test_store(name: &str) -> LogStore {
    LogStore::initialize(&setup_test_db(name)).expect("open store")
}

/// Configuration used by the library tests: lunch window 10:30–13:00 and
/// distinct comment defaults per direction.
pub fn test_config() -> Config {
    Config {
        codes: "work,play,meeting".to_string(),
        default_code_stamp_in: "work".to_string(),
        default_code_stamp_out: "play".to_string(),
        typical_lunch_start: "10:30".to_string(),
        typical_lunch_stop: "13:00".to_string(),
        default_stamp_in_comment: "start".to_string(),
        default_stamp_out_comment: "done".to_string(),
        default_stamp_out_lunch_comment: "lunch".to_string(),
        ..Config::default()
    }
}

/// Write a config file whose paths all point into the test's temp dir.
/// Returns (config path, database path).
pub fn setup_cli(name: &str) -> (String, String) {
    let dir = temp_dir(name);
    let db = dir.join("time_log.db");

    let cfg = Config {
        database: db.to_string_lossy().to_string(),
        backup_dir: dir.join("backups").to_string_lossy().to_string(),
        export_dir: dir.join("out").to_string_lossy().to_string(),
        ..test_config()
    };
    let conf = dir.join("stamplog.conf");
    fs::write(&conf, serde_yaml::to_string(&cfg).expect("yaml")).expect("write config");

    (
        conf.to_string_lossy().to_string(),
        db.to_string_lossy().to_string(),
    )
}
