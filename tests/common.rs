#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rc() -> Command {
    cargo_bin_cmd!("rollcall")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Record one payload through the CLI
pub fn scan(db_path: &str, payload: &str) {
    rc().args(["--db", db_path, "scan", payload])
        .assert()
        .success();
}

/// Initialize DB and record A1, B2, A1 (the last one a duplicate named Bob)
pub fn init_db_with_scans(db_path: &str) {
    rc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    scan(db_path, "A1");
    scan(db_path, r#"{"id":"B2","name":"Alice"}"#);

    rc().args(["--db", db_path, "scan", "A1", "--name", "Bob"])
        .assert()
        .success();
}
