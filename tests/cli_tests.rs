use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_scans, rc, scan, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_scan_reports_new_then_duplicate() {
    let db_path = setup_test_db("scan_new_then_duplicate");

    rc().args(["--db", &db_path, "scan", "A1"])
        .assert()
        .success()
        .stdout(contains("Successfully scanned: A1"));

    rc().args(["--db", &db_path, "scan", "A1", "--name", "Bob"])
        .assert()
        .success()
        .stderr(contains("Duplicate scan detected: A1"));
}

#[test]
fn test_scan_rejects_payload_without_id() {
    let db_path = setup_test_db("scan_rejects_missing_id");

    rc().args(["--db", &db_path, "scan", r#"{"name":"Bob"}"#])
        .assert()
        .failure()
        .stderr(contains("no ID"));

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No scanned IDs yet"));
}

#[test]
fn test_list_shows_newest_first() {
    let db_path = setup_test_db("list_newest_first");
    init_db_with_scans(&db_path);

    let out = rc()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("Scanned IDs (3)"));
    let bob = stdout.find("A1 (Bob)").expect("duplicate row");
    let alice = stdout.find("B2 (Alice)").expect("alice row");
    let first = stdout.find("A1 (Unknown)").expect("first row");
    assert!(bob < alice && alice < first);
}

#[test]
fn test_clear_with_force() {
    let db_path = setup_test_db("clear_with_force");
    init_db_with_scans(&db_path);

    rc().args(["--db", &db_path, "clear", "--force"])
        .assert()
        .success()
        .stdout(contains("All scanned IDs have been cleared."));

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No scanned IDs yet").and(contains("Scanned IDs (0)")));
}

#[test]
fn test_clear_cancelled() {
    let db_path = setup_test_db("clear_cancelled");
    init_db_with_scans(&db_path);

    rc().args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Scanned IDs (3)"));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_scans(&db_path);
    let out = temp_out("export_csv", "csv");

    rc().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "ID,Name,Timestamp,Duplicate");
    assert!(lines[1].starts_with("A1,Bob,") && lines[1].ends_with(",Yes"));
    assert!(lines[2].starts_with("B2,Alice,") && lines[2].ends_with(",No"));
    assert!(lines[3].starts_with("A1,Unknown,") && lines[3].ends_with(",No"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_scans(&db_path);
    let out = temp_out("export_json", "json");

    rc().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 3);
    assert_eq!(v[0]["id"], "A1");
    assert_eq!(v[0]["duplicate"], true);
}

#[test]
fn test_export_empty_ledger_fails() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");

    rc().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No data to export."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_requires_confirmation() {
    let db_path = setup_test_db("export_overwrite");
    scan(&db_path, "A1");
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rc().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rc().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("ID,Name"));
}

#[test]
fn test_manual_session() {
    let db_path = setup_test_db("manual_session");

    rc().args(["--db", &db_path, "session"])
        .write_stdin("A1\nB2\nA1\n{\"name\":\"x\"}\n:list\n:quit\n")
        .assert()
        .success()
        .stdout(contains("Scanned IDs (3)"))
        .stdout(contains("Session ended: 3 recorded (1 duplicates), 1 rejected."))
        .stderr(contains("Invalid QR code format. Missing ID."));
}

#[cfg(unix)]
#[test]
fn test_decoder_session_reads_payloads() {
    let db_path = setup_test_db("decoder_session");

    rc().args([
        "--db",
        &db_path,
        "session",
        "--decoder",
        "--decoder-cmd",
        "echo QR-Code:D42",
    ])
    .assert()
    .success()
    .stdout(contains("Successfully scanned: D42"));

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("D42 (Unknown)"));
}

#[test]
fn test_missing_decoder_is_scanner_error() {
    let db_path = setup_test_db("missing_decoder");

    rc().args([
        "--db",
        &db_path,
        "session",
        "--decoder",
        "--decoder-cmd",
        "rollcall-no-such-decoder-binary",
    ])
    .assert()
    .failure()
    .stderr(contains("Scanner error"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_scans(&db_path);

    rc().args(["--db", &db_path, "clear", "--force"])
        .assert()
        .success();

    rc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("(A1)"))
        .stdout(contains("Cleared 3 records"));
}

#[cfg(unix)]
#[test]
fn test_failing_decoder_still_prints_summary() {
    let db_path = setup_test_db("failing_decoder_summary");

    rc().args(["--db", &db_path, "session", "--decoder", "--decoder-cmd", "false"])
        .assert()
        .failure()
        .stdout(contains("Session ended: 0 recorded (0 duplicates), 0 rejected."))
        .stderr(contains("Scanner error"));
}
