use chrono::{Local, TimeZone, Utc};
use rollcall::export::write_csv;
use rollcall::models::AttendanceRecord;
use rollcall::ui::list::{EMPTY_LIST, render_lines};
use rollcall::utils::path::default_export_path;
use rollcall::utils::time::{Timestamper, parse_utc_offset};

fn record(id: &str, name: &str, duplicate: bool) -> AttendanceRecord {
    AttendanceRecord {
        id: id.into(),
        name: name.into(),
        timestamp: "Oct 19, 2026, 3:04:05 PM".into(),
        duplicate,
    }
}

#[test]
fn test_timestamp_medium_style_in_manila() {
    let t = Timestamper::default();
    let at = Utc.with_ymd_and_hms(2026, 10, 19, 7, 4, 5).unwrap();
    assert_eq!(t.format(at), "Oct 19, 2026, 3:04:05 PM");

    let midnight = Utc.with_ymd_and_hms(2026, 1, 1, 16, 0, 0).unwrap();
    assert_eq!(t.format(midnight), "Jan 2, 2026, 12:00:00 AM");
}

#[test]
fn test_timestamp_custom_offset() {
    let t = Timestamper::from_config_str("-05:00").unwrap();
    let at = Utc.with_ymd_and_hms(2026, 10, 19, 17, 30, 0).unwrap();
    assert_eq!(t.format(at), "Oct 19, 2026, 12:30:00 PM");
}

#[test]
fn test_parse_utc_offset() {
    assert_eq!(parse_utc_offset("+08:00").unwrap().local_minus_utc(), 8 * 3600);
    assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
    assert!(parse_utc_offset("Asia/Manila").is_err());
}

#[test]
fn test_csv_header_rows_and_quoting() {
    let records = vec![record("A1", "Bob", true), record("A1", "Unknown", false)];
    let mut out = Vec::new();
    write_csv(&mut out, &records).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "ID,Name,Timestamp,Duplicate",
            "A1,Bob,\"Oct 19, 2026, 3:04:05 PM\",Yes",
            "A1,Unknown,\"Oct 19, 2026, 3:04:05 PM\",No",
        ]
    );
}

#[test]
fn test_default_export_filename() {
    let at = Local.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
    assert_eq!(
        default_export_path("csv", at).to_string_lossy(),
        "attendance_2026-10-19_09-05.csv"
    );
}

#[test]
fn test_list_rendering() {
    assert_eq!(render_lines(&[], false), vec![EMPTY_LIST.to_string()]);

    let lines = render_lines(&[record("A1", "Bob", true), record("B22", "Alice", false)], false);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("A1 (Bob)"));
    assert!(lines[0].ends_with("[duplicate]"));
    assert!(lines[1].starts_with("B22 (Alice)"));
    assert!(!lines[1].contains("[duplicate]"));
}
