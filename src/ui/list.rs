//! Live list view of the ledger.

use crate::models::AttendanceRecord;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RED, RESET};

pub const EMPTY_LIST: &str = "No scanned IDs yet";

/// Render the list as printable lines: `id (name)` then the timestamp,
/// duplicates in red.
pub fn render_lines(records: &[AttendanceRecord], color: bool) -> Vec<String> {
    if records.is_empty() {
        return vec![EMPTY_LIST.to_string()];
    }

    let label_w = records
        .iter()
        .map(|r| r.label().chars().count())
        .max()
        .unwrap_or(0);

    records
        .iter()
        .map(|r| {
            let label = format!("{:<label_w$}", r.label(), label_w = label_w);
            let marker = if r.duplicate { " [duplicate]" } else { "" };
            if color {
                let fg = if r.duplicate { RED } else { RESET };
                format!("{fg}{label}{RESET}  {GREY}{}{RESET}{fg}{marker}{RESET}", r.timestamp)
            } else {
                format!("{label}  {}{marker}", r.timestamp)
            }
        })
        .collect()
}

pub fn print_list(records: &[AttendanceRecord]) {
    header(format!("Scanned IDs ({})", records.len()));
    for line in render_lines(records, true) {
        println!("{}", line);
    }
}
