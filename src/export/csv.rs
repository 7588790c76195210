// src/export/csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADERS: [&str; 4] = ["ID", "Name", "Timestamp", "Duplicate"];

/// Write the ledger as CSV, one row per record in ledger order.
///
/// Fields containing commas (the timestamp always does) are quoted.
pub fn write_csv<W: Write>(out: W, records: &[AttendanceRecord]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(CSV_HEADERS)?;
    for r in records {
        wtr.write_record([
            r.id.as_str(),
            r.name.as_str(),
            r.timestamp.as_str(),
            r.duplicate_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = std::fs::File::create(path)?;
    write_csv(file, records)?;

    notify_export_success("CSV", path);
    Ok(())
}
