// src/export/json.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, same field names as the stored ledger.
pub(crate) fn export_json(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
