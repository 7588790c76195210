// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::models::AttendanceRecord;
use crate::utils::path::resolve_export_path;
use std::path::PathBuf;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `records` (ledger order) to `file`, or to
    /// `attendance_<stamp>.<ext>` in the current directory when no file is given.
    ///
    /// Returns the path written.
    pub fn export(
        records: &[AttendanceRecord],
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        if records.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let path = resolve_export_path(file, format.as_str());
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(records, &path)?,
            ExportFormat::Json => export_json(records, &path)?,
        }

        Ok(path)
    }
}
