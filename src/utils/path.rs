//! Path utilities: expand ~, default export file names.

use crate::utils::time::filename_stamp;
use chrono::{DateTime, Local};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `attendance_YYYY-MM-DD_HH-MM.<ext>` in the current directory.
pub fn default_export_path(ext: &str, at: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("attendance_{}.{}", filename_stamp(at), ext))
}

/// User-supplied path (with `~` expanded) or the stamped default.
pub fn resolve_export_path(file: Option<&str>, ext: &str) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => default_export_path(ext, Local::now()),
    }
}
