//! Time utilities: record timestamps in a fixed offset, filename stamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// en-US "medium" date + time, e.g. `Oct 19, 2026, 3:04:05 PM`.
const MEDIUM_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

/// Parse `+08:00`, `-0530`, `Z` into a fixed offset.
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    s.parse::<FixedOffset>()
        .map_err(|_| AppError::InvalidOffset(s.to_string()))
}

/// Produces the timestamps stored on attendance records.
#[derive(Debug, Clone, Copy)]
pub struct Timestamper {
    offset: FixedOffset,
}

impl Timestamper {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn from_config_str(s: &str) -> AppResult<Self> {
        parse_utc_offset(s).map(Self::new)
    }

    pub fn now(&self) -> String {
        self.format(Utc::now())
    }

    pub fn format(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset).format(MEDIUM_FORMAT).to_string()
    }
}

impl Default for Timestamper {
    fn default() -> Self {
        // Asia/Manila
        Self::new(FixedOffset::east_opt(8 * 3600).unwrap_or(Utc.fix()))
    }
}

/// `YYYY-MM-DD_HH-MM`, used to stamp export file names.
pub fn filename_stamp(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%d_%H-%M").to_string()
}
