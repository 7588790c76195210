use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown";

fn unknown_name() -> String {
    UNKNOWN_NAME.to_string()
}

/// One entry of the attendance ledger.
///
/// The JSON shape (`id`, `name`, `timestamp`, `duplicate`) is both the
/// persisted form and the body posted to the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    #[serde(default = "unknown_name")]
    pub name: String,
    pub timestamp: String,
    #[serde(default)]
    pub duplicate: bool,
}

impl AttendanceRecord {
    /// `id (name)` as shown in the list view.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.clone()
        } else {
            format!("{} ({})", self.id, self.name)
        }
    }

    pub fn duplicate_str(&self) -> &'static str {
        if self.duplicate { "Yes" } else { "No" }
    }
}
