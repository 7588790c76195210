pub mod candidate;
pub mod record;

pub use candidate::ScanCandidate;
pub use record::AttendanceRecord;
