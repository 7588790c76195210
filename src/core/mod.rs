pub mod app;
pub mod ledger;
pub mod log;
pub mod session;
pub mod sync;

pub use app::Attendance;
pub use ledger::Ledger;
pub use sync::RemoteSync;
