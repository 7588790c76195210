//! Scan sources: anything that can hand over scanned payloads one at a time.

pub mod decoder;
pub mod manual;

pub use decoder::DecoderFeed;
pub use manual::ManualEntry;

use crate::errors::AppResult;

/// What a source delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Raw scanned content: JSON `{id, name?}` or a plain id.
    Payload(String),
    /// Interactive meta-command (`:list`, `:clear`, ...), without the colon.
    Command(String),
}

pub trait ScanSource {
    /// Block until the next event. `Ok(None)` means the source is exhausted.
    fn next_scan(&mut self) -> AppResult<Option<ScanEvent>>;

    /// Short label for feedback messages.
    fn describe(&self) -> String;

    /// Ask the operator a yes/no question through this source.
    /// Sources without an operator never confirm.
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}
