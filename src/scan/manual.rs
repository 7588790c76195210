use super::{ScanEvent, ScanSource};
use crate::errors::AppResult;
use crate::ui::prompt::ask_confirmation_from;
use std::io::BufRead;

/// IDs typed by hand, one per line.
///
/// Input is trimmed and blank lines are skipped. Lines starting with `:`
/// are meta-commands.
pub struct ManualEntry<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ManualEntry<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ScanSource for ManualEntry<R> {
    fn next_scan(&mut self) -> AppResult<Option<ScanEvent>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            if let Some(cmd) = input.strip_prefix(':') {
                return Ok(Some(ScanEvent::Command(cmd.trim().to_ascii_lowercase())));
            }
            return Ok(Some(ScanEvent::Payload(input.to_string())));
        }
    }

    fn describe(&self) -> String {
        "manual entry".to_string()
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        ask_confirmation_from(prompt, &mut self.reader)
    }
}
