//! Interactive scan loop over any [`ScanSource`].

use crate::core::app::Attendance;
use crate::db::store::LedgerStore;
use crate::errors::{AppError, AppResult};
use crate::scan::{ScanEvent, ScanSource};
use crate::ui::list::print_list;
use crate::ui::messages::{error, info, warning};

const HELP: &str = "Type or scan an ID. Commands: :list, :clear, :quit";

/// Outcome counters of one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub recorded: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

pub struct SessionLogic;

impl SessionLogic {
    /// Feed every event of `source` into `app` until the source is exhausted
    /// or the operator quits. Bad payloads are reported and skipped; a
    /// failing source ends the session with its error, after the summary.
    pub fn run<S: LedgerStore, Src: ScanSource>(
        app: &mut Attendance<S>,
        source: &mut Src,
    ) -> AppResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        info(format!("Scanning from {}. {}", source.describe(), HELP));

        let mut outcome = Ok(());

        loop {
            let event = match source.next_scan() {
                Ok(Some(event)) => event,
                Ok(None) => break,
                Err(e) => {
                    outcome = Err(e);
                    break;
                }
            };

            match event {
                ScanEvent::Payload(payload) => match app.scan_payload(&payload, None) {
                    Ok(record) => {
                        summary.recorded += 1;
                        if record.duplicate {
                            summary.duplicates += 1;
                        }
                    }
                    Err(AppError::MissingId) => {
                        summary.rejected += 1;
                        error("Invalid QR code format. Missing ID.");
                    }
                    Err(e) => {
                        summary.rejected += 1;
                        error(e);
                    }
                },
                ScanEvent::Command(cmd) => match cmd.as_str() {
                    "list" | "l" => print_list(app.ledger.records()),
                    "clear" => {
                        if source.confirm("Are you sure you want to clear all scanned IDs?") {
                            app.clear();
                        } else {
                            info("Operation cancelled.");
                        }
                    }
                    "quit" | "q" | "exit" => break,
                    "help" | "h" => info(HELP),
                    other => warning(format!("Unknown command ':{}'. {}", other, HELP)),
                },
            }
        }

        app.sync.drain();
        info(format!(
            "Session ended: {} recorded ({} duplicates), {} rejected.",
            summary.recorded, summary.duplicates, summary.rejected
        ));
        outcome.map(|_| summary)
    }
}
