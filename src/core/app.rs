//! Top-level attendance context: the ledger plus its downstream sync.

use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::sync::RemoteSync;
use crate::db::pool::DbPool;
use crate::db::store::{LedgerStore, SqliteStore};
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, ScanCandidate};
use crate::ui::messages::{scan_feedback, success};
use crate::utils::time::Timestamper;

pub struct Attendance<S: LedgerStore> {
    pub ledger: Ledger<S>,
    pub sync: RemoteSync,
}

impl Attendance<SqliteStore> {
    /// Open the configured database and load the ledger stored under
    /// `cfg.storage_key`.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let clock = Timestamper::from_config_str(&cfg.utc_offset)?;
        let pool = DbPool::open_initialized(&cfg.database)?;
        let store = SqliteStore::new(pool, cfg.storage_key.clone());

        Ok(Self::new(
            Ledger::load(store, clock),
            RemoteSync::from_config(cfg),
        ))
    }
}

impl<S: LedgerStore> Attendance<S> {
    pub fn new(ledger: Ledger<S>, sync: RemoteSync) -> Self {
        Self { ledger, sync }
    }

    /// Record a scan, report it, and forward it when it is new.
    pub fn scan(&mut self, candidate: ScanCandidate) -> AppResult<AttendanceRecord> {
        let record = self.ledger.record_scan(candidate)?;

        let operation = if record.duplicate { "duplicate" } else { "scan" };
        self.ledger
            .store()
            .journal(operation, &record.id, &format!("{} at {}", record.name, record.timestamp));

        scan_feedback(&record);

        if !record.duplicate {
            self.sync.submit(&record);
        }

        Ok(record)
    }

    /// Parse a raw payload, then [`Attendance::scan`]. `name` overrides any
    /// name carried by the payload.
    pub fn scan_payload(
        &mut self,
        payload: &str,
        name: Option<String>,
    ) -> AppResult<AttendanceRecord> {
        let mut candidate = ScanCandidate::parse(payload)?;
        if let Some(n) = name.filter(|n| !n.is_empty()) {
            candidate.name = Some(n);
        }
        self.scan(candidate)
    }

    /// Empty the ledger. Callers confirm with the user beforehand.
    pub fn clear(&mut self) {
        let removed = self.ledger.len();
        self.ledger.clear();
        self.ledger
            .store()
            .journal("clear", "", &format!("Cleared {} records", removed));
        success("All scanned IDs have been cleared.");
    }
}
