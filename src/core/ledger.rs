//! The attendance ledger: newest-first list of scans with duplicate flags,
//! persisted as one JSON value after every mutation.

use crate::db::store::LedgerStore;
use crate::errors::AppResult;
use crate::models::record::{AttendanceRecord, UNKNOWN_NAME};
use crate::models::ScanCandidate;
use crate::ui::messages::error;
use crate::utils::time::Timestamper;

pub struct Ledger<S: LedgerStore> {
    records: Vec<AttendanceRecord>,
    store: S,
    clock: Timestamper,
    persisted: bool,
}

impl<S: LedgerStore> Ledger<S> {
    /// Read the ledger from `store`. A missing or unreadable value yields
    /// an empty ledger; nothing is written back until the first mutation.
    pub fn load(store: S, clock: Timestamper) -> Self {
        let records = match store.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<AttendanceRecord>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    error(format!("Stored attendance list is corrupt, starting empty: {}", e));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error(format!("Error loading attendance list: {}", e));
                Vec::new()
            }
        };

        Self {
            records,
            store,
            clock,
            persisted: true,
        }
    }

    /// Append a scan at the head of the ledger.
    ///
    /// `duplicate` is decided here, once, by exact comparison with the ids
    /// already present. The full ledger is then persisted; a persistence
    /// failure is reported but the record is kept in memory.
    pub fn record_scan(&mut self, candidate: ScanCandidate) -> AppResult<AttendanceRecord> {
        let candidate = candidate.validated()?;

        let duplicate = self.contains(&candidate.id);
        let record = AttendanceRecord {
            id: candidate.id,
            name: candidate
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            timestamp: self.clock.now(),
            duplicate,
        };

        self.records.insert(0, record.clone());
        self.persist();

        Ok(record)
    }

    /// Drop every record and persist the empty list.
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    /// Snapshot of the ledger, newest first.
    pub fn export_records(&self) -> Vec<AttendanceRecord> {
        self.records.clone()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the last write to the store succeeded.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.records)
            .map_err(Into::into)
            .and_then(|json| self.store.save(&json));

        self.persisted = match result {
            Ok(()) => true,
            Err(e) => {
                error(format!("Error saving attendance list: {}", e));
                false
            }
        };
    }
}
